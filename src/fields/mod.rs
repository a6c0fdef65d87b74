/*
Copyright 2021 Timo Saarinen

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Shared decoders for fields whose raw integer encoding hides an ITU
//! "not available" sentinel: coordinates, timestamps, rate of turn,
//! dimensions, and SOTDMA/ITDMA communication state.

pub mod commstate;
pub mod coordinates;
pub mod dimensions;
pub mod rot;
pub mod timestamp;

use serde::{Deserialize, Serialize};

/// Every bounded field with an ITU sentinel decodes to one of these three
/// states rather than overloading `null`/`NaN`. `OutOfRange` keeps the raw
/// value for diagnostics, per `spec.md` §9 ("Sentinel-laden scalars").
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Field<T> {
    Valid(T),
    Unavailable,
    OutOfRange(i64),
}

impl<T> Field<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Valid(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Field::Valid(_))
    }
}
