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

//! The 6-bit "second of UTC minute" timestamp field repeated across
//! most position reports (`spec.md` §4 table, UTC second sub-field).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timestamp {
    /// 0-59: the second of the UTC minute the fix was taken.
    Second(u8),
    Unavailable,
    ManualInputMode,
    DeadReckoning,
    PositioningSystemInoperative,
}

pub fn decode(raw: u8) -> Timestamp {
    match raw {
        0..=59 => Timestamp::Second(raw),
        60 => Timestamp::Unavailable,
        61 => Timestamp::ManualInputMode,
        62 => Timestamp::DeadReckoning,
        63 => Timestamp::PositioningSystemInoperative,
        _ => Timestamp::Unavailable,
    }
}
