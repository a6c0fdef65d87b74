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

//! Type 10: UTC/date inquiry. Answered by the addressed station with a
//! type 11 message, which reuses the type 4 base station report layout.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcInquiry {
    pub header: CommonHeader,
    pub dest_mmsi: u32,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<UtcInquiry, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let dest_mmsi = buf.u(40, 30)?;
    Ok(UtcInquiry { header, dest_mmsi })
}
