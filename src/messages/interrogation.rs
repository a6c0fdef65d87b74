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

//! Type 15: interrogation. Asks one or two stations to transmit
//! specific message types at a given slot offset. The second request to
//! the first station, and the whole second station block, are both
//! optional and only present when the sentence is long enough.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use serde::{Deserialize, Serialize};

const MIN_BITS: usize = 88;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterrogationRequest {
    pub msg_type: u8,
    pub slot_offset: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interrogation {
    pub header: CommonHeader,
    pub station1_mmsi: u32,
    pub station1_request1: InterrogationRequest,
    pub station1_request2: Option<InterrogationRequest>,
    pub station2_mmsi: Option<u32>,
    pub station2_request1: Option<InterrogationRequest>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<Interrogation, ParseError> {
    if buf.len() < MIN_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: MIN_BITS });
    }
    let station1_mmsi = buf.u(40, 30)?;
    let station1_request1 = InterrogationRequest { msg_type: buf.u(70, 6)? as u8, slot_offset: buf.u(76, 12)? as u16 };

    let station1_request2 = if buf.len() >= 110 {
        Some(InterrogationRequest { msg_type: buf.u(90, 6)? as u8, slot_offset: buf.u(96, 12)? as u16 })
    } else {
        None
    };

    let (station2_mmsi, station2_request1) = if buf.len() >= 160 {
        let mmsi = buf.u(110, 30)?;
        let req = InterrogationRequest { msg_type: buf.u(140, 6)? as u8, slot_offset: buf.u(146, 12)? as u16 };
        (Some(mmsi), Some(req))
    } else {
        (None, None)
    };

    Ok(Interrogation { header, station1_mmsi, station1_request1, station1_request2, station2_mmsi, station2_request1 })
}
