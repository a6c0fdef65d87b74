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

//! Type 17: DGNSS broadcast binary message, relaying RTCM differential
//! correction data from a base station's reference position. The RTCM
//! header fields (message type, station id, Z-count, sequence, word
//! count, health) are decoded structurally; each RTCM data word stays
//! an opaque 24-bit value, since interpreting RTCM SC-104 content
//! itself is out of scope.

use crate::bitbuffer::BitBuffer;
use crate::error::ParseError;
use crate::fields::coordinates;
use crate::fields::Field;
use crate::messages::CommonHeader;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

const SUBMESSAGE_OFFSET: usize = 80;
const WORDS_OFFSET: usize = 120;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RtcmSubmessage {
    pub dgps_msg_type: u8,
    pub station_id: u16,
    pub z_count: u16,
    pub sequence: u8,
    pub health: u8,
    pub words: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DgnssBroadcast {
    pub header: CommonHeader,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub submessage: Option<RtcmSubmessage>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<DgnssBroadcast, ParseError> {
    if buf.len() < SUBMESSAGE_OFFSET {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: SUBMESSAGE_OFFSET });
    }
    let (longitude, latitude) = coordinates::dgnss(buf.i(40, 18)?, buf.i(58, 17)?);

    let submessage = if buf.len() >= WORDS_OFFSET {
        let dgps_msg_type = buf.u(80, 6)? as u8;
        let station_id = buf.u(86, 10)? as u16;
        let z_count = buf.u(96, 13)? as u16;
        let sequence = buf.u(109, 3)? as u8;
        let n_words = buf.u(112, 5)? as usize;
        let health = buf.u(117, 3)? as u8;

        let available_words = (buf.len() - WORDS_OFFSET) / 24;
        let n_words = n_words.min(available_words);
        let mut words = Vec::with_capacity(n_words);
        for i in 0..n_words {
            words.push(buf.u(WORDS_OFFSET + i * 24, 24)?);
        }
        Some(RtcmSubmessage { dgps_msg_type, station_id, z_count, sequence, health, words })
    } else {
        None
    };

    Ok(DgnssBroadcast { header, longitude, latitude, submessage })
}
