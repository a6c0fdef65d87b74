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

//! Types 7, 13: binary acknowledge and safety-related acknowledge. Both
//! share one layout: a header, 2 spare bits, then up to four repeated
//! (destination MMSI, sequence number) blocks, one per message being
//! acknowledged.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

const BLOCK_BITS: usize = 32;
const FIRST_BLOCK_OFFSET: usize = 40;
const MAX_BLOCKS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckedStation {
    pub mmsi: u32,
    pub sequence_number: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Acknowledge {
    pub header: CommonHeader,
    pub acked: Vec<AckedStation>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<Acknowledge, ParseError> {
    if buf.len() < FIRST_BLOCK_OFFSET {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: FIRST_BLOCK_OFFSET });
    }
    let mut acked = Vec::new();
    let mut offset = FIRST_BLOCK_OFFSET;
    for _ in 0..MAX_BLOCKS {
        if offset + BLOCK_BITS > buf.len() {
            break;
        }
        let mmsi = buf.u(offset, 30)?;
        let sequence_number = buf.u(offset + 30, 2)? as u8;
        acked.push(AckedStation { mmsi, sequence_number });
        offset += BLOCK_BITS;
    }
    Ok(Acknowledge { header, acked })
}
