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

//! Type 24: static data report, split over two message parts since a
//! class B "CS" unit's vessel name and detail fields together don't fit
//! one 168-bit slot. Part A carries only the name; part B carries
//! everything else. A receiver pairs them by MMSI, which is out of
//! scope for this crate (`spec.md` owns per-message decoding only, not
//! cross-message aggregation).

use crate::bitbuffer::BitBuffer;
use crate::error::ParseError;
use crate::fields::dimensions::{self, Dimensions};
use crate::messages::CommonHeader;
use crate::sixbit::{self, SixBitText};
use crate::types::{self, EpfdType};
use serde::{Deserialize, Serialize};

const MIN_BITS: usize = 40;
const PART_A_BITS: usize = 160;
const PART_B_BITS: usize = 166;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StaticDataReport {
    PartA {
        header: CommonHeader,
        vessel_name: SixBitText,
    },
    PartB {
        header: CommonHeader,
        ship_type: u8,
        vendor_id: SixBitText,
        callsign: SixBitText,
        dimensions: Dimensions,
        epfd_type: EpfdType,
    },
}

impl StaticDataReport {
    pub fn header(&self) -> &CommonHeader {
        match self {
            StaticDataReport::PartA { header, .. } => header,
            StaticDataReport::PartB { header, .. } => header,
        }
    }

    pub fn ship_type_description(&self) -> Option<&'static str> {
        match self {
            StaticDataReport::PartB { ship_type, .. } => Some(types::ship_type_description(*ship_type)),
            StaticDataReport::PartA { .. } => None,
        }
    }
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<StaticDataReport, ParseError> {
    if buf.len() < MIN_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: MIN_BITS });
    }
    let part_number = buf.u(38, 2)?;
    if part_number == 0 {
        if buf.len() < PART_A_BITS {
            return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: PART_A_BITS });
        }
        let vessel_name = sixbit::decode(buf, 40, 20)?;
        Ok(StaticDataReport::PartA { header, vessel_name })
    } else {
        if buf.len() < PART_B_BITS {
            return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: PART_B_BITS });
        }
        let ship_type = buf.u(40, 8)? as u8;
        let vendor_id = sixbit::decode(buf, 48, 7)?;
        let callsign = sixbit::decode(buf, 90, 7)?;
        let dimensions = dimensions::decode(buf.u(132, 9)?, buf.u(141, 9)?, buf.u(150, 6)?, buf.u(156, 6)?);
        let epfd_type = types::epfd_type(buf.u(162, 4)? as u8);
        Ok(StaticDataReport::PartB { header, ship_type, vendor_id, callsign, dimensions, epfd_type })
    }
}
