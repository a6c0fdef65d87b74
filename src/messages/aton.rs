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

//! Type 21: aid-to-navigation (AtoN) report. The name field can run
//! past the fixed 272-bit layout into an optional extension of up to
//! 14 more 6-bit characters, appended to `name` rather than exposed
//! separately, matching how the base name field is used downstream.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::dimensions::{self, Dimensions};
use crate::fields::{coordinates, timestamp, Field};
use crate::messages::CommonHeader;
use crate::sixbit::{self, SixBitText};
use crate::types::{self, EpfdType};
use alloc::string::String;
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 272;
const NAME_EXTENSION_MAX_CHARS: usize = 14;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AidToNavigationReport {
    pub header: CommonHeader,
    pub aid_type: u8,
    pub name: String,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub dimensions: Dimensions,
    pub epfd_type: EpfdType,
    pub timestamp: timestamp::Timestamp,
    pub off_position: bool,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned_mode: bool,
}

impl AidToNavigationReport {
    pub fn aid_type_description(&self) -> &'static str {
        types::aid_type_description(self.aid_type)
    }
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<AidToNavigationReport, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let aid_type = buf.u(38, 5)? as u8;
    let base_name: SixBitText = sixbit::decode(buf, 43, 20)?;
    let position_accuracy = buf.bool(163)?;
    let (longitude, latitude) = coordinates::standard(buf.i(164, 28)?, buf.i(192, 27)?);
    let dimensions = dimensions::decode(buf.u(219, 9)?, buf.u(228, 9)?, buf.u(237, 6)?, buf.u(243, 6)?);
    let epfd_type = types::epfd_type(buf.u(249, 4)? as u8);
    let ts = timestamp::decode(buf.u(253, 6)? as u8);
    let off_position = buf.bool(259)?;
    let raim = buf.bool(268)?;
    let virtual_aid = buf.bool(269)?;
    let assigned_mode = buf.bool(270)?;

    let name = if buf.len() > REQUIRED_BITS {
        let extra_chars = ((buf.len() - REQUIRED_BITS) / 6).min(NAME_EXTENSION_MAX_CHARS);
        if extra_chars > 0 {
            let extension = sixbit::decode(buf, REQUIRED_BITS, extra_chars)?;
            let mut combined = base_name.raw;
            combined.push_str(&extension.raw);
            combined.trim_end_matches('@').trim_end().into()
        } else {
            base_name.trimmed
        }
    } else {
        base_name.trimmed
    };

    Ok(AidToNavigationReport {
        header,
        aid_type,
        name,
        position_accuracy,
        longitude,
        latitude,
        dimensions,
        epfd_type,
        timestamp: ts,
        off_position,
        raim,
        virtual_aid,
        assigned_mode,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitbuffer::{Bits, BitBuffer};

    fn push_bits(bits: &mut Bits, value: u32, width: usize) {
        for shift in (0..width).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }

    fn minimal_bits() -> Bits {
        let mut bits = Bits::new();
        push_bits(&mut bits, 21, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 1, 5); // aid type
        for _ in 0..20 {
            push_bits(&mut bits, 0, 6); // '@' padded name
        }
        push_bits(&mut bits, 0, 1); // accuracy
        push_bits(&mut bits, 0, 28);
        push_bits(&mut bits, 0, 27);
        push_bits(&mut bits, 0, 9);
        push_bits(&mut bits, 0, 9);
        push_bits(&mut bits, 0, 6);
        push_bits(&mut bits, 0, 6);
        push_bits(&mut bits, 0, 4);
        push_bits(&mut bits, 60, 6); // timestamp
        push_bits(&mut bits, 0, 1); // off position
        push_bits(&mut bits, 0, 8); // regional reserved
        push_bits(&mut bits, 0, 1); // raim
        push_bits(&mut bits, 0, 1); // virtual
        push_bits(&mut bits, 0, 1); // assigned
        push_bits(&mut bits, 0, 1); // spare
        bits
    }

    #[test]
    fn test_decode_no_extension() {
        let bits = minimal_bits();
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.name, "");
        assert_eq!(msg.aid_type_description(), "reference point");
    }

    #[test]
    fn test_decode_with_name_extension() {
        let mut bits = minimal_bits();
        push_bits(&mut bits, 1, 6); // 'A' extension char
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.name, "A");
    }
}
