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

//! Type 5: static and voyage related data, the richest of the class A
//! messages. 424 bits, almost always carried over two fragments.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::dimensions::{self, Dimensions};
use crate::messages::CommonHeader;
use crate::sixbit::{self, SixBitText};
use crate::types::{self, EpfdType};
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 424;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eta {
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

fn decode_eta(buf: &BitBuffer) -> Result<Eta, ParseError> {
    let month = buf.u(274, 4)?;
    let day = buf.u(278, 5)?;
    let hour = buf.u(283, 5)?;
    let minute = buf.u(288, 6)?;
    Ok(Eta {
        month: if month == 0 { None } else { Some(month as u8) },
        day: if day == 0 { None } else { Some(day as u8) },
        hour: if hour == 24 { None } else { Some(hour as u8) },
        minute: if minute == 60 { None } else { Some(minute as u8) },
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Draught {
    Meters(f64),
    Unavailable,
}

fn decode_draught(raw: u32) -> Draught {
    if raw == 0 {
        Draught::Unavailable
    } else {
        Draught::Meters(raw as f64 / 10.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticAndVoyageData {
    pub header: CommonHeader,
    pub ais_version: u8,
    pub imo_number: u32,
    pub callsign: SixBitText,
    pub vessel_name: SixBitText,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    pub epfd_type: EpfdType,
    pub eta: Eta,
    pub draught: Draught,
    pub destination: SixBitText,
    pub dte_ready: bool,
}

impl StaticAndVoyageData {
    pub fn ship_type_description(&self) -> &'static str {
        types::ship_type_description(self.ship_type)
    }
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<StaticAndVoyageData, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let ais_version = buf.u(38, 2)? as u8;
    let imo_number = buf.u(40, 30)?;
    let callsign = sixbit::decode(buf, 70, 7)?;
    let vessel_name = sixbit::decode(buf, 112, 20)?;
    let ship_type = buf.u(232, 8)? as u8;
    let dimensions = dimensions::decode(buf.u(240, 9)?, buf.u(249, 9)?, buf.u(258, 6)?, buf.u(264, 6)?);
    let epfd_type = types::epfd_type(buf.u(270, 4)? as u8);
    let eta = decode_eta(buf)?;
    let draught = decode_draught(buf.u(294, 8)?);
    let destination = sixbit::decode(buf, 302, 20)?;
    // DTE flag bit is inverted in the wire: 0 = data terminal ready, 1 = not ready.
    let dte_ready = !buf.bool(422)?;

    Ok(StaticAndVoyageData {
        header,
        ais_version,
        imo_number,
        callsign,
        vessel_name,
        ship_type,
        dimensions,
        epfd_type,
        eta,
        draught,
        destination,
        dte_ready,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_eta_sentinels() {
        let mut bits: crate::bitbuffer::Bits = crate::bitbuffer::Bits::new();
        bits.resize(424, false);
        let buf = crate::bitbuffer::BitBuffer::from_bits(bits);
        let eta = decode_eta(&buf).unwrap();
        assert_eq!(eta, Eta { month: None, day: None, hour: None, minute: None });
    }

    #[test]
    fn test_draught_sentinel() {
        assert_eq!(decode_draught(0), Draught::Unavailable);
        assert_eq!(decode_draught(50), Draught::Meters(5.0));
    }
}
