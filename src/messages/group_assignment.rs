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

//! Type 23: group assignment command. A base station tells every
//! station of a given type inside a rectangular area how often, and by
//! which access mode, to report.

use crate::bitbuffer::BitBuffer;
use crate::error::ParseError;
use crate::fields::coordinates;
use crate::fields::Field;
use crate::messages::CommonHeader;
use crate::types::{self, ReportingInterval, StationType};
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 160;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaRectangle {
    pub ne_longitude: Field<f64>,
    pub ne_latitude: Field<f64>,
    pub sw_longitude: Field<f64>,
    pub sw_latitude: Field<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuietTime {
    None,
    Minutes(u8),
}

fn decode_quiet_time(raw: u8) -> QuietTime {
    if raw == 0 {
        QuietTime::None
    } else {
        QuietTime::Minutes(raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupAssignmentCommand {
    pub header: CommonHeader,
    pub area: AreaRectangle,
    pub station_type: StationType,
    pub ship_type: u8,
    pub tx_rx_mode: u8,
    pub reporting_interval: ReportingInterval,
    pub quiet_time: QuietTime,
}

impl GroupAssignmentCommand {
    pub fn ship_type_description(&self) -> &'static str {
        types::ship_type_description(self.ship_type)
    }
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<GroupAssignmentCommand, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let (ne_longitude, ne_latitude) = coordinates::area_tenth_minute(buf.i(40, 18)?, buf.i(58, 17)?);
    let (sw_longitude, sw_latitude) = coordinates::area_tenth_minute(buf.i(75, 18)?, buf.i(93, 17)?);
    let station_type = types::station_type(buf.u(110, 4)? as u8);
    let ship_type = buf.u(114, 8)? as u8;
    let tx_rx_mode = buf.u(144, 2)? as u8;
    let reporting_interval = types::reporting_interval(buf.u(146, 4)? as u8);
    let quiet_time = decode_quiet_time(buf.u(150, 4)? as u8);

    Ok(GroupAssignmentCommand {
        header,
        area: AreaRectangle { ne_longitude, ne_latitude, sw_longitude, sw_latitude },
        station_type,
        ship_type,
        tx_rx_mode,
        reporting_interval,
        quiet_time,
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

    #[test]
    fn test_decode_minimal() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 23, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2); // spare
        push_bits(&mut bits, 1810, 18); // NE lon n/a
        push_bits(&mut bits, 910, 17); // NE lat n/a
        push_bits(&mut bits, 1810, 18); // SW lon n/a
        push_bits(&mut bits, 910, 17); // SW lat n/a
        push_bits(&mut bits, 4, 4); // station type: class B shipborne only
        push_bits(&mut bits, 70, 8); // ship type: cargo
        push_bits(&mut bits, 0, 22); // spare
        push_bits(&mut bits, 1, 2); // tx/rx mode
        push_bits(&mut bits, 3, 4); // reporting interval
        push_bits(&mut bits, 5, 4); // quiet time
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.area.ne_longitude, Field::Unavailable);
        assert_eq!(msg.station_type, StationType::ClassBShipborneOnly);
        assert_eq!(msg.ship_type_description(), "cargo");
        assert_eq!(msg.reporting_interval, ReportingInterval::ThreeMinutes);
        assert_eq!(msg.quiet_time, QuietTime::Minutes(5));
    }

    #[test]
    fn test_quiet_time_zero_is_none() {
        assert_eq!(decode_quiet_time(0), QuietTime::None);
        assert_eq!(decode_quiet_time(7), QuietTime::Minutes(7));
    }
}
