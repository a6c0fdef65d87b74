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

//! Type 9: standard SAR aircraft position report. Same general shape as
//! the class A position report but with a GNSS altitude in place of
//! navigation status and rate of turn.
//!
//! Bit layout:
//! - 38-49 altitude (12)
//! - 50-59 speed over ground (10)
//! - 60 position accuracy (1)
//! - 61-88 longitude (28)
//! - 89-115 latitude (27)
//! - 116-127 course over ground (12)
//! - 128-133 time stamp (6)
//! - 134-141 regional reserved (8)
//! - 142 DTE flag (1)
//! - 143-145 spare (3)
//! - 146 assigned-mode flag (1)
//! - 147 RAIM flag (1)
//! - 148-167 radio status (20): 1-bit SOTDMA/ITDMA selector + 19-bit state

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::{coordinates, timestamp, Field};
use crate::messages::position_report::{self, CourseOverGround};
use crate::messages::CommonHeader;
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 168;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Altitude {
    Meters(u16),
    Unavailable,
    /// Raw value 4094: 4094 meters or higher.
    AtOrAboveMax,
}

fn decode_altitude(raw: u32) -> Altitude {
    match raw {
        4095 => Altitude::Unavailable,
        4094 => Altitude::AtOrAboveMax,
        v => Altitude::Meters(v as u16),
    }
}

/// Unlike the class A position report's 0.1-knot-resolution field, type
/// 9's speed over ground is a plain integer knot count — SAR aircraft
/// can exceed the 102.2 knot ceiling that format allows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpeedOverGround {
    Knots(u16),
    Unavailable,
    /// Raw value 1022: 1022 knots or faster.
    AtOrAboveMax,
}

fn decode_sog(raw: u32) -> SpeedOverGround {
    match raw {
        1023 => SpeedOverGround::Unavailable,
        1022 => SpeedOverGround::AtOrAboveMax,
        v => SpeedOverGround::Knots(v as u16),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SarAircraftPosition {
    pub header: CommonHeader,
    pub altitude: Altitude,
    pub speed_over_ground: SpeedOverGround,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub course_over_ground: CourseOverGround,
    pub timestamp: timestamp::Timestamp,
    pub dte_ready: bool,
    pub assigned_mode: bool,
    pub raim: bool,
    pub comm_state_is_itdma: bool,
    pub comm_state_raw: u32,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<SarAircraftPosition, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let altitude = decode_altitude(buf.u(38, 12)?);
    let speed_over_ground = decode_sog(buf.u(50, 10)?);
    let position_accuracy = buf.bool(60)?;
    let (longitude, latitude) = coordinates::standard(buf.i(61, 28)?, buf.i(89, 27)?);
    let course_over_ground = position_report::decode_cog(buf.u(116, 12)?);
    let ts = timestamp::decode(buf.u(128, 6)? as u8);
    // DTE flag is inverted on the wire: 0 = data terminal ready.
    let dte_ready = !buf.bool(142)?;
    let assigned_mode = buf.bool(146)?;
    let raim = buf.bool(147)?;
    let comm_state_is_itdma = buf.bool(148)?;
    let comm_state_raw = buf.u(149, 19)?;

    Ok(SarAircraftPosition {
        header,
        altitude,
        speed_over_ground,
        position_accuracy,
        longitude,
        latitude,
        course_over_ground,
        timestamp: ts,
        dte_ready,
        assigned_mode,
        raim,
        comm_state_is_itdma,
        comm_state_raw,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_altitude_sentinels() {
        assert_eq!(decode_altitude(4095), Altitude::Unavailable);
        assert_eq!(decode_altitude(4094), Altitude::AtOrAboveMax);
        assert_eq!(decode_altitude(1000), Altitude::Meters(1000));
    }

    #[test]
    fn test_sog_is_integer_knots_not_tenths() {
        assert_eq!(decode_sog(1023), SpeedOverGround::Unavailable);
        assert_eq!(decode_sog(1022), SpeedOverGround::AtOrAboveMax);
        assert_eq!(decode_sog(100), SpeedOverGround::Knots(100));
    }
}
