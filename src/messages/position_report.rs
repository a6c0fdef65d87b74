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

//! Types 1, 2, 3: class A scheduled, assigned, and special (responding
//! to interrogation) position reports. All three share one 168-bit wire
//! layout; only the semantics of the communication state at the tail
//! differ (1 and 2 always report SOTDMA, 3 may report either SOTDMA or
//! ITDMA depending on how the station was scheduled).
//!
//! Bit layout:
//! - 0-5 message type, 6-7 repeat indicator, 8-37 MMSI (common header)
//! - 38-41 navigation status (4)
//! - 42-49 rate of turn (8, signed)
//! - 50-59 speed over ground (10)
//! - 60 position accuracy (1)
//! - 61-88 longitude (28, signed)
//! - 89-115 latitude (27, signed)
//! - 116-127 course over ground (12)
//! - 128-136 true heading (9)
//! - 137-142 time stamp (6)
//! - 143-144 special maneuver indicator (2)
//! - 145-147 spare (3)
//! - 148 RAIM flag (1)
//! - 149-167 communication state (19)

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::{commstate, coordinates, rot, timestamp, Field};
use crate::messages::CommonHeader;
use crate::types::{self, NavigationStatus, ManeuverIndicator};
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 168;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpeedOverGround {
    Knots(f64),
    Unavailable,
    /// Raw value 1022: 102.2 knots or faster.
    AtOrAboveMax,
}

pub(crate) fn decode_sog(raw: u32) -> SpeedOverGround {
    match raw {
        1023 => SpeedOverGround::Unavailable,
        1022 => SpeedOverGround::AtOrAboveMax,
        v => SpeedOverGround::Knots(v as f64 / 10.0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CourseOverGround {
    Degrees(f64),
    Unavailable,
    /// Raw value 3601-4095: not a valid ITU sentinel, not a valid course.
    OutOfRange(u32),
}

pub(crate) fn decode_cog(raw: u32) -> CourseOverGround {
    if raw == 3600 {
        CourseOverGround::Unavailable
    } else if raw > 3600 {
        CourseOverGround::OutOfRange(raw)
    } else {
        CourseOverGround::Degrees(raw as f64 / 10.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrueHeading {
    Degrees(u16),
    Unavailable,
    /// Raw value 360-510: not the n/a sentinel (511), not a valid heading.
    OutOfRange(u16),
}

pub(crate) fn decode_heading(raw: u32) -> TrueHeading {
    if raw == 511 {
        TrueHeading::Unavailable
    } else if raw > 359 {
        TrueHeading::OutOfRange(raw as u16)
    } else {
        TrueHeading::Degrees(raw as u16)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionReportClassA {
    pub header: CommonHeader,
    pub nav_status: NavigationStatus,
    pub rate_of_turn: rot::RateOfTurn,
    pub speed_over_ground: SpeedOverGround,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub course_over_ground: CourseOverGround,
    pub true_heading: TrueHeading,
    pub timestamp: timestamp::Timestamp,
    pub maneuver_indicator: ManeuverIndicator,
    pub raim: bool,
    /// Raw 19-bit communication state, undecoded so callers can apply
    /// SOTDMA or ITDMA interpretation as appropriate for their context.
    pub comm_state_raw: u32,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<PositionReportClassA, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let nav_status = types::navigation_status(buf.u(38, 4)? as u8);
    let rate_of_turn = rot::decode(buf.i(42, 8)?);
    let speed_over_ground = decode_sog(buf.u(50, 10)?);
    let position_accuracy = buf.bool(60)?;
    let (longitude, latitude) = coordinates::standard(buf.i(61, 28)?, buf.i(89, 27)?);
    let course_over_ground = decode_cog(buf.u(116, 12)?);
    let true_heading = decode_heading(buf.u(128, 9)?);
    let ts = timestamp::decode(buf.u(137, 6)? as u8);
    let maneuver_indicator = types::maneuver_indicator(buf.u(143, 2)? as u8);
    let raim = buf.bool(148)?;
    let comm_state_raw = buf.u(149, 19)?;

    Ok(PositionReportClassA {
        header,
        nav_status,
        rate_of_turn,
        speed_over_ground,
        position_accuracy,
        longitude,
        latitude,
        course_over_ground,
        true_heading,
        timestamp: ts,
        maneuver_indicator,
        raim,
        comm_state_raw,
    })
}

/// Decodes `comm_state_raw` as SOTDMA, the interpretation used by types
/// 1 and 2 and by most type 3 reports.
pub fn sotdma(msg: &PositionReportClassA) -> commstate::Sotdma {
    commstate::decode_sotdma(msg.comm_state_raw)
}

/// Decodes `comm_state_raw` as ITDMA, used by type 3 reports responding
/// to an interrogation rather than transmitting on an autonomous schedule.
pub fn itdma(msg: &PositionReportClassA) -> commstate::Itdma {
    commstate::decode_itdma(msg.comm_state_raw)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::armor;
    use crate::messages::read_header;

    #[test]
    fn test_decode_known_sentence() {
        let buf = armor::decode("13HOI:0P0000VOHLCnHQKwvL05Ip", 0, true).unwrap();
        let header = read_header(&buf).unwrap();
        assert_eq!(header.msg_type, 1);
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.header.mmsi, header.mmsi);
    }

    #[test]
    fn test_sog_sentinels() {
        assert_eq!(decode_sog(1023), SpeedOverGround::Unavailable);
        assert_eq!(decode_sog(1022), SpeedOverGround::AtOrAboveMax);
        assert_eq!(decode_sog(100), SpeedOverGround::Knots(10.0));
    }

    #[test]
    fn test_cog_sentinel() {
        assert_eq!(decode_cog(3600), CourseOverGround::Unavailable);
        assert_eq!(decode_cog(900), CourseOverGround::Degrees(90.0));
        assert_eq!(decode_cog(3601), CourseOverGround::OutOfRange(3601));
        assert_eq!(decode_cog(4095), CourseOverGround::OutOfRange(4095));
    }

    #[test]
    fn test_heading_sentinel() {
        assert_eq!(decode_heading(511), TrueHeading::Unavailable);
        assert_eq!(decode_heading(180), TrueHeading::Degrees(180));
        assert_eq!(decode_heading(360), TrueHeading::OutOfRange(360));
        assert_eq!(decode_heading(510), TrueHeading::OutOfRange(510));
    }

    #[test]
    fn test_insufficient_length_rejected() {
        let buf = armor::decode("13HOI:0", 0, true).unwrap();
        let header = read_header(&buf).unwrap();
        let err = decode(&buf, header).unwrap_err();
        assert!(matches!(err, ParseError::InsufficientLength { .. }));
    }
}
