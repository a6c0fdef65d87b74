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

//! Type 18: standard class B equipment position report. Type 19:
//! extended class B report, which replaces the radio status tail with
//! static/voyage fields (name, dimensions, ship type) since class B
//! "CS" units send those separately and rarely.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::dimensions::{self, Dimensions};
use crate::fields::{coordinates, timestamp, Field};
use crate::messages::position_report::{self, CourseOverGround, SpeedOverGround, TrueHeading};
use crate::messages::CommonHeader;
use crate::sixbit::{self, SixBitText};
use crate::types::{self, EpfdType};
use serde::{Deserialize, Serialize};

const STANDARD_REQUIRED_BITS: usize = 168;
const EXTENDED_REQUIRED_BITS: usize = 312;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardClassBPositionReport {
    pub header: CommonHeader,
    pub speed_over_ground: SpeedOverGround,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub course_over_ground: CourseOverGround,
    pub true_heading: TrueHeading,
    pub timestamp: timestamp::Timestamp,
    /// `true` when the unit restricts itself to carrier-sense (CS)
    /// access rather than SOTDMA.
    pub cs_unit: bool,
    pub display_capable: bool,
    pub dsc_capable: bool,
    pub band_capable: bool,
    pub message22_capable: bool,
    pub assigned_mode: bool,
    pub raim: bool,
    pub comm_state_is_itdma: bool,
    pub comm_state_raw: u32,
}

pub fn decode_standard(buf: &BitBuffer, header: CommonHeader) -> Result<StandardClassBPositionReport, ParseError> {
    if buf.len() < STANDARD_REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: STANDARD_REQUIRED_BITS });
    }
    let speed_over_ground = position_report::decode_sog(buf.u(46, 10)?);
    let position_accuracy = buf.bool(56)?;
    let (longitude, latitude) = coordinates::standard(buf.i(57, 28)?, buf.i(85, 27)?);
    let course_over_ground = position_report::decode_cog(buf.u(112, 12)?);
    let true_heading = position_report::decode_heading(buf.u(124, 9)?);
    let ts = timestamp::decode(buf.u(133, 6)? as u8);
    let cs_unit = buf.bool(141)?;
    let display_capable = buf.bool(142)?;
    let dsc_capable = buf.bool(143)?;
    let band_capable = buf.bool(144)?;
    let message22_capable = buf.bool(145)?;
    let assigned_mode = buf.bool(146)?;
    let raim = buf.bool(147)?;
    let comm_state_is_itdma = buf.bool(148)?;
    let comm_state_raw = buf.u(149, 19)?;

    Ok(StandardClassBPositionReport {
        header,
        speed_over_ground,
        position_accuracy,
        longitude,
        latitude,
        course_over_ground,
        true_heading,
        timestamp: ts,
        cs_unit,
        display_capable,
        dsc_capable,
        band_capable,
        message22_capable,
        assigned_mode,
        raim,
        comm_state_is_itdma,
        comm_state_raw,
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendedClassBPositionReport {
    pub header: CommonHeader,
    pub speed_over_ground: SpeedOverGround,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub course_over_ground: CourseOverGround,
    pub true_heading: TrueHeading,
    pub timestamp: timestamp::Timestamp,
    pub vessel_name: SixBitText,
    pub ship_type: u8,
    pub dimensions: Dimensions,
    pub epfd_type: EpfdType,
    pub raim: bool,
    pub dte_ready: bool,
    pub assigned_mode: bool,
}

impl ExtendedClassBPositionReport {
    pub fn ship_type_description(&self) -> &'static str {
        types::ship_type_description(self.ship_type)
    }
}

pub fn decode_extended(buf: &BitBuffer, header: CommonHeader) -> Result<ExtendedClassBPositionReport, ParseError> {
    if buf.len() < EXTENDED_REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: EXTENDED_REQUIRED_BITS });
    }
    let speed_over_ground = position_report::decode_sog(buf.u(46, 10)?);
    let position_accuracy = buf.bool(56)?;
    let (longitude, latitude) = coordinates::standard(buf.i(57, 28)?, buf.i(85, 27)?);
    let course_over_ground = position_report::decode_cog(buf.u(112, 12)?);
    let true_heading = position_report::decode_heading(buf.u(124, 9)?);
    let ts = timestamp::decode(buf.u(133, 6)? as u8);
    let vessel_name = sixbit::decode(buf, 143, 20)?;
    let ship_type = buf.u(263, 8)? as u8;
    let dimensions = dimensions::decode(buf.u(271, 9)?, buf.u(280, 9)?, buf.u(289, 6)?, buf.u(295, 6)?);
    let epfd_type = types::epfd_type(buf.u(301, 4)? as u8);
    let raim = buf.bool(305)?;
    let dte_ready = !buf.bool(306)?;
    let assigned_mode = buf.bool(307)?;

    Ok(ExtendedClassBPositionReport {
        header,
        speed_over_ground,
        position_accuracy,
        longitude,
        latitude,
        course_over_ground,
        true_heading,
        timestamp: ts,
        vessel_name,
        ship_type,
        dimensions,
        epfd_type,
        raim,
        dte_ready,
        assigned_mode,
    })
}
