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

//! Type 27: long range AIS broadcast message. A reduced-precision
//! report meant for satellite reception, trading resolution (1/10
//! minute coordinates, integer speed/course) for a 96-bit slot that
//! still fits a satellite pass.

use crate::bitbuffer::BitBuffer;
use crate::error::ParseError;
use crate::fields::coordinates;
use crate::fields::Field;
use crate::messages::CommonHeader;
use crate::types::{self, NavigationStatus};
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 96;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpeedOverGround {
    Knots(u16),
    Unavailable,
}

fn decode_sog(raw: u32) -> SpeedOverGround {
    if raw == 63 {
        SpeedOverGround::Unavailable
    } else {
        SpeedOverGround::Knots(raw as u16)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CourseOverGround {
    Degrees(u16),
    Unavailable,
}

fn decode_cog(raw: u32) -> CourseOverGround {
    if raw == 511 {
        CourseOverGround::Unavailable
    } else {
        CourseOverGround::Degrees(raw as u16)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongRangeBroadcast {
    pub header: CommonHeader,
    pub position_accuracy: bool,
    pub raim: bool,
    pub nav_status: NavigationStatus,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub speed_over_ground: SpeedOverGround,
    pub course_over_ground: CourseOverGround,
    /// `true` when the position report is delayed more than 5 seconds
    /// past the reported time (the "GNSS position latency" flag).
    pub position_latency: bool,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<LongRangeBroadcast, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let position_accuracy = buf.bool(38)?;
    let raim = buf.bool(39)?;
    let nav_status = types::navigation_status(buf.u(40, 4)? as u8);
    let (longitude, latitude) = coordinates::long_range(buf.i(44, 18)?, buf.i(62, 17)?);
    let speed_over_ground = decode_sog(buf.u(79, 6)?);
    let course_over_ground = decode_cog(buf.u(85, 9)?);
    let position_latency = buf.bool(94)?;

    Ok(LongRangeBroadcast {
        header,
        position_accuracy,
        raim,
        nav_status,
        longitude,
        latitude,
        speed_over_ground,
        course_over_ground,
        position_latency,
    })
}
