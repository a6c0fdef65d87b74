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

//! Type 22: channel management. A base station reassigns the working
//! channels either for every station inside a rectangular area, or for
//! up to two individually addressed stations. Both variants reuse the
//! same 70 bits (two 18/17-bit pairs); the addressed variant packs each
//! destination MMSI across one such pair by dropping the low 5 bits of
//! the second field, since 18+17 = 35 bits is 5 more than a 30-bit MMSI
//! needs.
//!
//! Bit layout: 40-51/52-63 channel A/B, 64-67 tx/rx mode, 68 power,
//! 69-145 the two area/address field pairs plus addressed/band/zone
//! flags.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::coordinates;
use crate::messages::CommonHeader;
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 168;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChannelTarget {
    Area {
        ne_longitude: crate::fields::Field<f64>,
        ne_latitude: crate::fields::Field<f64>,
        sw_longitude: crate::fields::Field<f64>,
        sw_latitude: crate::fields::Field<f64>,
    },
    Addressed {
        dest_mmsi1: u32,
        dest_mmsi2: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelManagement {
    pub header: CommonHeader,
    pub channel_a: u16,
    pub channel_b: u16,
    pub tx_rx_mode: u8,
    pub power_low: bool,
    pub target: ChannelTarget,
    pub band_a: bool,
    pub band_b: bool,
    pub zone_size: u8,
}

fn reconstruct_mmsi(field1: u32, field2: u32) -> u32 {
    (field1 << 12) | (field2 >> 5)
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<ChannelManagement, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let channel_a = buf.u(40, 12)? as u16;
    let channel_b = buf.u(52, 12)? as u16;
    let tx_rx_mode = buf.u(64, 4)? as u8;
    let power_low = buf.bool(68)?;

    let field1 = buf.u(69, 18)?;
    let field2 = buf.u(87, 17)?;
    let field3 = buf.u(104, 18)?;
    let field4 = buf.u(122, 17)?;
    let addressed = buf.bool(139)?;
    let band_a = buf.bool(140)?;
    let band_b = buf.bool(141)?;
    let zone_size = buf.u(142, 3)? as u8 + 1;

    let target = if addressed {
        ChannelTarget::Addressed {
            dest_mmsi1: reconstruct_mmsi(field1, field2),
            dest_mmsi2: reconstruct_mmsi(field3, field4),
        }
    } else {
        let (ne_longitude, ne_latitude) = coordinates::area_tenth_minute(sign_extend(field1, 18), sign_extend(field2, 17));
        let (sw_longitude, sw_latitude) = coordinates::area_tenth_minute(sign_extend(field3, 18), sign_extend(field4, 17));
        ChannelTarget::Area { ne_longitude, ne_latitude, sw_longitude, sw_latitude }
    };

    Ok(ChannelManagement { header, channel_a, channel_b, tx_rx_mode, power_low, target, band_a, band_b, zone_size })
}

fn sign_extend(raw: u32, width: u32) -> i32 {
    let shift = 32 - width;
    ((raw << shift) as i32) >> shift
}
