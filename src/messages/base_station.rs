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

//! Type 4: base station report. Type 11: UTC/date response, sent by a
//! mobile station answering a type 10 inquiry. Both share this layout.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::fields::{commstate, coordinates, Field};
use crate::messages::CommonHeader;
use crate::types::{self, EpfdType};
use serde::{Deserialize, Serialize};

const REQUIRED_BITS: usize = 168;

/// A UTC date and time as broadcast, kept as its six raw sub-fields
/// rather than collapsed into a `chrono::DateTime` immediately: any
/// sub-field can independently read "not available", and a collapsed
/// timestamp would have nowhere to keep that distinction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastUtc {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

impl BroadcastUtc {
    /// A `chrono` UTC datetime, only when every sub-field was available.
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::TimeZone;
        let y = self.year? as i32;
        let naive = chrono::NaiveDate::from_ymd_opt(y, self.month? as u32, self.day? as u32)?
            .and_hms_opt(self.hour? as u32, self.minute? as u32, self.second? as u32)?;
        match chrono::Utc.from_local_datetime(&naive) {
            chrono::LocalResult::Single(dt) => Some(dt),
            _ => None,
        }
    }
}

fn decode_utc(buf: &BitBuffer) -> Result<BroadcastUtc, ParseError> {
    let year = buf.u(38, 14)?;
    let month = buf.u(52, 4)?;
    let day = buf.u(56, 5)?;
    let hour = buf.u(61, 5)?;
    let minute = buf.u(66, 6)?;
    let second = buf.u(72, 6)?;
    Ok(BroadcastUtc {
        year: if year == 0 { None } else { Some(year as u16) },
        month: if month == 0 { None } else { Some(month as u8) },
        day: if day == 0 { None } else { Some(day as u8) },
        hour: if hour == 24 { None } else { Some(hour as u8) },
        minute: if minute == 60 { None } else { Some(minute as u8) },
        second: if second == 60 { None } else { Some(second as u8) },
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseStationReport {
    pub header: CommonHeader,
    pub utc: BroadcastUtc,
    pub position_accuracy: bool,
    pub longitude: Field<f64>,
    pub latitude: Field<f64>,
    pub epfd_type: EpfdType,
    pub raim: bool,
    pub comm_state_raw: u32,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<BaseStationReport, ParseError> {
    if buf.len() < REQUIRED_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: REQUIRED_BITS });
    }
    let utc = decode_utc(buf)?;
    let position_accuracy = buf.bool(78)?;
    let (longitude, latitude) = coordinates::standard(buf.i(79, 28)?, buf.i(107, 27)?);
    let epfd_type = types::epfd_type(buf.u(134, 4)? as u8);
    let raim = buf.bool(148)?;
    let comm_state_raw = buf.u(149, 19)?;

    Ok(BaseStationReport { header, utc, position_accuracy, longitude, latitude, epfd_type, raim, comm_state_raw })
}

/// Base stations always broadcast SOTDMA, never ITDMA.
pub fn sotdma(msg: &BaseStationReport) -> commstate::Sotdma {
    commstate::decode_sotdma(msg.comm_state_raw)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_sentinels_yield_no_datetime() {
        let utc = BroadcastUtc { year: None, month: Some(1), day: Some(1), hour: Some(0), minute: Some(0), second: Some(0) };
        assert_eq!(utc.to_datetime(), None);
    }

    #[test]
    fn test_full_utc_yields_datetime() {
        let utc = BroadcastUtc {
            year: Some(2021),
            month: Some(6),
            day: Some(15),
            hour: Some(12),
            minute: Some(30),
            second: Some(0),
        };
        let dt = utc.to_datetime().unwrap();
        assert_eq!(dt.to_string(), "2021-06-15 12:30:00 UTC");
    }
}
