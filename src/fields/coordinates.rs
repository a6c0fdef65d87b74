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

//! Coordinate decoding for the four resolutions used across message
//! types 1-27 (`spec.md` §4.4 table).

use crate::fields::Field;

/// Decimal-degree coordinate with an explicit validity tag. `raw` is
/// always the value that came off the wire, regardless of status.
pub type Longitude = Field<f64>;
pub type Latitude = Field<f64>;

struct CoordinateSpec {
    lon_na: i32,
    lat_na: i32,
    divisor: f64,
}

const STANDARD: CoordinateSpec = CoordinateSpec { lon_na: 108_600_000, lat_na: 54_600_000, divisor: 600_000.0 };
const LONG_RANGE: CoordinateSpec = CoordinateSpec { lon_na: 108_600, lat_na: 54_600, divisor: 600.0 };
const DGNSS: CoordinateSpec = CoordinateSpec { lon_na: 18_100, lat_na: 9_100, divisor: 600.0 };
const AREA_TENTH_MINUTE: CoordinateSpec = CoordinateSpec { lon_na: 1_810, lat_na: 910, divisor: 600.0 };

fn decode_axis(raw: i32, na: i32, divisor: f64, limit: f64) -> Field<f64> {
    if raw == na {
        return Field::Unavailable;
    }
    let degrees = raw as f64 / divisor;
    if degrees.abs() > limit {
        Field::OutOfRange(raw as i64)
    } else {
        Field::Valid(degrees)
    }
}

fn decode(spec: &CoordinateSpec, lon_raw: i32, lat_raw: i32) -> (Longitude, Latitude) {
    (
        decode_axis(lon_raw, spec.lon_na, spec.divisor, 180.0),
        decode_axis(lat_raw, spec.lat_na, spec.divisor, 90.0),
    )
}

/// 1/10000 minute resolution (28-bit lon, 27-bit lat): messages 1-5, 9,
/// 11, 18, 19, 21.
pub fn standard(lon_raw: i32, lat_raw: i32) -> (Longitude, Latitude) {
    decode(&STANDARD, lon_raw, lat_raw)
}

/// 1/10 minute resolution (18-bit lon, 17-bit lat): message 27.
pub fn long_range(lon_raw: i32, lat_raw: i32) -> (Longitude, Latitude) {
    decode(&LONG_RANGE, lon_raw, lat_raw)
}

/// 1/10 minute resolution with DGNSS-specific sentinels: message 17.
pub fn dgnss(lon_raw: i32, lat_raw: i32) -> (Longitude, Latitude) {
    decode(&DGNSS, lon_raw, lat_raw)
}

/// 1/10 minute resolution used for area rectangle corners: messages 22, 23.
pub fn area_tenth_minute(lon_raw: i32, lat_raw: i32) -> (Longitude, Latitude) {
    decode(&AREA_TENTH_MINUTE, lon_raw, lat_raw)
}
