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

//! Ship dimensions and GNSS reference point, a 30-bit field split into
//! four sub-fields (A: to bow, B: to stern, C: to port, D: to starboard)
//! used by message types 5, 19, 21 and the type 24 static data report.

use serde::{Deserialize, Serialize};

/// All four sub-fields packed into one read: bits 0-8 = A, 9-17 = B,
/// 18-23 = C, 24-29 = D, matching the wire layout exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Distance from the reporting position to the bow, in meters.
    pub to_bow: Option<u32>,
    /// Distance from the reporting position to the stern, in meters.
    pub to_stern: Option<u32>,
    /// Distance from the reporting position to the port side, in meters.
    pub to_port: Option<u32>,
    /// Distance from the reporting position to the starboard side, in meters.
    pub to_starboard: Option<u32>,
}

impl Dimensions {
    /// `true` when every sub-field is zero, meaning the reference point
    /// and overall dimensions were never set by the station.
    pub fn is_unavailable(&self) -> bool {
        self.to_bow.is_none() && self.to_stern.is_none() && self.to_port.is_none() && self.to_starboard.is_none()
    }

    /// Overall reported length, when both bow and stern distances are known.
    pub fn length(&self) -> Option<u32> {
        Some(self.to_bow? + self.to_stern?)
    }

    /// Overall reported beam, when both port and starboard distances are known.
    pub fn beam(&self) -> Option<u32> {
        Some(self.to_port? + self.to_starboard?)
    }
}

/// ITU reserves the maximum raw value of each sub-field's range (511 for
/// the 9-bit A/B fields, 63 for the 6-bit C/D fields) to mean "63 m or
/// greater" / "511 m or greater" rather than unavailable; this decoder
/// keeps that raw ceiling value as-is since a typed bound isn't needed
/// downstream, and treats only an all-zero field as absent.
pub fn decode(a: u32, b: u32, c: u32, d: u32) -> Dimensions {
    let none_if_zero = |v: u32| if v == 0 { None } else { Some(v) };
    Dimensions {
        to_bow: none_if_zero(a),
        to_stern: none_if_zero(b),
        to_port: none_if_zero(c),
        to_starboard: none_if_zero(d),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_zero_is_unavailable() {
        let d = decode(0, 0, 0, 0);
        assert!(d.is_unavailable());
        assert_eq!(d.length(), None);
    }

    #[test]
    fn test_known_dimensions() {
        let d = decode(100, 20, 5, 5);
        assert!(!d.is_unavailable());
        assert_eq!(d.length(), Some(120));
        assert_eq!(d.beam(), Some(10));
    }

    #[test]
    fn test_partial_dimensions() {
        let d = decode(100, 0, 5, 5);
        assert_eq!(d.to_stern, None);
        assert_eq!(d.length(), None);
        assert_eq!(d.beam(), Some(10));
    }
}
