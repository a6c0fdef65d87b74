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

//! Rate of turn (ROT), an 8-bit signed field whose magnitude is encoded
//! through a square-law formula rather than linearly (`spec.md` §4,
//! message types 1-3).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RateOfTurn {
    Unavailable,
    /// Raw value 0: not turning, or turn rate not indicated as a number.
    NoTurnIndicated,
    /// Raw magnitude 1-126, decoded via the ROT(AIS) formula into
    /// degrees per minute. Sign matches the turn direction (positive =
    /// starboard/right).
    DegreesPerMinute(f64),
    /// Raw value ±127: turning more than 5 degrees per 30 seconds
    /// (right for +127, left for -127), exact rate not available.
    HighRate { right: bool },
}

pub fn decode(raw: i32) -> RateOfTurn {
    match raw {
        -128 => RateOfTurn::Unavailable,
        0 => RateOfTurn::NoTurnIndicated,
        127 => RateOfTurn::HighRate { right: true },
        -127 => RateOfTurn::HighRate { right: false },
        r => {
            let sign = if r < 0 { -1.0 } else { 1.0 };
            let magnitude = (r.unsigned_abs() as f64 / 4.733).powi(2);
            RateOfTurn::DegreesPerMinute(sign * magnitude)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unavailable() {
        assert_eq!(decode(-128), RateOfTurn::Unavailable);
    }

    #[test]
    fn test_no_turn() {
        assert_eq!(decode(0), RateOfTurn::NoTurnIndicated);
    }

    #[test]
    fn test_high_rate() {
        assert_eq!(decode(127), RateOfTurn::HighRate { right: true });
        assert_eq!(decode(-127), RateOfTurn::HighRate { right: false });
    }

    #[test]
    fn test_formula() {
        match decode(126) {
            RateOfTurn::DegreesPerMinute(v) => assert!((v - 708.27).abs() < 0.5),
            other => panic!("unexpected {:?}", other),
        }
        match decode(-10) {
            RateOfTurn::DegreesPerMinute(v) => assert!(v < 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }
}
