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

//! Type 16: assignment mode command. A base station tells one or two
//! other stations when to transmit, either by absolute slot offset or
//! by a reporting increment.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use serde::{Deserialize, Serialize};

const MIN_BITS: usize = 92;
const TWO_ASSIGNMENT_BITS: usize = 144;

/// Maps the raw increment codes 1-6 to the canonical SOTDMA slot
/// increments they stand for; any other non-zero code is already a
/// literal slot count and passes through unchanged.
fn canonical_slot_increment(raw: u16) -> u16 {
    match raw {
        1 => 1125,
        2 => 375,
        3 => 225,
        4 => 125,
        5 => 75,
        6 => 45,
        other => other,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub dest_mmsi: u32,
    /// Raw 12-bit offset field. When `increment_raw` is non-zero this
    /// is an absolute slot offset; when `increment_raw` is 0 this holds
    /// a reports-per-10-minutes count instead (see
    /// [`Assignment::reporting_interval_seconds`]).
    pub offset: u16,
    /// Raw 10-bit increment field as it came off the wire.
    pub increment_raw: u16,
}

impl Assignment {
    /// `None` when `increment_raw` is 0 (the station should derive its
    /// own reporting rate from `offset` instead); otherwise the slot
    /// increment this assignment asks for, with the codes 1-6 resolved
    /// to their canonical values.
    pub fn slot_increment(&self) -> Option<u16> {
        if self.increment_raw == 0 {
            None
        } else {
            Some(canonical_slot_increment(self.increment_raw))
        }
    }

    /// When `increment_raw` is 0, `offset` is reinterpreted as a
    /// reports-per-10-minutes count: values under 600 that aren't
    /// already a multiple of 20 round up to the next multiple of 20,
    /// then the reporting interval is `600 / adjusted` seconds.
    pub fn reporting_interval_seconds(&self) -> Option<u16> {
        if self.increment_raw != 0 || self.offset == 0 {
            return None;
        }
        let adjusted = if self.offset >= 600 || self.offset % 20 == 0 {
            self.offset
        } else {
            (self.offset / 20 + 1) * 20
        };
        Some((600 / adjusted as u32) as u16)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentModeCommand {
    pub header: CommonHeader,
    pub assignment_a: Assignment,
    pub assignment_b: Option<Assignment>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<AssignmentModeCommand, ParseError> {
    if buf.len() < MIN_BITS {
        return Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: MIN_BITS });
    }
    let assignment_a = Assignment {
        dest_mmsi: buf.u(40, 30)?,
        offset: buf.u(70, 12)? as u16,
        increment_raw: buf.u(82, 10)? as u16,
    };

    let assignment_b = if buf.len() >= TWO_ASSIGNMENT_BITS {
        Some(Assignment {
            dest_mmsi: buf.u(92, 30)?,
            offset: buf.u(122, 12)? as u16,
            increment_raw: buf.u(134, 10)? as u16,
        })
    } else {
        None
    };

    Ok(AssignmentModeCommand { header, assignment_a, assignment_b })
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
    fn test_decode_single_assignment() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 16, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 42, 30);
        push_bits(&mut bits, 100, 12);
        push_bits(&mut bits, 5, 10);
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.assignment_a, Assignment { dest_mmsi: 42, offset: 100, increment_raw: 5 });
        assert_eq!(msg.assignment_a.slot_increment(), Some(75));
        assert_eq!(msg.assignment_b, None);
    }

    #[test]
    fn test_revoked_assignment_has_no_slot_increment() {
        let a = Assignment { dest_mmsi: 1, offset: 0, increment_raw: 0 };
        assert_eq!(a.slot_increment(), None);
        assert_eq!(a.reporting_interval_seconds(), None);
    }

    #[test]
    fn test_increment_zero_reinterprets_offset_as_report_rate() {
        // offset 10 is not a multiple of 20 -> rounds up to 20 -> 600/20 = 30s
        let a = Assignment { dest_mmsi: 1, offset: 10, increment_raw: 0 };
        assert_eq!(a.reporting_interval_seconds(), Some(30));

        // offset already a multiple of 20: no rounding
        let b = Assignment { dest_mmsi: 1, offset: 60, increment_raw: 0 };
        assert_eq!(b.reporting_interval_seconds(), Some(10));
    }

    #[test]
    fn test_increment_codes_one_to_six_map_to_canonical_values() {
        let expected = [(1, 1125), (2, 375), (3, 225), (4, 125), (5, 75), (6, 45)];
        for (code, canonical) in expected {
            let a = Assignment { dest_mmsi: 1, offset: 0, increment_raw: code };
            assert_eq!(a.slot_increment(), Some(canonical));
        }
    }

    #[test]
    fn test_two_assignments() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 16, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 42, 30);
        push_bits(&mut bits, 100, 12);
        push_bits(&mut bits, 5, 10);
        push_bits(&mut bits, 99, 30);
        push_bits(&mut bits, 200, 12);
        push_bits(&mut bits, 3, 10);
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        let b = msg.assignment_b.expect("second assignment present");
        assert_eq!(b.dest_mmsi, 99);
        assert_eq!(b.offset, 200);
        assert_eq!(b.slot_increment(), Some(225));
    }
}
