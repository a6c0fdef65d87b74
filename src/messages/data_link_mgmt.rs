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

//! Type 20: data link management message, reserving up to four slot
//! blocks for base station use. A reservation block that reads all
//! zero and isn't the first one is the sentence's own padding, not a
//! fourth reservation, so decoding stops there.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

const FIRST_BLOCK_OFFSET: usize = 40;
const BLOCK_BITS: usize = 30;
const MAX_BLOCKS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub offset: u16,
    pub number_of_slots: u8,
    pub timeout_minutes: u8,
    pub increment: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataLinkManagement {
    pub header: CommonHeader,
    pub reservations: Vec<Reservation>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<DataLinkManagement, ParseError> {
    if buf.len() < FIRST_BLOCK_OFFSET + BLOCK_BITS {
        return Err(ParseError::InsufficientLength {
            msg_type: header.msg_type,
            len: buf.len(),
            required: FIRST_BLOCK_OFFSET + BLOCK_BITS,
        });
    }
    let mut reservations = Vec::new();
    let mut offset = FIRST_BLOCK_OFFSET;
    for i in 0..MAX_BLOCKS {
        if offset + BLOCK_BITS > buf.len() {
            break;
        }
        let raw = buf.u(offset, BLOCK_BITS)?;
        if raw == 0 && i > 0 {
            break;
        }
        reservations.push(Reservation {
            offset: buf.u(offset, 12)? as u16,
            number_of_slots: buf.u(offset + 12, 4)? as u8,
            timeout_minutes: buf.u(offset + 16, 3)? as u8,
            increment: buf.u(offset + 19, 11)? as u16,
        });
        offset += BLOCK_BITS;
    }
    Ok(DataLinkManagement { header, reservations })
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
    fn test_decode_one_reservation_then_padding() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 20, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 100, 12);
        push_bits(&mut bits, 2, 4);
        push_bits(&mut bits, 3, 3);
        push_bits(&mut bits, 50, 11);
        push_bits(&mut bits, 0, 30); // all-zero second block: padding
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.reservations.len(), 1);
        assert_eq!(msg.reservations[0].offset, 100);
        assert_eq!(msg.reservations[0].increment, 50);
    }
}
