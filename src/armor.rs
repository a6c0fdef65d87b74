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

//! Converts the ASCII-armored payload of an NMEA sentence into the bit
//! buffer the message decoders read from.

use crate::bitbuffer::{BitBuffer, Bits};
use crate::error::ParseError;

/// Converts `payload` (each character in ASCII `[48, 119]`) into a
/// [`BitBuffer`], dropping the trailing `fill` bits. In strict mode a
/// character outside the valid range fails decoding; in lenient mode it
/// is replaced with six zero bits and a warning is logged.
pub fn decode(payload: &str, fill: u8, strict: bool) -> Result<BitBuffer, ParseError> {
    let mut bits: Bits = Bits::with_capacity(payload.len() * 6);
    for (position, c) in payload.chars().enumerate() {
        let code = c as u32;
        let value = if (48..=119).contains(&code) {
            ((code - 48) & 0x3F) as u8
        } else if strict {
            return Err(ParseError::BadArmor { character: c, position });
        } else {
            warn!("invalid armor character {:?} at position {}, substituting zero bits", c, position);
            0
        };
        for shift in (0..6).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }
    let total_len = bits.len();
    let fill = fill as usize;
    if fill > 0 && fill <= total_len {
        bits.truncate(total_len - fill);
    }
    Ok(BitBuffer::from_bits(bits))
}
