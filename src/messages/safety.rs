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

//! Types 12, 14: addressed and broadcast safety related text messages.
//! Type 12 carries a sequence number, destination MMSI and retransmit
//! flag before the text; type 14 goes straight from two spare bits into
//! the text.

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use crate::sixbit::{self, SixBitText};
use serde::{Deserialize, Serialize};

const ADDRESSED_TEXT_OFFSET: usize = 72;
const BROADCAST_TEXT_OFFSET: usize = 40;

/// One of the literal fixed texts a SART, MOB, or EPIRB device sends as
/// a safety related broadcast, recognized by exact match against the
/// trimmed text (ITU-R M.1371-5 §4.12 note).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialMessageType {
    SartActive,
    SartTest,
    MobActive,
    MobTest,
    EpirbActive,
    EpirbTest,
}

fn special_message_type(text: &str) -> Option<SpecialMessageType> {
    match text {
        "SART ACTIVE" => Some(SpecialMessageType::SartActive),
        "SART TEST" => Some(SpecialMessageType::SartTest),
        "MOB ACTIVE" => Some(SpecialMessageType::MobActive),
        "MOB TEST" => Some(SpecialMessageType::MobTest),
        "EPIRB ACTIVE" => Some(SpecialMessageType::EpirbActive),
        "EPIRB TEST" => Some(SpecialMessageType::EpirbTest),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafetyRelated {
    pub header: CommonHeader,
    pub sequence_number: Option<u8>,
    pub dest_mmsi: Option<u32>,
    pub retransmit: Option<bool>,
    pub text: SixBitText,
    pub special_message_type: Option<SpecialMessageType>,
}

pub fn decode(buf: &BitBuffer, header: CommonHeader) -> Result<SafetyRelated, ParseError> {
    if header.msg_type == 12 {
        if buf.len() < ADDRESSED_TEXT_OFFSET {
            return Err(ParseError::InsufficientLength { msg_type: 12, len: buf.len(), required: ADDRESSED_TEXT_OFFSET });
        }
        let sequence_number = buf.u(38, 2)? as u8;
        let dest_mmsi = buf.u(40, 30)?;
        let retransmit = buf.bool(70)?;
        let n_chars = (buf.len() - ADDRESSED_TEXT_OFFSET) / 6;
        let text = sixbit::decode(buf, ADDRESSED_TEXT_OFFSET, n_chars)?;
        let special_message_type = special_message_type(&text.trimmed);
        Ok(SafetyRelated {
            header,
            sequence_number: Some(sequence_number),
            dest_mmsi: Some(dest_mmsi),
            retransmit: Some(retransmit),
            text,
            special_message_type,
        })
    } else {
        if buf.len() < BROADCAST_TEXT_OFFSET {
            return Err(ParseError::InsufficientLength { msg_type: 14, len: buf.len(), required: BROADCAST_TEXT_OFFSET });
        }
        let n_chars = (buf.len() - BROADCAST_TEXT_OFFSET) / 6;
        let text = sixbit::decode(buf, BROADCAST_TEXT_OFFSET, n_chars)?;
        let special_message_type = special_message_type(&text.trimmed);
        Ok(SafetyRelated { header, sequence_number: None, dest_mmsi: None, retransmit: None, text, special_message_type })
    }
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
    fn test_decode_broadcast() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 14, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2); // spare
        push_bits(&mut bits, 1, 6); // 'A'
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.sequence_number, None);
        assert_eq!(msg.text.trimmed, "A");
    }

    #[test]
    fn test_decode_addressed() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 12, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 2, 2); // seqno
        push_bits(&mut bits, 555, 30); // dest mmsi
        push_bits(&mut bits, 1, 1); // retransmit
        push_bits(&mut bits, 0, 1); // spare
        push_bits(&mut bits, 2, 6); // 'B'
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.sequence_number, Some(2));
        assert_eq!(msg.dest_mmsi, Some(555));
        assert_eq!(msg.retransmit, Some(true));
        assert_eq!(msg.text.trimmed, "B");
    }

    fn push_text(bits: &mut Bits, text: &str) {
        for c in text.chars() {
            let code = match c {
                '@' => 0,
                'A'..='Z' => c as u32 - 64,
                ' ' => 32,
                _ => panic!("unsupported test char {}", c),
            };
            push_bits(bits, code, 6);
        }
    }

    #[test]
    fn test_sart_active_recognized() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 14, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2);
        push_text(&mut bits, "SART ACTIVE");
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.special_message_type, Some(SpecialMessageType::SartActive));
    }

    #[test]
    fn test_ordinary_text_has_no_special_type() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 14, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 2);
        push_text(&mut bits, "HELLO");
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode(&buf, header).unwrap();
        assert_eq!(msg.special_message_type, None);
    }
}
