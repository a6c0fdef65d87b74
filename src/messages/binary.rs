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

//! Types 6, 8, 25, 26: binary messages. The DAC/FI pair selects how
//! `data` should be interpreted; this crate decodes the envelope around
//! the application payload and hands the payload back as raw bytes,
//! since the full catalogue of DAC/FI application formats is out of
//! scope (`spec.md` non-goal: non-standardized binary payloads beyond
//! what's explicitly enumerated).

use crate::error::ParseError;
use crate::bitbuffer::BitBuffer;
use crate::messages::CommonHeader;
use crate::sixbit;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

fn require(buf: &BitBuffer, header: &CommonHeader, bits: usize) -> Result<(), ParseError> {
    if buf.len() < bits {
        Err(ParseError::InsufficientLength { msg_type: header.msg_type, len: buf.len(), required: bits })
    } else {
        Ok(())
    }
}

/// IMO Circ.289 international function messages carried under DAC 1,
/// the only designated area code whose function identifiers this crate
/// decodes structurally (`spec.md` non-goal: everything else stays an
/// opaque `binary_data` bit string).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Dac1Application {
    /// FI 0: international text using 6-bit ASCII.
    TextTelegram { ack_required: bool, sequence: u16, text: String },
    /// FI 2: interrogation for a specific function message.
    FunctionRequest { requested_dac: u16, requested_fi: u8 },
    /// FI 3: capability interrogation.
    CapabilityInterrogation { requested_dac: u16 },
    /// FI 4: capability response, one (available, compliant) pair per
    /// function identifier 0-63.
    CapabilityResponse { dac: u16, table: Vec<(bool, bool)> },
    /// FI 5: application acknowledgement.
    ApplicationAck { dac: u16, fi: u8 },
}

/// Decodes the DAC=1 application payload occupying `[offset, end)`, when
/// `fi` names one of the structurally-decoded function identifiers.
/// Returns `None` for any other FI, leaving the caller to fall back to
/// the raw `data`/`data_bits` fields. `end` excludes any fixed trailer
/// (type 26's 20-bit communication state) that follows the payload.
fn decode_dac1(buf: &BitBuffer, offset: usize, end: usize, fi: u8) -> Result<Option<Dac1Application>, ParseError> {
    match fi {
        0 => {
            if end < offset + 12 {
                return Ok(None);
            }
            let ack_required = buf.bool(offset)?;
            let sequence = buf.u(offset + 1, 11)? as u16;
            let text_start = offset + 12;
            let n_chars = (end - text_start) / 6;
            let text = sixbit::decode(buf, text_start, n_chars)?.trimmed;
            Ok(Some(Dac1Application::TextTelegram { ack_required, sequence, text }))
        }
        2 => {
            if end < offset + 18 {
                return Ok(None);
            }
            let requested_dac = buf.u(offset + 2, 10)? as u16;
            let requested_fi = buf.u(offset + 12, 6)? as u8;
            Ok(Some(Dac1Application::FunctionRequest { requested_dac, requested_fi }))
        }
        3 => {
            if end < offset + 12 {
                return Ok(None);
            }
            let requested_dac = buf.u(offset + 2, 10)? as u16;
            Ok(Some(Dac1Application::CapabilityInterrogation { requested_dac }))
        }
        4 => {
            if end < offset + 12 {
                return Ok(None);
            }
            let dac = buf.u(offset + 2, 10)? as u16;
            let table_start = offset + 12;
            let entries = ((end - table_start) / 2).min(64);
            let mut table = Vec::with_capacity(entries);
            for i in 0..entries {
                let available = buf.bool(table_start + i * 2)?;
                let compliant = buf.bool(table_start + i * 2 + 1)?;
                table.push((available, compliant));
            }
            Ok(Some(Dac1Application::CapabilityResponse { dac, table }))
        }
        5 => {
            if end < offset + 18 {
                return Ok(None);
            }
            let dac = buf.u(offset + 2, 10)? as u16;
            let fi = buf.u(offset + 12, 6)? as u8;
            Ok(Some(Dac1Application::ApplicationAck { dac, fi }))
        }
        _ => Ok(None),
    }
}

/// Type 6: binary addressed message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryAddressedMessage {
    pub header: CommonHeader,
    pub sequence_number: u8,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    pub dac: u16,
    pub fi: u8,
    pub dac1_application: Option<Dac1Application>,
    pub data: Vec<u8>,
    pub data_bits: usize,
}

pub fn decode_addressed(buf: &BitBuffer, header: CommonHeader) -> Result<BinaryAddressedMessage, ParseError> {
    require(buf, &header, 88)?;
    let sequence_number = buf.u(38, 2)? as u8;
    let dest_mmsi = buf.u(40, 30)?;
    let retransmit = buf.bool(70)?;
    let dac = buf.u(72, 10)? as u16;
    let fi = buf.u(82, 6)? as u8;
    let dac1_application = if dac == 1 { decode_dac1(buf, 88, buf.len(), fi)? } else { None };
    let data_bits = buf.len().saturating_sub(88);
    let data = buf.tail_bytes(88);
    Ok(BinaryAddressedMessage { header, sequence_number, dest_mmsi, retransmit, dac, fi, dac1_application, data, data_bits })
}

/// Type 8: binary broadcast message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryBroadcastMessage {
    pub header: CommonHeader,
    pub dac: u16,
    pub fi: u8,
    pub dac1_application: Option<Dac1Application>,
    pub data: Vec<u8>,
    pub data_bits: usize,
}

pub fn decode_broadcast(buf: &BitBuffer, header: CommonHeader) -> Result<BinaryBroadcastMessage, ParseError> {
    require(buf, &header, 56)?;
    let dac = buf.u(40, 10)? as u16;
    let fi = buf.u(50, 6)? as u8;
    let dac1_application = if dac == 1 { decode_dac1(buf, 56, buf.len(), fi)? } else { None };
    let data_bits = buf.len().saturating_sub(56);
    let data = buf.tail_bytes(56);
    Ok(BinaryBroadcastMessage { header, dac, fi, dac1_application, data, data_bits })
}

/// Type 25: single slot binary message. Addressing and DAC/FI framing
/// are both optional, flagged by the two bits right after the header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryMessageSingleSlot {
    pub header: CommonHeader,
    pub addressed: bool,
    pub structured: bool,
    pub dest_mmsi: Option<u32>,
    pub dac: Option<u16>,
    pub fi: Option<u8>,
    pub dac1_application: Option<Dac1Application>,
    pub data: Vec<u8>,
    pub data_bits: usize,
}

pub fn decode_single_slot(buf: &BitBuffer, header: CommonHeader) -> Result<BinaryMessageSingleSlot, ParseError> {
    require(buf, &header, 40)?;
    let addressed = buf.bool(38)?;
    let structured = buf.bool(39)?;
    let mut offset = 40;

    let dest_mmsi = if addressed {
        require(buf, &header, offset + 30)?;
        let v = buf.u(offset, 30)?;
        offset += 30;
        Some(v)
    } else {
        None
    };

    let (dac, fi) = if structured {
        require(buf, &header, offset + 16)?;
        let dac = buf.u(offset, 10)? as u16;
        let fi = buf.u(offset + 10, 6)? as u8;
        offset += 16;
        (Some(dac), Some(fi))
    } else {
        (None, None)
    };

    let dac1_application = match (dac, fi) {
        (Some(1), Some(fi)) => decode_dac1(buf, offset, buf.len(), fi)?,
        _ => None,
    };

    let data_bits = buf.len().saturating_sub(offset);
    let data = buf.tail_bytes(offset);
    Ok(BinaryMessageSingleSlot { header, addressed, structured, dest_mmsi, dac, fi, dac1_application, data, data_bits })
}

/// Type 26: multiple slot binary message, identical to type 25 but with
/// a trailing 20-bit communication state (1-bit SOTDMA/ITDMA selector
/// plus the usual 19-bit state) appended after the data payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryMessageMultipleSlot {
    pub header: CommonHeader,
    pub addressed: bool,
    pub structured: bool,
    pub dest_mmsi: Option<u32>,
    pub dac: Option<u16>,
    pub fi: Option<u8>,
    pub dac1_application: Option<Dac1Application>,
    pub data: Vec<u8>,
    pub data_bits: usize,
    /// `true` selects ITDMA interpretation of `comm_state_raw`, `false` SOTDMA.
    pub comm_state_is_itdma: bool,
    pub comm_state_raw: u32,
}

pub fn decode_multi_slot(buf: &BitBuffer, header: CommonHeader) -> Result<BinaryMessageMultipleSlot, ParseError> {
    require(buf, &header, 40)?;
    let addressed = buf.bool(38)?;
    let structured = buf.bool(39)?;
    let mut offset = 40;

    let dest_mmsi = if addressed {
        require(buf, &header, offset + 30)?;
        let v = buf.u(offset, 30)?;
        offset += 30;
        Some(v)
    } else {
        None
    };

    let (dac, fi) = if structured {
        require(buf, &header, offset + 16)?;
        let dac = buf.u(offset, 10)? as u16;
        let fi = buf.u(offset + 10, 6)? as u8;
        offset += 16;
        (Some(dac), Some(fi))
    } else {
        (None, None)
    };

    require(buf, &header, 20)?;
    let comm_start = buf.len() - 20;

    let dac1_application = match (dac, fi) {
        (Some(1), Some(fi)) => decode_dac1(buf, offset, comm_start, fi)?,
        _ => None,
    };

    // The data payload is whatever sits between the envelope fields and
    // the fixed-width trailing communication state, never negative
    // because `comm_start >= offset` for any legal type 26 sentence.
    let data_bits = comm_start.saturating_sub(offset);
    let data = if comm_start > offset {
        let bits: Vec<u8> = {
            let slice = buf.slice(offset, comm_start - offset)?;
            let mut out = Vec::with_capacity((slice.len() + 7) / 8);
            for chunk in slice.chunks(8) {
                let mut byte = 0u8;
                for (i, bit) in chunk.iter().enumerate() {
                    if *bit {
                        byte |= 1 << (7 - i);
                    }
                }
                out.push(byte);
            }
            out
        };
        bits
    } else {
        Vec::new()
    };
    let comm_state_is_itdma = buf.bool(comm_start)?;
    let comm_state_raw = buf.u(comm_start + 1, 19)?;

    Ok(BinaryMessageMultipleSlot {
        header,
        addressed,
        structured,
        dest_mmsi,
        dac,
        fi,
        dac1_application,
        data,
        data_bits,
        comm_state_is_itdma,
        comm_state_raw,
    })
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
    fn test_decode_broadcast_minimal() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 8, 6); // type
        push_bits(&mut bits, 0, 2); // repeat
        push_bits(&mut bits, 123456789, 30); // mmsi
        push_bits(&mut bits, 0, 2); // spare
        push_bits(&mut bits, 1, 10); // dac
        push_bits(&mut bits, 31, 6); // fi
        push_bits(&mut bits, 0xAB, 8); // one byte of data
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode_broadcast(&buf, header).unwrap();
        assert_eq!(msg.dac, 1);
        assert_eq!(msg.fi, 31);
        assert_eq!(msg.data, alloc::vec![0xAB]);
    }

    #[test]
    fn test_decode_single_slot_unaddressed_unstructured() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 25, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 1); // addressed = false
        push_bits(&mut bits, 0, 1); // structured = false
        push_bits(&mut bits, 0xFF, 8);
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode_single_slot(&buf, header).unwrap();
        assert!(!msg.addressed);
        assert!(!msg.structured);
        assert_eq!(msg.dest_mmsi, None);
        assert_eq!(msg.data, alloc::vec![0xFF]);
    }

    #[test]
    fn test_decode_multi_slot_trailing_comm_state() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 26, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 1, 30);
        push_bits(&mut bits, 0, 1); // addressed
        push_bits(&mut bits, 0, 1); // structured
        push_bits(&mut bits, 0xCD, 8); // data
        push_bits(&mut bits, 1, 1); // ITDMA selector
        push_bits(&mut bits, 42, 19); // comm state
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode_multi_slot(&buf, header).unwrap();
        assert_eq!(msg.data, alloc::vec![0xCD]);
        assert!(msg.comm_state_is_itdma);
        assert_eq!(msg.comm_state_raw, 42);
    }

    #[test]
    fn test_decode_dac1_fi0_text_telegram() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 8, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 123456789, 30);
        push_bits(&mut bits, 0, 2); // spare
        push_bits(&mut bits, 1, 10); // dac = 1
        push_bits(&mut bits, 0, 6); // fi = 0
        push_bits(&mut bits, 1, 1); // ack required
        push_bits(&mut bits, 7, 11); // sequence
        push_bits(&mut bits, 1, 6); // 'A'
        push_bits(&mut bits, 2, 6); // 'B'
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode_broadcast(&buf, header).unwrap();
        match msg.dac1_application {
            Some(Dac1Application::TextTelegram { ack_required, sequence, text }) => {
                assert!(ack_required);
                assert_eq!(sequence, 7);
                assert_eq!(text, "AB");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_dac1_fi3_capability_interrogation() {
        let mut bits = Bits::new();
        push_bits(&mut bits, 6, 6);
        push_bits(&mut bits, 0, 2);
        push_bits(&mut bits, 123456789, 30);
        push_bits(&mut bits, 0, 2); // sequence
        push_bits(&mut bits, 987654321, 30); // dest mmsi
        push_bits(&mut bits, 0, 1); // retransmit
        push_bits(&mut bits, 0, 1); // reserved
        push_bits(&mut bits, 1, 10); // dac = 1
        push_bits(&mut bits, 3, 6); // fi = 3
        push_bits(&mut bits, 0, 2); // spare
        push_bits(&mut bits, 200, 10); // requested dac
        let buf = BitBuffer::from_bits(bits);
        let header = crate::messages::read_header(&buf).unwrap();
        let msg = decode_addressed(&buf, header).unwrap();
        assert_eq!(msg.dac1_application, Some(Dac1Application::CapabilityInterrogation { requested_dac: 200 }));
    }
}
