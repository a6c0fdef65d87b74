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

//! SOTDMA/ITDMA communication state, a 19-bit field attached to class A
//! position reports (types 1-3) and the base station report (type 4).
//! A single "communication state selector" bit elsewhere in the message
//! tells the caller which of [`decode_sotdma`] or [`decode_itdma`] to
//! use against the same 19 raw bits.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncState {
    Utc,
    UtcDirect,
    BaseStation,
    PeerStation,
}

pub fn sync_state(raw: u32) -> SyncState {
    match raw & 0b11 {
        0 => SyncState::Utc,
        1 => SyncState::UtcDirect,
        2 => SyncState::BaseStation,
        _ => SyncState::PeerStation,
    }
}

/// Decoded SOTDMA sub-message, keyed by the 3-bit slot timeout value
/// (ITU-R M.1371-5 Table 20).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubMessage {
    /// Timeout 0: slot offset to next frame's slot.
    SlotOffset(u16),
    /// Timeout 1: UTC hour and minute of the next slot change.
    UtcHourAndMinute { hour: u8, minute: u8 },
    /// Timeout 2 or 4: number of slots until the next slot change.
    SlotNumber(u16),
    /// Timeout 3: received stations count, 0-16383.
    ReceivedStations(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sotdma {
    pub sync_state: SyncState,
    pub slot_timeout: u8,
    pub sub_message: SubMessage,
}

/// `raw` is the full 19-bit communication state; bits 17-18 are sync
/// state, bits 14-16 are slot timeout, bits 0-13 are the sub-message.
pub fn decode_sotdma(raw: u32) -> Sotdma {
    let sync = sync_state(raw >> 17);
    let slot_timeout = ((raw >> 14) & 0b111) as u8;
    let sub_raw = (raw & 0x3FFF) as u16;
    let sub_message = match slot_timeout {
        0 => SubMessage::SlotOffset(sub_raw),
        1 => SubMessage::UtcHourAndMinute { hour: ((sub_raw >> 9) & 0x1F) as u8, minute: ((sub_raw >> 2) & 0x7F) as u8 },
        2 | 4 | 6 => SubMessage::SlotNumber(sub_raw),
        _ => SubMessage::ReceivedStations(sub_raw),
    };
    Sotdma { sync_state: sync, slot_timeout, sub_message }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itdma {
    pub sync_state: SyncState,
    /// Slots to wait before this station's next transmission. Codes 5-7
    /// of the raw "number of slots" field add 8192 to this value (ITU-R
    /// M.1371-5 Table 21), already folded in here.
    pub slot_increment: u32,
    /// Number of slots the station keeps this transmission's slot for,
    /// 1-8; all eight raw codes 0-7 map to a concrete count.
    pub num_slots: Option<u8>,
    pub keep_flag: bool,
}

/// `raw` layout: bits 17-18 sync state, bits 4-16 slot increment (13
/// bits), bits 1-3 number of slots, bit 0 keep flag.
pub fn decode_itdma(raw: u32) -> Itdma {
    let sync = sync_state(raw >> 17);
    let mut slot_increment = (raw >> 4) & 0x1FFF;
    let num_slots_raw = ((raw >> 1) & 0b111) as u8;
    let num_slots = if num_slots_raw <= 4 {
        Some(num_slots_raw + 1)
    } else {
        slot_increment += 8192;
        Some((num_slots_raw - 4) + 1)
    };
    let keep_flag = raw & 1 == 1;
    Itdma { sync_state: sync, slot_increment, num_slots, keep_flag }
}
