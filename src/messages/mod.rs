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

//! One typed struct per ITU-R M.1371-5 message (1-27), plus the
//! dispatcher that reads the 6-bit type field and routes to the right
//! decoder. Types that share a wire layout (1/2/3, 4/11, 7/13, 6/8/25/26)
//! share one struct.

pub mod acknowledge;
pub mod assignment;
pub mod aton;
pub mod binary;
pub mod base_station;
pub mod channel_mgmt;
pub mod class_b;
pub mod data_link_mgmt;
pub mod dgnss;
pub mod group_assignment;
pub mod interrogation;
pub mod long_range;
pub mod position_report;
pub mod safety;
pub mod sar_aircraft;
pub mod static_data_report;
pub mod static_voyage;
pub mod utc_inquiry;

use crate::bitbuffer::BitBuffer;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Fields common to every AIS message, always at bits 0-37.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonHeader {
    pub msg_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
}

pub fn read_header(buf: &BitBuffer) -> Result<CommonHeader, ParseError> {
    if buf.len() < 38 {
        return Err(ParseError::InsufficientLength { msg_type: 0, len: buf.len(), required: 38 });
    }
    let msg_type = buf.u(0, 6)? as u8;
    let repeat = buf.u(6, 2)? as u8;
    let mmsi = buf.u(8, 30)?;
    Ok(CommonHeader { msg_type, repeat, mmsi })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DecodedMessage {
    /// Types 1, 2, 3: scheduled/assigned/special class A position report.
    PositionReportClassA(position_report::PositionReportClassA),
    /// Type 4: base station report. Type 11: UTC/date response (identical layout).
    BaseStationReport(base_station::BaseStationReport),
    /// Type 5: static and voyage related data.
    StaticAndVoyageData(static_voyage::StaticAndVoyageData),
    /// Type 6: binary addressed message.
    BinaryAddressedMessage(binary::BinaryAddressedMessage),
    /// Types 7, 13: binary/safety-related acknowledgement.
    Acknowledge(acknowledge::Acknowledge),
    /// Type 8: binary broadcast message.
    BinaryBroadcastMessage(binary::BinaryBroadcastMessage),
    /// Type 9: standard SAR aircraft position report.
    SarAircraftPosition(sar_aircraft::SarAircraftPosition),
    /// Type 10: UTC/date inquiry.
    UtcInquiry(utc_inquiry::UtcInquiry),
    /// Types 12, 14: addressed/broadcast safety related message.
    SafetyRelated(safety::SafetyRelated),
    /// Type 15: interrogation.
    Interrogation(interrogation::Interrogation),
    /// Type 16: assignment mode command.
    AssignmentModeCommand(assignment::AssignmentModeCommand),
    /// Type 17: DGNSS broadcast binary message.
    DgnssBroadcast(dgnss::DgnssBroadcast),
    /// Type 18: standard class B equipment position report.
    StandardClassBPositionReport(class_b::StandardClassBPositionReport),
    /// Type 19: extended class B equipment position report.
    ExtendedClassBPositionReport(class_b::ExtendedClassBPositionReport),
    /// Type 20: data link management message.
    DataLinkManagement(data_link_mgmt::DataLinkManagement),
    /// Type 21: aid-to-navigation report.
    AidToNavigationReport(aton::AidToNavigationReport),
    /// Type 22: channel management.
    ChannelManagement(channel_mgmt::ChannelManagement),
    /// Type 23: group assignment command.
    GroupAssignmentCommand(group_assignment::GroupAssignmentCommand),
    /// Type 24: static data report, Part A or Part B.
    StaticDataReport(static_data_report::StaticDataReport),
    /// Type 25: single slot binary message.
    BinaryMessageSingleSlot(binary::BinaryMessageSingleSlot),
    /// Type 26: multiple slot binary message with comm state.
    BinaryMessageMultipleSlot(binary::BinaryMessageMultipleSlot),
    /// Type 27: long range AIS broadcast message.
    LongRangeBroadcast(long_range::LongRangeBroadcast),
}

/// Decodes a complete, reassembled bit buffer into a typed message.
pub fn decode(buf: &BitBuffer) -> Result<DecodedMessage, ParseError> {
    let header = read_header(buf)?;
    match header.msg_type {
        1..=3 => Ok(DecodedMessage::PositionReportClassA(position_report::decode(buf, header)?)),
        4 | 11 => Ok(DecodedMessage::BaseStationReport(base_station::decode(buf, header)?)),
        5 => Ok(DecodedMessage::StaticAndVoyageData(static_voyage::decode(buf, header)?)),
        6 => Ok(DecodedMessage::BinaryAddressedMessage(binary::decode_addressed(buf, header)?)),
        7 | 13 => Ok(DecodedMessage::Acknowledge(acknowledge::decode(buf, header)?)),
        8 => Ok(DecodedMessage::BinaryBroadcastMessage(binary::decode_broadcast(buf, header)?)),
        9 => Ok(DecodedMessage::SarAircraftPosition(sar_aircraft::decode(buf, header)?)),
        10 => Ok(DecodedMessage::UtcInquiry(utc_inquiry::decode(buf, header)?)),
        12 | 14 => Ok(DecodedMessage::SafetyRelated(safety::decode(buf, header)?)),
        15 => Ok(DecodedMessage::Interrogation(interrogation::decode(buf, header)?)),
        16 => Ok(DecodedMessage::AssignmentModeCommand(assignment::decode(buf, header)?)),
        17 => Ok(DecodedMessage::DgnssBroadcast(dgnss::decode(buf, header)?)),
        18 => Ok(DecodedMessage::StandardClassBPositionReport(class_b::decode_standard(buf, header)?)),
        19 => Ok(DecodedMessage::ExtendedClassBPositionReport(class_b::decode_extended(buf, header)?)),
        20 => Ok(DecodedMessage::DataLinkManagement(data_link_mgmt::decode(buf, header)?)),
        21 => Ok(DecodedMessage::AidToNavigationReport(aton::decode(buf, header)?)),
        22 => Ok(DecodedMessage::ChannelManagement(channel_mgmt::decode(buf, header)?)),
        23 => Ok(DecodedMessage::GroupAssignmentCommand(group_assignment::decode(buf, header)?)),
        24 => Ok(DecodedMessage::StaticDataReport(static_data_report::decode(buf, header)?)),
        25 => Ok(DecodedMessage::BinaryMessageSingleSlot(binary::decode_single_slot(buf, header)?)),
        26 => Ok(DecodedMessage::BinaryMessageMultipleSlot(binary::decode_multi_slot(buf, header)?)),
        27 => Ok(DecodedMessage::LongRangeBroadcast(long_range::decode(buf, header)?)),
        other => Err(ParseError::UnknownType(other)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::armor;

    #[test]
    fn test_read_header() {
        let buf = armor::decode("13HOI:0P0000VOHLCnHQKwvL05Ip", 0, true).unwrap();
        let header = read_header(&buf).unwrap();
        assert_eq!(header.msg_type, 1);
    }

    #[test]
    fn test_unknown_type_rejected() {
        // 6 zero bits followed by padding is message type 0
        let buf = armor::decode("0000000", 0, true).unwrap();
        let err = decode(&buf).unwrap_err();
        assert!(matches!(err, ParseError::UnknownType(0)));
    }
}
