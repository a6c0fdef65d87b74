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

//! Small enums shared by several message decoders: navigation status,
//! EPFD type, maneuver indicator, station/reporting configuration, and
//! the formulaic ship-type and aid-to-navigation-type descriptions.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManeuverability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    ReservedForHsc,
    ReservedForWig,
    PowerDrivenVesselTowingAstern,
    PowerDrivenVesselPushingAheadOrTowingAlongside,
    /// Codes 13 and 15 are reserved for future use; 15 also serves as
    /// the "not defined" default.
    Reserved(u8),
    AisSartOrMobOrEpirb,
    NotDefined,
}

pub fn navigation_status(raw: u8) -> NavigationStatus {
    use NavigationStatus::*;
    match raw {
        0 => UnderWayUsingEngine,
        1 => AtAnchor,
        2 => NotUnderCommand,
        3 => RestrictedManeuverability,
        4 => ConstrainedByDraught,
        5 => Moored,
        6 => Aground,
        7 => EngagedInFishing,
        8 => UnderWaySailing,
        9 => ReservedForHsc,
        10 => ReservedForWig,
        12 => PowerDrivenVesselTowingAstern,
        13 => PowerDrivenVesselPushingAheadOrTowingAlongside,
        14 => AisSartOrMobOrEpirb,
        15 => NotDefined,
        other => Reserved(other),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpfdType {
    Undefined,
    Gps,
    Glonass,
    GpsGlonass,
    Loran,
    Chayka,
    IntegratedNavigationSystem,
    Surveyed,
    Galileo,
    Reserved(u8),
}

pub fn epfd_type(raw: u8) -> EpfdType {
    use EpfdType::*;
    match raw {
        0 => Undefined,
        1 => Gps,
        2 => Glonass,
        3 => GpsGlonass,
        4 => Loran,
        5 => Chayka,
        6 => IntegratedNavigationSystem,
        7 => Surveyed,
        8 => Galileo,
        other => Reserved(other),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManeuverIndicator {
    NotAvailable,
    NoSpecialManeuver,
    SpecialManeuver,
    Reserved(u8),
}

pub fn maneuver_indicator(raw: u8) -> ManeuverIndicator {
    match raw {
        0 => ManeuverIndicator::NotAvailable,
        1 => ManeuverIndicator::NoSpecialManeuver,
        2 => ManeuverIndicator::SpecialManeuver,
        other => ManeuverIndicator::Reserved(other),
    }
}

/// Type 23 group assignment "station type" sub-field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationType {
    AllTypes,
    ClassAOnly,
    AllTypesBReserved,
    SarAirborne,
    ClassBShipborneOnly,
    InlandWaterways,
    RegionalUse7,
    RegionalUse8,
    RegionalUse9,
    RegionalUse10,
    BaseStationCoverage,
    Reserved(u8),
}

pub fn station_type(raw: u8) -> StationType {
    use StationType::*;
    match raw {
        0 => AllTypes,
        1 => ClassAOnly,
        2 => AllTypesBReserved,
        3 => SarAirborne,
        4 => ClassBShipborneOnly,
        5 => InlandWaterways,
        6 => RegionalUse7,
        7 => RegionalUse8,
        8 => RegionalUse9,
        9 => RegionalUse10,
        10 => BaseStationCoverage,
        other => Reserved(other),
    }
}

/// Type 23 "reporting interval" sub-field (ITU-R M.1371-5 Table 18).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportingInterval {
    AsAutonomousMode,
    TenMinutes,
    SixMinutes,
    ThreeMinutes,
    OneMinute,
    ThirtySeconds,
    FifteenSeconds,
    TenSeconds,
    FiveSeconds,
    NextShorterReportingInterval,
    NextLongerReportingInterval,
    TwoSeconds,
    Reserved(u8),
}

pub fn reporting_interval(raw: u8) -> ReportingInterval {
    use ReportingInterval::*;
    match raw {
        0 => AsAutonomousMode,
        1 => TenMinutes,
        2 => SixMinutes,
        3 => ThreeMinutes,
        4 => OneMinute,
        5 => ThirtySeconds,
        6 => FifteenSeconds,
        7 => TenSeconds,
        8 => FiveSeconds,
        9 => NextShorterReportingInterval,
        10 => NextLongerReportingInterval,
        11 => TwoSeconds,
        other => Reserved(other),
    }
}

/// Type 21 aid-to-navigation type (ITU-R M.1371-5 Table 13, 32 entries).
/// Kept as a raw code plus a description function rather than a 32-way
/// enum: callers who need the exact code (for filtering) still get it,
/// and new revisions of the table only touch this one match arm list.
pub fn aid_type_description(raw: u8) -> &'static str {
    match raw {
        0 => "not specified",
        1 => "reference point",
        2 => "RACON",
        3 => "fixed structure off shore",
        4 => "spare, reserved for future use",
        5 => "light, without sectors",
        6 => "light, with sectors",
        7 => "leading light front",
        8 => "leading light rear",
        9 => "beacon, cardinal N",
        10 => "beacon, cardinal E",
        11 => "beacon, cardinal S",
        12 => "beacon, cardinal W",
        13 => "beacon, port hand",
        14 => "beacon, starboard hand",
        15 => "beacon, preferred channel port hand",
        16 => "beacon, preferred channel starboard hand",
        17 => "beacon, isolated danger",
        18 => "beacon, safe water",
        19 => "beacon, special mark",
        20 => "cardinal mark N",
        21 => "cardinal mark E",
        22 => "cardinal mark S",
        23 => "cardinal mark W",
        24 => "port hand mark",
        25 => "starboard hand mark",
        26 => "preferred channel port hand mark",
        27 => "preferred channel starboard hand mark",
        28 => "isolated danger",
        29 => "safe water",
        30 => "special mark",
        31 => "light vessel/LANBY/rigs",
        _ => "unknown aid type",
    }
}

/// Type 5 / 19 / 24 ship-and-cargo type (ITU-R M.1371-5 Table 19bis).
/// Expressed as a formula over the tens/units digits rather than a
/// literal 100-entry table, matching how the field is actually
/// structured: the first digit selects a category, the second a
/// refinement within it.
pub fn ship_type_description(raw: u8) -> &'static str {
    match raw {
        0 => "not available",
        20..=29 => "wing in ground (WIG)",
        30 => "fishing",
        31 => "towing",
        32 => "towing, length >200m or breadth >25m",
        33 => "dredging or underwater ops",
        34 => "diving ops",
        35 => "military ops",
        36 => "sailing",
        37 => "pleasure craft",
        40..=49 => "high speed craft (HSC)",
        50 => "pilot vessel",
        51 => "search and rescue vessel",
        52 => "tug",
        53 => "port tender",
        54 => "anti-pollution equipment",
        55 => "law enforcement",
        56 | 57 => "spare, local vessel",
        58 => "medical transport",
        59 => "noncombatant ship per RR resolution 18",
        60..=69 => "passenger",
        70..=79 => "cargo",
        80..=89 => "tanker",
        90..=99 => "other type",
        1..=19 => "reserved",
        _ => "unknown",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_navigation_status() {
        assert_eq!(navigation_status(0), NavigationStatus::UnderWayUsingEngine);
        assert_eq!(navigation_status(15), NavigationStatus::NotDefined);
        assert_eq!(navigation_status(13), NavigationStatus::PowerDrivenVesselPushingAheadOrTowingAlongside);
        assert_eq!(navigation_status(11), NavigationStatus::Reserved(11));
    }

    #[test]
    fn test_epfd_type() {
        assert_eq!(epfd_type(1), EpfdType::Gps);
        assert_eq!(epfd_type(42), EpfdType::Reserved(42));
    }

    #[test]
    fn test_ship_type_buckets() {
        assert_eq!(ship_type_description(0), "not available");
        assert_eq!(ship_type_description(30), "fishing");
        assert_eq!(ship_type_description(70), "cargo");
        assert_eq!(ship_type_description(79), "cargo");
        assert_eq!(ship_type_description(89), "tanker");
    }

    #[test]
    fn test_aid_type_bounds() {
        assert_eq!(aid_type_description(0), "not specified");
        assert_eq!(aid_type_description(31), "light vessel/LANBY/rigs");
        assert_eq!(aid_type_description(200), "unknown aid type");
    }

    #[test]
    fn test_reporting_interval() {
        assert_eq!(reporting_interval(0), ReportingInterval::AsAutonomousMode);
        assert_eq!(reporting_interval(11), ReportingInterval::TwoSeconds);
        assert_eq!(reporting_interval(12), ReportingInterval::Reserved(12));
    }
}
