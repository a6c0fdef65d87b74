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

//! Splits a raw `!AIVDM`/`!AIVDO` line into its comma-separated fields
//! and validates the trailing checksum, before any armor decoding or
//! fragment reassembly happens.

use crate::error::ParseError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TalkerId {
    /// `!AIVDM`: a message received over the air from another station.
    Vdm,
    /// `!AIVDO`: a message describing the own ship's transmission.
    Vdo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub talker: TalkerId,
    pub total: u8,
    pub index: u8,
    pub group_id: u8,
    pub channel: String,
    pub payload: String,
    pub fill: u8,
}

/// Parses one line, validating the checksum and the minimum field
/// count. Does not touch armor decoding or multi-fragment state.
pub fn parse(line: &str) -> Result<Envelope, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let body = line.strip_prefix('!').ok_or_else(|| ParseError::MalformedEnvelope(line.to_string()))?;

    let (before_checksum, checksum_hex) = split_checksum(body)?;
    if let Some(hex) = checksum_hex {
        let expected = u8::from_str_radix(hex, 16).map_err(|_| ParseError::MalformedEnvelope(line.to_string()))?;
        let found = checksum_of(before_checksum);
        if expected != found {
            return Err(ParseError::BadChecksum { expected, found });
        }
    }

    let fields: Vec<&str> = before_checksum.split(',').collect();
    if fields.len() < 7 {
        return Err(ParseError::MalformedEnvelope(line.to_string()));
    }

    let talker = match &fields[0][..fields[0].len().min(6)] {
        "AIVDM" => TalkerId::Vdm,
        "AIVDO" => TalkerId::Vdo,
        _ => return Err(ParseError::MalformedEnvelope(line.to_string())),
    };

    let total: u8 = fields[1].parse().map_err(|_| ParseError::MalformedEnvelope(line.to_string()))?;
    let index: u8 = fields[2].parse().map_err(|_| ParseError::MalformedEnvelope(line.to_string()))?;
    let group_id: u8 = if fields[3].is_empty() { 0 } else { fields[3].parse().unwrap_or(0) };
    let channel = fields[4].to_string();
    let payload = fields[5].to_string();
    let fill_field = fields[6];
    let fill: u8 = fill_field.chars().next().and_then(|c| c.to_digit(10)).unwrap_or(0) as u8;

    Ok(Envelope { talker, total, index, group_id, channel, payload, fill })
}

fn split_checksum(body: &str) -> Result<(&str, Option<&str>), ParseError> {
    match body.rfind('*') {
        Some(pos) => {
            let hex = &body[pos + 1..];
            if hex.len() != 2 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseError::MalformedEnvelope(body.to_string()));
            }
            Ok((&body[..pos], Some(hex)))
        }
        None => Ok((body, None)),
    }
}

fn checksum_of(body_without_bang: &str) -> u8 {
    body_without_bang.bytes().fold(0u8, |acc, b| acc ^ b)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simple_single_fragment() {
        let env = parse("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0*23").unwrap();
        assert_eq!(env.talker, TalkerId::Vdm);
        assert_eq!(env.total, 1);
        assert_eq!(env.index, 1);
        assert_eq!(env.group_id, 0);
        assert_eq!(env.channel, "A");
        assert_eq!(env.fill, 0);
    }

    #[test]
    fn test_empty_group_id_defaults_zero() {
        let body = "AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0";
        let checksum = checksum_of(body);
        let line = alloc::format!("!{}*{:02X}", body, checksum);
        let env = parse(&line).unwrap();
        assert_eq!(env.group_id, 0);
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let err = parse("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0*00").unwrap_err();
        assert!(matches!(err, ParseError::BadChecksum { .. }));
    }

    #[test]
    fn test_too_few_fields_rejected() {
        let body = "AIVDM,1,1,,A";
        let checksum = checksum_of(body);
        let line = alloc::format!("!{}*{:02X}", body, checksum);
        assert!(matches!(parse(&line), Err(ParseError::MalformedEnvelope(_))));
    }

    #[test]
    fn test_no_checksum_is_accepted() {
        let env = parse("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0").unwrap();
        assert_eq!(env.total, 1);
    }

    #[test]
    fn test_crlf_stripped() {
        let env = parse("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0*23\r\n").unwrap();
        assert_eq!(env.index, 1);
    }
}
