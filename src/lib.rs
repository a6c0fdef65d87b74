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

//! # ais-decoder
//!
//! A decoder for Automatic Identification System (AIS) messages carried
//! over NMEA 0183 `!AIVDM`/`!AIVDO` sentences, per ITU-R M.1371-5.
//!
//! Given one or more NMEA sentence lines, [`AisDecoder::parse_sentence`]
//! reassembles multi-fragment payloads, classifies the message by its
//! 6-bit type field (1-27), and decodes every field the standard defines
//! for that type into a typed [`messages::DecodedMessage`] with explicit
//! validity and range semantics ([`fields::Field`]).
//!
//! This crate decodes wire sentences into structured values. It does not
//! ingest UDP/serial streams, does not aggregate successive reports into
//! a per-vessel record, and does not render or persist anything — those
//! are the job of a caller built around it.
//!
//! Usage in a `#[no_std]` environment is possible though an allocator is
//! required.
//!
//! ```
//! use ais_decoder::{AisDecoder, ParseOutcome};
//!
//! let mut decoder = AisDecoder::new();
//! let outcome = decoder.parse_sentence("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0*23", 0);
//! match outcome {
//!     ParseOutcome::Complete(msg) => println!("{:?}", msg),
//!     ParseOutcome::Pending => println!("waiting on more fragments"),
//!     ParseOutcome::Ignored => println!("not an AIS sentence"),
//!     ParseOutcome::Error(e) => println!("failed to parse: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate alloc;

#[macro_use]
extern crate log;

pub mod armor;
pub mod bitbuffer;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod messages;
pub mod reassembly;
pub mod sixbit;
pub mod types;

pub use config::DecoderConfig;
pub use error::ParseError;
pub use messages::DecodedMessage;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of feeding one NMEA line to [`AisDecoder::parse_sentence`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome {
    /// The line was not a `!AIVDM`/`!AIVDO` sentence at all.
    Ignored,
    /// A fragment of a multi-part message was accepted; the group isn't
    /// complete yet, so no record is available.
    Pending,
    /// Every fragment of the message arrived (or it was single-part);
    /// here is the decoded record.
    Complete(DecodedMessage),
    /// The line was an AIS sentence but failed checksum, envelope, armor,
    /// reassembly, or message decoding.
    Error(ParseError),
}

/// Reassembles and decodes `!AIVDM`/`!AIVDO` sentences. Owns the pending
/// multi-fragment table; synchronous, single-threaded, no internal
/// scheduling. Callers needing concurrent access must serialize calls to
/// [`AisDecoder::parse_sentence`] and [`AisDecoder::gc`] themselves, or
/// use one instance per thread (`spec.md` §5).
pub struct AisDecoder {
    config: DecoderConfig,
    pending: reassembly::Table,
}

impl Default for AisDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AisDecoder {
    /// A decoder with [`DecoderConfig::default`] settings.
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// A decoder with caller-supplied tunables for fragment TTL, armor
    /// strictness, and the pending-table size cap.
    pub fn with_config(config: DecoderConfig) -> Self {
        let pending = reassembly::Table::new(config.fragment_ttl_seconds, config.max_pending_entries);
        AisDecoder { config, pending }
    }

    /// Parses one NMEA line. `now` is a caller-supplied monotonic second
    /// counter, used only for fragment TTL bookkeeping — this crate never
    /// reads the wall clock itself.
    ///
    /// Returns [`ParseOutcome::Ignored`] for a line that isn't an AIS
    /// sentence, [`ParseOutcome::Pending`] while a multi-fragment group is
    /// incomplete, [`ParseOutcome::Complete`] with the decoded record once
    /// every fragment has arrived (or immediately for a single-part
    /// sentence), and [`ParseOutcome::Error`] for any envelope, checksum,
    /// armor, reassembly, or message-decoding failure.
    pub fn parse_sentence(&mut self, line: &str, now: u64) -> ParseOutcome {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if !(trimmed.starts_with("!AIVDM") || trimmed.starts_with("!AIVDO")) {
            return ParseOutcome::Ignored;
        }

        match self.parse_ais_sentence(line, now) {
            Ok(outcome) => outcome,
            Err(e) => ParseOutcome::Error(e),
        }
    }

    fn parse_ais_sentence(&mut self, line: &str, now: u64) -> Result<ParseOutcome, ParseError> {
        let env = envelope::parse(line)?;

        if env.total <= 1 {
            let buf = armor::decode(&env.payload, env.fill, self.config.strict_armor)?;
            let msg = messages::decode(&buf)?;
            return Ok(ParseOutcome::Complete(msg));
        }

        let reassembled = self.pending.insert(
            env.group_id,
            &env.channel,
            env.total,
            env.index,
            &env.payload,
            env.fill,
            now,
        )?;

        match reassembled {
            Some(r) => {
                let buf = armor::decode(&r.payload, r.fill, self.config.strict_armor)?;
                let msg = messages::decode(&buf)?;
                Ok(ParseOutcome::Complete(msg))
            }
            None => Ok(ParseOutcome::Pending),
        }
    }

    /// Evicts pending fragment groups whose last fragment arrived more
    /// than `fragment_ttl_seconds` before `now`. Must be serialized with
    /// [`AisDecoder::parse_sentence`] by the caller; returns the dropped
    /// `(group_id, channel)` keys for diagnostics.
    pub fn gc(&mut self, now: u64) -> Vec<(u8, String)> {
        self.pending.gc(now)
    }

    /// Number of distinct `(group_id, channel)` groups currently awaiting
    /// more fragments.
    pub fn pending_count(&self) -> usize {
        self.pending.pending_count()
    }

    /// The configuration this decoder was built with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}
