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

//! Decoder configuration. No environment variables, no files, no CLI —
//! callers build a [`DecoderConfig`] in process and hand it to
//! [`crate::AisDecoder::with_config`].

/// Tunables for sentence reassembly and armor decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Seconds a pending multi-fragment entry may sit without a new
    /// fragment before [`crate::AisDecoder::gc`] evicts it.
    pub fragment_ttl_seconds: u64,

    /// When `true`, an armor character outside ASCII `[48, 119]` fails
    /// decoding with [`crate::error::ParseError::BadArmor`]. When `false`,
    /// the character is replaced with six zero bits and decoding
    /// continues.
    pub strict_armor: bool,

    /// Upper bound on the number of distinct `(group_id, channel)`
    /// pending-fragment entries held at once. When an insert would exceed
    /// this, the oldest entry (by last-seen time) is evicted first.
    pub max_pending_entries: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            fragment_ttl_seconds: 60,
            strict_armor: true,
            max_pending_entries: 256,
        }
    }
}
