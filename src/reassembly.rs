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

//! Holds fragments of multi-part `!AIVDM` sentences until every part of
//! a group has arrived, or until they go stale and are garbage
//! collected. A caller drives the clock explicitly via `now` so this
//! module never touches the wall clock itself.

use crate::error::ParseError;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

struct Entry {
    expected: u8,
    fragments: BTreeMap<u8, (String, u8)>,
    first_seen: u64,
    last_seen: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Reassembled {
    pub payload: String,
    /// Fill bits of the final fragment, the only one whose padding matters.
    pub fill: u8,
}

pub struct Table {
    entries: hashbrown::HashMap<(u8, String), Entry>,
    ttl_seconds: u64,
    max_pending_entries: usize,
}

impl Table {
    pub fn new(ttl_seconds: u64, max_pending_entries: usize) -> Self {
        Table { entries: hashbrown::HashMap::new(), ttl_seconds, max_pending_entries }
    }

    /// Registers one fragment. Returns `Ok(Some(_))` once every fragment
    /// `1..=total` for this `(group_id, channel)` has arrived, `Ok(None)`
    /// while the group is still incomplete.
    pub fn insert(
        &mut self,
        group_id: u8,
        channel: &str,
        total: u8,
        index: u8,
        payload: &str,
        fill: u8,
        now: u64,
    ) -> Result<Option<Reassembled>, ParseError> {
        let key = (group_id, channel.to_string());

        if let Some(entry) = self.entries.get(&key) {
            if entry.expected != total {
                self.entries.remove(&key);
                return Err(ParseError::FragmentMismatch { group_id, channel: channel.to_string() });
            }
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_pending_entries {
            self.evict_oldest();
        }

        let entry = self.entries.entry(key.clone()).or_insert_with(|| Entry {
            expected: total,
            fragments: BTreeMap::new(),
            first_seen: now,
            last_seen: now,
        });
        entry.fragments.insert(index, (payload.to_string(), fill));
        entry.last_seen = now;

        let complete = (1..=entry.expected).all(|i| entry.fragments.contains_key(&i));
        if !complete {
            return Ok(None);
        }

        let entry = match self.entries.remove(&key) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let mut combined = String::new();
        let mut final_fill = 0;
        for i in 1..=entry.expected {
            let (part, fill) = &entry.fragments[&i];
            combined.push_str(part);
            if i == entry.expected {
                final_fill = *fill;
            }
        }
        Ok(Some(Reassembled { payload: combined, fill: final_fill }))
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest_key) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.first_seen)
            .map(|(key, _)| key.clone())
        {
            self.entries.remove(&oldest_key);
        }
    }

    /// Drops every pending group whose last fragment arrived more than
    /// `ttl_seconds` before `now`. Returns the dropped `(group_id,
    /// channel)` keys for diagnostics.
    pub fn gc(&mut self, now: u64) -> Vec<(u8, String)> {
        let ttl = self.ttl_seconds;
        let stale: Vec<(u8, String)> = self
            .entries
            .iter()
            .filter(|(_, entry)| now.saturating_sub(entry.last_seen) > ttl)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            self.entries.remove(key);
        }
        stale
    }

    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_fragment_completes_immediately() {
        let mut t = Table::new(60, 256);
        let r = t.insert(0, "A", 1, 1, "payload", 0, 100).unwrap();
        assert_eq!(r, Some(Reassembled { payload: "payload".to_string(), fill: 0 }));
    }

    #[test]
    fn test_two_fragment_reassembly() {
        let mut t = Table::new(60, 256);
        let r1 = t.insert(5, "A", 2, 1, "AAA", 0, 100).unwrap();
        assert_eq!(r1, None);
        let r2 = t.insert(5, "A", 2, 2, "BBB", 2, 101).unwrap();
        assert_eq!(r2, Some(Reassembled { payload: "AAABBB".to_string(), fill: 2 }));
    }

    #[test]
    fn test_out_of_order_fragments() {
        let mut t = Table::new(60, 256);
        assert_eq!(t.insert(1, "A", 3, 2, "B", 0, 100).unwrap(), None);
        assert_eq!(t.insert(1, "A", 3, 1, "A", 0, 100).unwrap(), None);
        let r = t.insert(1, "A", 3, 3, "C", 0, 100).unwrap();
        assert_eq!(r, Some(Reassembled { payload: "ABC".to_string(), fill: 0 }));
    }

    #[test]
    fn test_mismatched_total_is_error() {
        let mut t = Table::new(60, 256);
        t.insert(1, "A", 2, 1, "A", 0, 100).unwrap();
        let err = t.insert(1, "A", 3, 1, "A", 0, 100).unwrap_err();
        assert!(matches!(err, ParseError::FragmentMismatch { .. }));
    }

    #[test]
    fn test_gc_evicts_stale_groups() {
        let mut t = Table::new(60, 256);
        t.insert(1, "A", 2, 1, "A", 0, 100).unwrap();
        let dropped = t.gc(100 + 61);
        assert_eq!(dropped.len(), 1);
        assert_eq!(t.pending_count(), 0);
    }

    #[test]
    fn test_gc_keeps_fresh_groups() {
        let mut t = Table::new(60, 256);
        t.insert(1, "A", 2, 1, "A", 0, 100).unwrap();
        let dropped = t.gc(100 + 30);
        assert!(dropped.is_empty());
        assert_eq!(t.pending_count(), 1);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut t = Table::new(60, 1);
        t.insert(1, "A", 2, 1, "A", 0, 100).unwrap();
        t.insert(2, "A", 2, 1, "B", 0, 200).unwrap();
        assert_eq!(t.pending_count(), 1);
    }

    #[test]
    fn test_distinct_channels_are_independent() {
        let mut t = Table::new(60, 256);
        assert_eq!(t.insert(1, "A", 2, 1, "A", 0, 100).unwrap(), None);
        assert_eq!(t.insert(1, "B", 2, 1, "X", 0, 100).unwrap(), None);
        assert_eq!(t.pending_count(), 2);
    }
}
