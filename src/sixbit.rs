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

//! Fixed-length 6-bit packed ASCII text, per ITU-R M.1371-5 Table 47.

use crate::bitbuffer::BitBuffer;
use crate::error::Truncated;
use alloc::string::String;

/// A decoded 6-bit text field, kept in both its untrimmed and trimmed
/// form. ITU leaves the handling of an embedded `@` (before the final
/// padding) ambiguous; the reference decoder this crate is grounded on
/// strips only trailing `@` and trailing spaces, so `trimmed` does the
/// same and `raw` is exposed for callers who want the untouched string.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SixBitText {
    pub raw: String,
    pub trimmed: String,
}

/// Decodes `n_chars` 6-bit characters starting at `offset`.
pub fn decode(buf: &BitBuffer, offset: usize, n_chars: usize) -> Result<SixBitText, Truncated> {
    let mut raw = String::with_capacity(n_chars);
    for i in 0..n_chars {
        let code = buf.u(offset + i * 6, 6)?;
        let c = match code {
            0 => '@',
            1..=31 => char::from_u32(code + 64).unwrap_or('?'),
            32..=63 => char::from_u32(code).unwrap_or('?'),
            _ => unreachable!("6-bit field cannot exceed 63"),
        };
        raw.push(c);
    }
    let trimmed = raw.trim_end_matches('@').trim_end().into();
    Ok(SixBitText { raw, trimmed })
}
