//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::Id;

const fn build_crc32_lut() -> [u32; 256] {
    let mut lut = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = (crc >> 1) ^ (0u32.wrapping_sub(crc & 1) & 0xEDB8_8320);
            bit += 1;
        }
        lut[i] = crc;
        i += 1;
    }
    lut
}

static CRC32_LUT: [u32; 256] = build_crc32_lut();

#[inline]
fn crc32_step(crc: u32, byte: u8) -> u32 { (crc >> 8) ^ CRC32_LUT[((crc & 0xFF) as u8 ^ byte) as usize] }

/// Hashes an arbitrary byte buffer.
///
/// Integers are hashed through their little-endian bytes and handles through `usize` bytes, so
/// the same value always produces the same identifier on a given platform.
pub fn hash_data(data: &[u8], seed: Id) -> Id {
    let mut crc = !seed.raw();
    for &b in data {
        crc = crc32_step(crc, b);
    }
    Id::new(!crc)
}

/// Hashes a label.
///
/// A `###` marker restarts the hash from `seed`, so `"Label###Id"` and `"Other###Id"` share
/// their identity while displaying different text. `##` alone is hashed like any other text and
/// only hides the suffix from display.
pub fn hash_str(s: &str, seed: Id) -> Id {
    let seed = seed.raw();
    let bytes = s.as_bytes();
    let mut crc = !seed;
    for (i, &c) in bytes.iter().enumerate() {
        if c == b'#' && bytes.get(i + 1) == Some(&b'#') && bytes.get(i + 2) == Some(&b'#') {
            crc = seed;
        }
        crc = crc32_step(crc, c);
    }
    Id::new(!crc)
}

pub(crate) fn hash_i32(value: i32, seed: Id) -> Id { hash_data(&value.to_le_bytes(), seed) }

pub(crate) fn hash_usize(value: usize, seed: Id) -> Id { hash_data(&value.to_le_bytes(), seed) }

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn crc32_matches_reference_value() {
        // Standard CRC32 check value of "123456789".
        assert_eq!(hash_data(b"123456789", Id::NONE).raw(), 0xCBF4_3926);
        assert_eq!(hash_str("123456789", Id::NONE).raw(), 0xCBF4_3926);
    }

    #[test]
    fn triple_hash_resets_identity() {
        let seed = Id::new(0x1234_5678);
        assert_eq!(hash_str("Label###ID", seed), hash_str("###ID", seed));
        assert_eq!(hash_str("Label1###ID", seed), hash_str("Label2###ID", seed));
        assert_ne!(hash_str("Label1##ID", seed), hash_str("Label2##ID", seed));
    }

    #[test]
    fn seed_changes_identity() {
        assert_ne!(hash_str("Button", Id::new(1)), hash_str("Button", Id::new(2)));
        assert_ne!(hash_i32(3, Id::new(7)), hash_i32(4, Id::new(7)));
    }

    #[test]
    fn empty_input_is_stable() {
        assert_eq!(hash_str("", Id::new(42)), hash_data(&[], Id::new(42)));
    }

    proptest! {
        #[test]
        fn hash_is_deterministic(s in ".*", seed in any::<u32>()) {
            prop_assert_eq!(hash_str(&s, Id::new(seed)), hash_str(&s, Id::new(seed)));
        }

        #[test]
        fn label_prefix_is_ignored_after_marker(prefix in "[a-zA-Z0-9 ]{0,16}", suffix in "[a-zA-Z0-9]{0,16}", seed in any::<u32>()) {
            let full = format!("{}###{}", prefix, suffix);
            let bare = format!("###{}", suffix);
            prop_assert_eq!(hash_str(&full, Id::new(seed)), hash_str(&bare, Id::new(seed)));
        }

        #[test]
        fn plain_strings_match_data_hash(s in "[a-zA-Z0-9 ]{0,32}", seed in any::<u32>()) {
            prop_assert_eq!(hash_str(&s, Id::new(seed)), hash_data(s.as_bytes(), Id::new(seed)));
        }
    }
}
