/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::char::{decode_utf16, REPLACEMENT_CHARACTER};

/// Decodes UTF-8 text, substituting malformed sequences with the replacement
/// character.
pub fn decoder_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decodes US-ASCII text, substituting bytes above 0x7f.
pub fn decoder_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            if byte.is_ascii() {
                char::from(byte)
            } else {
                REPLACEMENT_CHARACTER
            }
        })
        .collect()
}

fn decoder_utf16_(bytes: &[u8], fnc: fn([u8; 2]) -> u16) -> String {
    if bytes.len() >= 2 {
        decode_utf16(bytes.chunks_exact(2).map(|c| fnc([c[0], c[1]])))
            .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
            .collect::<String>()
    } else {
        "".to_string()
    }
}

pub fn decoder_utf16_le(bytes: &[u8]) -> String {
    decoder_utf16_(bytes, u16::from_le_bytes)
}

pub fn decoder_utf16_be(bytes: &[u8]) -> String {
    decoder_utf16_(bytes, u16::from_be_bytes)
}

/// Decodes UTF-16 text, detecting the byte order from the BOM. Defaults to
/// little endian when no BOM is present.
pub fn decoder_utf16(bytes: &[u8]) -> String {
    match (bytes.first(), bytes.get(1)) {
        (Some(0xfe), Some(0xff)) => decoder_utf16_be(bytes.get(2..).unwrap_or_default()),
        (Some(0xff), Some(0xfe)) => decoder_utf16_le(bytes.get(2..).unwrap_or_default()),
        _ => decoder_utf16_le(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::{decoder_ascii, decoder_utf16_be, decoder_utf16_le, decoder_utf8};

    #[test]
    fn decode_utf8() {
        let inputs = [
            (b"Lorem ipsum".to_vec(), "Lorem ipsum"),
            (
                b"Th\xc3\xads \xc3\xads v\xc3\xa1l\xc3\xadd \xc3\x9aTF8".to_vec(),
                "Thís ís válíd ÚTF8",
            ),
            (
                b"\xe3\x83\x8f\xe3\x83\xad\xe3\x83\xbc\xe3\x83\xbb\xe3\x83\xaf\xe3\x83\xbc\xe3\x83\xab\xe3\x83\x89".to_vec(),
                "ハロー・ワールド",
            ),
            (b"love: \xe2\x9d\xa4\xef\xb8\x8f".to_vec(), "love: ❤️"),
            (
                b"Hello \xf0\x90\x28\xbc world".to_vec(),
                "Hello \u{fffd}(\u{fffd} world",
            ),
            (b"\xff\xfe".to_vec(), "\u{fffd}\u{fffd}"),
            (b"".to_vec(), ""),
        ];

        for (bytes, expected) in inputs {
            assert_eq!(decoder_utf8(&bytes), expected, "failed for {bytes:?}");
        }
    }

    #[test]
    fn decode_ascii() {
        assert_eq!(decoder_ascii(b"plain text"), "plain text");
        assert_eq!(decoder_ascii(b"caf\xe9"), "caf\u{fffd}");
    }

    #[test]
    fn decode_utf16_endianness() {
        let inputs = [
            (
                b"\xe1\x00\xe9\x00\xed\x00\xf3\x00\xfa\x00".to_vec(),
                b"\x00\xe1\x00\xe9\x00\xed\x00\xf3\x00\xfa".to_vec(),
                "áéíóú",
            ),
            (
                b"\x3d\xd8\x0a\xde".to_vec(),
                b"\xd8\x3d\xde\x0a".to_vec(),
                "\u{1f60a}",
            ),
        ];

        for (le, be, expected) in inputs {
            assert_eq!(decoder_utf16_le(&le), expected);
            assert_eq!(decoder_utf16_be(&be), expected);
        }

        // Unpaired surrogates are substituted, odd trailing bytes dropped.
        assert_eq!(decoder_utf16_le(b"\x3d\xd8"), "\u{fffd}");
        assert_eq!(decoder_utf16_le(b"a\x00b"), "a");
        assert_eq!(decoder_utf16_le(b"a"), "");
        assert_eq!(decoder_utf16_le(b""), "");
    }

    #[test]
    fn decode_utf16_bom() {
        let inputs = [
            (b"\xff\xfeh\x00i\x00".to_vec(), "hi"),
            (b"\xfe\xff\x00h\x00i".to_vec(), "hi"),
            (b"h\x00i\x00".to_vec(), "hi"),
            (b"\xff\xfe".to_vec(), ""),
            (b"\xfe\xff".to_vec(), ""),
        ];

        for (bytes, expected) in inputs {
            assert_eq!(super::decoder_utf16(&bytes), expected, "failed for {bytes:?}");
        }
    }
}
