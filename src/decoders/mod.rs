/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

#[cfg(feature = "full_encoding")]
pub mod multi_byte;
pub mod utf;

use crate::decoders::utf::{
    decoder_ascii, decoder_utf16, decoder_utf16_be, decoder_utf16_le, decoder_utf8,
};

pub type DecoderFnc = fn(&[u8]) -> String;

/// Returns the decoder for a character set name, matched case-insensitively
/// against the IANA names and aliases. The UTF family is always available;
/// legacy single and multi byte character sets require the `full_encoding`
/// feature. Unknown names return `None`.
pub fn get_charset_decoder(charset: &[u8]) -> Option<DecoderFnc> {
    let decoder = hashify::tiny_map_ignore_case!(charset,
        "utf-8" => decoder_utf8 as DecoderFnc,
        "utf8" => decoder_utf8 as DecoderFnc,
        "csutf8" => decoder_utf8 as DecoderFnc,
        "us-ascii" => decoder_ascii as DecoderFnc,
        "ascii" => decoder_ascii as DecoderFnc,
        "csascii" => decoder_ascii as DecoderFnc,
        "utf-16" => decoder_utf16 as DecoderFnc,
        "csutf16" => decoder_utf16 as DecoderFnc,
        "utf-16le" => decoder_utf16_le as DecoderFnc,
        "csutf16le" => decoder_utf16_le as DecoderFnc,
        "utf-16be" => decoder_utf16_be as DecoderFnc,
        "csutf16be" => decoder_utf16_be as DecoderFnc,
    );

    #[cfg(feature = "full_encoding")]
    let decoder = decoder.or_else(|| multi_byte::get_multi_byte_decoder(charset));

    decoder
}
