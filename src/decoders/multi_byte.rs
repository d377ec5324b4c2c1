/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use encoding_rs::{
    Encoding, BIG5, EUC_JP, EUC_KR, GB18030, GBK, IBM866, ISO_2022_JP, ISO_8859_10, ISO_8859_13,
    ISO_8859_14, ISO_8859_15, ISO_8859_16, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5,
    ISO_8859_6, ISO_8859_7, ISO_8859_8, KOI8_R, KOI8_U, MACINTOSH, SHIFT_JIS, WINDOWS_1250,
    WINDOWS_1251, WINDOWS_1252, WINDOWS_1253, WINDOWS_1254, WINDOWS_1255, WINDOWS_1256,
    WINDOWS_1257, WINDOWS_1258, WINDOWS_874,
};

use super::DecoderFnc;

/// Returns the decoder for a legacy single or multi byte character set name.
pub fn get_multi_byte_decoder(charset: &[u8]) -> Option<DecoderFnc> {
    hashify::tiny_map_ignore_case!(charset,
        // WHATWG maps ISO-8859-1 to windows-1252
        "iso-8859-1" => decoder_windows_1252 as DecoderFnc,
        "iso_8859-1" => decoder_windows_1252 as DecoderFnc,
        "latin1" => decoder_windows_1252 as DecoderFnc,
        "l1" => decoder_windows_1252 as DecoderFnc,
        "cp819" => decoder_windows_1252 as DecoderFnc,
        "windows-1252" => decoder_windows_1252 as DecoderFnc,
        "cp1252" => decoder_windows_1252 as DecoderFnc,
        "iso-8859-2" => decoder_iso_8859_2 as DecoderFnc,
        "latin2" => decoder_iso_8859_2 as DecoderFnc,
        "iso-8859-3" => decoder_iso_8859_3 as DecoderFnc,
        "latin3" => decoder_iso_8859_3 as DecoderFnc,
        "iso-8859-4" => decoder_iso_8859_4 as DecoderFnc,
        "latin4" => decoder_iso_8859_4 as DecoderFnc,
        "iso-8859-5" => decoder_iso_8859_5 as DecoderFnc,
        "cyrillic" => decoder_iso_8859_5 as DecoderFnc,
        "iso-8859-6" => decoder_iso_8859_6 as DecoderFnc,
        "arabic" => decoder_iso_8859_6 as DecoderFnc,
        "iso-8859-7" => decoder_iso_8859_7 as DecoderFnc,
        "greek" => decoder_iso_8859_7 as DecoderFnc,
        "iso-8859-8" => decoder_iso_8859_8 as DecoderFnc,
        "hebrew" => decoder_iso_8859_8 as DecoderFnc,
        "iso-8859-10" => decoder_iso_8859_10 as DecoderFnc,
        "latin6" => decoder_iso_8859_10 as DecoderFnc,
        "iso-8859-13" => decoder_iso_8859_13 as DecoderFnc,
        "iso-8859-14" => decoder_iso_8859_14 as DecoderFnc,
        "iso-8859-15" => decoder_iso_8859_15 as DecoderFnc,
        "latin-9" => decoder_iso_8859_15 as DecoderFnc,
        "iso-8859-16" => decoder_iso_8859_16 as DecoderFnc,
        "windows-1250" => decoder_windows_1250 as DecoderFnc,
        "cp1250" => decoder_windows_1250 as DecoderFnc,
        "windows-1251" => decoder_windows_1251 as DecoderFnc,
        "cp1251" => decoder_windows_1251 as DecoderFnc,
        "windows-1253" => decoder_windows_1253 as DecoderFnc,
        "cp1253" => decoder_windows_1253 as DecoderFnc,
        "windows-1254" => decoder_windows_1254 as DecoderFnc,
        "cp1254" => decoder_windows_1254 as DecoderFnc,
        "windows-1255" => decoder_windows_1255 as DecoderFnc,
        "cp1255" => decoder_windows_1255 as DecoderFnc,
        "windows-1256" => decoder_windows_1256 as DecoderFnc,
        "cp1256" => decoder_windows_1256 as DecoderFnc,
        "windows-1257" => decoder_windows_1257 as DecoderFnc,
        "cp1257" => decoder_windows_1257 as DecoderFnc,
        "windows-1258" => decoder_windows_1258 as DecoderFnc,
        "cp1258" => decoder_windows_1258 as DecoderFnc,
        "windows-874" => decoder_windows_874 as DecoderFnc,
        "tis-620" => decoder_windows_874 as DecoderFnc,
        "iso-8859-11" => decoder_windows_874 as DecoderFnc,
        "ibm866" => decoder_ibm866 as DecoderFnc,
        "cp866" => decoder_ibm866 as DecoderFnc,
        "koi8-r" => decoder_koi8_r as DecoderFnc,
        "cskoi8r" => decoder_koi8_r as DecoderFnc,
        "koi8-u" => decoder_koi8_u as DecoderFnc,
        "macintosh" => decoder_macintosh as DecoderFnc,
        "mac" => decoder_macintosh as DecoderFnc,
        "shift_jis" => decoder_shift_jis as DecoderFnc,
        "shift-jis" => decoder_shift_jis as DecoderFnc,
        "ms_kanji" => decoder_shift_jis as DecoderFnc,
        "csshiftjis" => decoder_shift_jis as DecoderFnc,
        "big5" => decoder_big5 as DecoderFnc,
        "csbig5" => decoder_big5 as DecoderFnc,
        "euc-jp" => decoder_euc_jp as DecoderFnc,
        "cseucpkdfmtjapanese" => decoder_euc_jp as DecoderFnc,
        "euc-kr" => decoder_euc_kr as DecoderFnc,
        "cseuckr" => decoder_euc_kr as DecoderFnc,
        "iso-2022-jp" => decoder_iso_2022_jp as DecoderFnc,
        "csiso2022jp" => decoder_iso_2022_jp as DecoderFnc,
        "gb18030" => decoder_gb18030 as DecoderFnc,
        "csgb18030" => decoder_gb18030 as DecoderFnc,
        "gbk" => decoder_gbk as DecoderFnc,
        "cp936" => decoder_gbk as DecoderFnc,
        "ms936" => decoder_gbk as DecoderFnc,
        "csgbk" => decoder_gbk as DecoderFnc,
    )
}

fn decode(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let (result, _, _) = encoding.decode(bytes);
    result.into_owned()
}

pub fn decoder_windows_1250(bytes: &[u8]) -> String {
    decode(WINDOWS_1250, bytes)
}

pub fn decoder_windows_1251(bytes: &[u8]) -> String {
    decode(WINDOWS_1251, bytes)
}

pub fn decoder_windows_1252(bytes: &[u8]) -> String {
    decode(WINDOWS_1252, bytes)
}

pub fn decoder_windows_1253(bytes: &[u8]) -> String {
    decode(WINDOWS_1253, bytes)
}

pub fn decoder_windows_1254(bytes: &[u8]) -> String {
    decode(WINDOWS_1254, bytes)
}

pub fn decoder_windows_1255(bytes: &[u8]) -> String {
    decode(WINDOWS_1255, bytes)
}

pub fn decoder_windows_1256(bytes: &[u8]) -> String {
    decode(WINDOWS_1256, bytes)
}

pub fn decoder_windows_1257(bytes: &[u8]) -> String {
    decode(WINDOWS_1257, bytes)
}

pub fn decoder_windows_1258(bytes: &[u8]) -> String {
    decode(WINDOWS_1258, bytes)
}

pub fn decoder_windows_874(bytes: &[u8]) -> String {
    decode(WINDOWS_874, bytes)
}

pub fn decoder_iso_8859_2(bytes: &[u8]) -> String {
    decode(ISO_8859_2, bytes)
}

pub fn decoder_iso_8859_3(bytes: &[u8]) -> String {
    decode(ISO_8859_3, bytes)
}

pub fn decoder_iso_8859_4(bytes: &[u8]) -> String {
    decode(ISO_8859_4, bytes)
}

pub fn decoder_iso_8859_5(bytes: &[u8]) -> String {
    decode(ISO_8859_5, bytes)
}

pub fn decoder_iso_8859_6(bytes: &[u8]) -> String {
    decode(ISO_8859_6, bytes)
}

pub fn decoder_iso_8859_7(bytes: &[u8]) -> String {
    decode(ISO_8859_7, bytes)
}

pub fn decoder_iso_8859_8(bytes: &[u8]) -> String {
    decode(ISO_8859_8, bytes)
}

pub fn decoder_iso_8859_10(bytes: &[u8]) -> String {
    decode(ISO_8859_10, bytes)
}

pub fn decoder_iso_8859_13(bytes: &[u8]) -> String {
    decode(ISO_8859_13, bytes)
}

pub fn decoder_iso_8859_14(bytes: &[u8]) -> String {
    decode(ISO_8859_14, bytes)
}

pub fn decoder_iso_8859_15(bytes: &[u8]) -> String {
    decode(ISO_8859_15, bytes)
}

pub fn decoder_iso_8859_16(bytes: &[u8]) -> String {
    decode(ISO_8859_16, bytes)
}

pub fn decoder_ibm866(bytes: &[u8]) -> String {
    decode(IBM866, bytes)
}

pub fn decoder_koi8_r(bytes: &[u8]) -> String {
    decode(KOI8_R, bytes)
}

pub fn decoder_koi8_u(bytes: &[u8]) -> String {
    decode(KOI8_U, bytes)
}

pub fn decoder_macintosh(bytes: &[u8]) -> String {
    decode(MACINTOSH, bytes)
}

pub fn decoder_shift_jis(bytes: &[u8]) -> String {
    decode(SHIFT_JIS, bytes)
}

pub fn decoder_big5(bytes: &[u8]) -> String {
    decode(BIG5, bytes)
}

pub fn decoder_euc_jp(bytes: &[u8]) -> String {
    decode(EUC_JP, bytes)
}

pub fn decoder_euc_kr(bytes: &[u8]) -> String {
    decode(EUC_KR, bytes)
}

pub fn decoder_iso_2022_jp(bytes: &[u8]) -> String {
    decode(ISO_2022_JP, bytes)
}

pub fn decoder_gb18030(bytes: &[u8]) -> String {
    decode(GB18030, bytes)
}

pub fn decoder_gbk(bytes: &[u8]) -> String {
    decode(GBK, bytes)
}

#[cfg(test)]
mod tests {
    use super::get_multi_byte_decoder;

    #[test]
    fn find_decoder() {
        let inputs = [
            "ISO-8859-1",
            "Latin1",
            "cyrillic",
            "WINDOWS-1252",
            "tis-620",
            "Shift_JIS",
            "csEUCKR",
            "gb18030",
        ];

        for input in inputs {
            assert!(
                get_multi_byte_decoder(input.as_bytes()).is_some(),
                "Could not find a decoder for {input:?}"
            );
        }
    }
}
