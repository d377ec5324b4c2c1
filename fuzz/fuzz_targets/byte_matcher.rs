#![no_main]
use libfuzzer_sys::fuzz_target;

use byte_matcher::{
    decoders::{
        get_charset_decoder,
        utf::{decoder_ascii, decoder_utf16, decoder_utf16_be, decoder_utf16_le, decoder_utf8},
    },
    is_bytes_for, is_bytes_including_spaces_for,
    normalize::remove_whitespace,
    Candidate, Description, Matcher,
};

fuzz_target!(|data: &[u8]| {
    // Fuzz every decoder
    for decoder in &[
        decoder_utf8,
        decoder_ascii,
        decoder_utf16_le,
        decoder_utf16_be,
        decoder_utf16,
    ] as &[for<'x> fn(&'x [u8]) -> String]
    {
        decoder(data);
    }

    get_charset_decoder(data);
    remove_whitespace(&decoder_utf8(data));

    // Fuzz the matchers, using the data as both sides of the comparison
    let expected = decoder_utf8(data);
    for matcher in [
        is_bytes_for(expected.as_str()),
        is_bytes_including_spaces_for(expected.as_str()),
    ] {
        matcher.matches(Candidate::Bytes(data));
        matcher.matches(Candidate::Absent);
        matcher.report(Candidate::Bytes(data));

        let mut description = Description::new();
        matcher.describe_to(&mut description);
        matcher.describe_mismatch(Candidate::Bytes(data), &mut description);
    }
});
