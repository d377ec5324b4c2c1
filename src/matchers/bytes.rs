/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::borrow::Cow;

use crate::{
    decoders::{get_charset_decoder, utf::decoder_utf8, DecoderFnc},
    matchers::{text::TextEqual, MatchReport},
    normalize, Candidate, Description, Matcher,
};

/// Compares a byte buffer to a string. The buffer is decoded as UTF-8 unless
/// the matcher was built for another character set, and both sides of the
/// comparison are stripped of all Unicode whitespace when whitespace removal
/// is enabled. The expected value is normalized once, at construction.
#[derive(Debug, Clone)]
pub struct ByteMatcher {
    delegate: TextEqual,
    remove_whitespace: bool,
    decoder: DecoderFnc,
}

impl ByteMatcher {
    pub fn new(expected: impl Into<String>, remove_whitespace: bool) -> Self {
        ByteMatcher::with_decoder(expected, remove_whitespace, decoder_utf8)
    }

    /// Builds a matcher whose candidates are decoded with the given character
    /// set instead of UTF-8, or `None` when the name is not known.
    pub fn in_charset(
        charset: &str,
        expected: impl Into<String>,
        remove_whitespace: bool,
    ) -> Option<Self> {
        get_charset_decoder(charset.as_bytes())
            .map(|decoder| ByteMatcher::with_decoder(expected, remove_whitespace, decoder))
    }

    fn with_decoder(
        expected: impl Into<String>,
        remove_whitespace: bool,
        decoder: DecoderFnc,
    ) -> Self {
        let mut expected = expected.into();
        if remove_whitespace {
            if let Cow::Owned(normalized) = normalize::remove_whitespace(&expected) {
                expected = normalized;
            }
        }

        ByteMatcher {
            delegate: TextEqual::new(expected),
            remove_whitespace,
            decoder,
        }
    }

    /// The expected value, as compared: already whitespace-normalized when
    /// whitespace removal is enabled.
    pub fn expected(&self) -> &str {
        self.delegate.expected()
    }

    fn bytes_as_text(&self, bytes: &[u8]) -> String {
        let text = (self.decoder)(bytes);
        if self.remove_whitespace {
            match normalize::remove_whitespace(&text) {
                Cow::Owned(normalized) => normalized,
                Cow::Borrowed(_) => text,
            }
        } else {
            text
        }
    }

    /// Evaluates the candidate and returns both sides of the comparison as a
    /// machine-readable record.
    pub fn report(&self, candidate: Candidate<'_>) -> MatchReport {
        MatchReport {
            matched: self.matches(candidate),
            expected: self.delegate.expected().to_string(),
            actual: match candidate {
                Candidate::Bytes(bytes) => Some(self.bytes_as_text(bytes)),
                Candidate::Absent | Candidate::Other(_) => None,
            },
        }
    }
}

impl Matcher for ByteMatcher {
    fn matches(&self, candidate: Candidate<'_>) -> bool {
        match candidate {
            Candidate::Bytes(bytes) => self.delegate.matches(Some(&self.bytes_as_text(bytes))),
            Candidate::Absent => self.delegate.matches(None),
            Candidate::Other(_) => false,
        }
    }

    fn describe_to(&self, description: &mut Description) {
        self.delegate.describe_to(description);
    }

    fn describe_mismatch(&self, candidate: Candidate<'_>, description: &mut Description) {
        match candidate {
            Candidate::Bytes(bytes) => {
                self.delegate
                    .describe_mismatch(Some(&self.bytes_as_text(bytes)), description);
            }
            Candidate::Absent => {
                self.delegate.describe_mismatch(None, description);
            }
            Candidate::Other(value) => {
                description.append_text("was ").append_value(value);
            }
        }
    }
}

/// Matches a byte buffer against a string, ignoring all whitespace in both
/// the buffer and the expected value.
pub fn is_bytes_for(expected: impl Into<String>) -> ByteMatcher {
    ByteMatcher::new(expected, true)
}

/// Matches a byte buffer against a string, including whitespace in the
/// comparison.
pub fn is_bytes_including_spaces_for(expected: impl Into<String>) -> ByteMatcher {
    ByteMatcher::new(expected, false)
}

#[cfg(test)]
mod tests {
    use crate::{Candidate, Description, Matcher};

    use super::{is_bytes_for, is_bytes_including_spaces_for, ByteMatcher};

    #[test]
    fn match_bytes_ignoring_whitespace() {
        let inputs = [
            ("hello world", "hello   world", true),
            ("hello world", "helloworld", true),
            ("hello world", "hello\tworld\n", true),
            ("abc", "a b c", true),
            ("abc", "a\u{00a0}b\u{3000}c", true),
            (" a b c ", "abc", true),
            ("hello world", "hello earth", false),
            ("hello world", "", false),
            ("", "", true),
            ("", " \t\n", true),
        ];

        for (expected, candidate, result) in inputs {
            assert_eq!(
                is_bytes_for(expected).matches(candidate.as_bytes().into()),
                result,
                "failed for expected {expected:?}, candidate {candidate:?}"
            );
        }
    }

    #[test]
    fn match_bytes_including_whitespace() {
        let inputs = [
            ("hello world", "hello world", true),
            ("hello world", "hello   world", false),
            ("hello world", "helloworld", false),
            ("hello world\n", "hello world", false),
            ("", "", true),
        ];

        for (expected, candidate, result) in inputs {
            assert_eq!(
                is_bytes_including_spaces_for(expected).matches(candidate.as_bytes().into()),
                result,
                "failed for expected {expected:?}, candidate {candidate:?}"
            );
        }
    }

    #[test]
    fn substitute_malformed_utf8() {
        assert!(is_bytes_for("a\u{fffd}b").matches(b"a\xffb".into()));
        assert!(is_bytes_including_spaces_for("f\u{fffd}\u{fffd}o").matches(b"f\xff\xfeo".into()));
        assert!(!is_bytes_including_spaces_for("foo").matches(b"f\xff\xfeo".into()));
    }

    #[test]
    fn reject_absent_and_other_candidates() {
        let matcher = is_bytes_for("abc");

        assert!(!matcher.matches(Candidate::Absent));
        assert!(!matcher.matches(Candidate::other(&42)));
        assert!(!matcher.matches(Candidate::other(&"abc")));
        assert!(!matcher.matches(Candidate::other(&vec!["abc"])));
    }

    #[test]
    fn match_bytes_in_charset() {
        let matcher = ByteMatcher::in_charset("utf-16le", "hola", true).unwrap();
        assert!(matcher.matches(b"h\x00o\x00l\x00a\x00".into()));
        assert!(!matcher.matches(b"hola".into()));

        let matcher = ByteMatcher::in_charset("utf-16be", "hi there", true).unwrap();
        assert!(matcher.matches(b"\x00h\x00i\x00t\x00h\x00e\x00r\x00e".into()));

        assert!(ByteMatcher::in_charset("no-such-charset", "hola", true).is_none());

        #[cfg(feature = "full_encoding")]
        {
            let matcher = ByteMatcher::in_charset("iso-8859-1", "áéíóú", false).unwrap();
            assert!(matcher.matches(b"\xe1\xe9\xed\xf3\xfa".into()));
        }
    }

    #[test]
    fn normalize_expected_at_construction() {
        assert_eq!(is_bytes_for(" he llo ").expected(), "hello");
        assert_eq!(
            is_bytes_including_spaces_for(" he llo ").expected(),
            " he llo "
        );
    }

    #[test]
    fn describe_expected_and_mismatch() {
        let matcher = is_bytes_for("hello world");

        let mut description = Description::new();
        matcher.describe_to(&mut description);
        assert_eq!(description.as_str(), "\"helloworld\"");

        let mut mismatch = Description::new();
        matcher.describe_mismatch(b"hello earth".into(), &mut mismatch);
        assert_eq!(mismatch.as_str(), "was \"helloearth\"");

        let mut absent = Description::new();
        matcher.describe_mismatch(Candidate::Absent, &mut absent);
        assert_eq!(absent.as_str(), "was absent");

        let mut other = Description::new();
        matcher.describe_mismatch(Candidate::other(&42), &mut other);
        assert_eq!(other.as_str(), "was 42");
    }

    #[test]
    fn report_comparison() {
        let report = is_bytes_for("hello world").report(b"hello  earth".into());
        assert!(!report.matched);
        assert_eq!(report.expected, "helloworld");
        assert_eq!(report.actual.as_deref(), Some("helloearth"));

        let report = is_bytes_for("hello world").report(Candidate::Absent);
        assert!(!report.matched);
        assert_eq!(report.actual, None);

        let report = is_bytes_including_spaces_for("hi").report(b"hi".into());
        assert!(report.matched);
        assert_eq!(report.actual.as_deref(), Some("hi"));
    }
}
