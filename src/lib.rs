/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

//! # byte-matcher
//!
//! _byte-matcher_ is a small assertion library for comparing raw byte buffers
//! against expected text. A buffer is decoded into a `String` (UTF-8 by
//! default, with malformed sequences replaced rather than rejected), optionally
//! stripped of all Unicode whitespace, and compared for exact equality against
//! the expected value. On mismatch the matcher renders both sides of the
//! comparison for the test failure report.
//!
//! The typical use case is asserting on generated payloads whose formatting is
//! irrelevant, such as serialized documents or templated output. With
//! whitespace removal enabled, `"hello world"` matches the bytes of
//! `"hello   world"`; with it disabled, only a byte-identical decode matches.
//!
//! Matchers hold only immutable state after construction, so a matcher may be
//! built once and reused across any number of comparisons, from multiple
//! threads if needed.
//!
//! Byte buffers in legacy encodings can be matched as well: decoders for the
//! UTF family are built in, while single and multi byte character sets such as
//! SHIFT_JIS or ISO-8859-2 are provided by the optional dependency
//! [encoding_rs](https://crates.io/crates/encoding_rs) (enabled by default
//! through the `full_encoding` feature).
//!
//! ## Usage Example
//!
//! ```
//!    use byte_matcher::*;
//!
//!    // Whitespace in both the candidate and the expected value is ignored.
//!    assert_that(
//!        "hello   world".as_bytes(),
//!        is_bytes_for("hello world"),
//!    );
//!
//!    // Exact comparison, including whitespace.
//!    assert_that(
//!        "hello world".as_bytes(),
//!        is_bytes_including_spaces_for("hello world"),
//!    );
//!
//!    // Malformed UTF-8 is substituted, never rejected.
//!    assert!(is_bytes_for("a\u{fffd}b").matches(b"a\xffb"[..].into()));
//!
//!    // Candidates in other character sets.
//!    let matcher = ByteMatcher::in_charset("utf-16le", "hola", true).unwrap();
//!    assert!(matcher.matches(b"h\x00o\x00l\x00a\x00"[..].into()));
//! ```

use std::fmt::{self, Write};

pub mod decoders;
pub mod matchers;
pub mod normalize;

pub use matchers::{
    bytes::{is_bytes_for, is_bytes_including_spaces_for, ByteMatcher},
    text::TextEqual,
    MatchReport,
};

/// A candidate value under test.
///
/// Matching is dispatched on the candidate's variant. Only `Bytes` can ever
/// match; `Absent` stands in for a missing value, and `Other` for a value of
/// an unrelated type, which compares as a mismatch rather than an error.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'x> {
    Bytes(&'x [u8]),
    Absent,
    Other(&'x dyn fmt::Debug),
}

impl<'x> Candidate<'x> {
    /// Wraps a value of an unrelated type, which never matches.
    pub fn other(value: &'x dyn fmt::Debug) -> Self {
        Candidate::Other(value)
    }

    fn append_value_to(&self, description: &mut Description) {
        match self {
            Candidate::Bytes(bytes) => description.append_value(bytes),
            Candidate::Absent => description.append_text("absent"),
            Candidate::Other(value) => description.append_value(value),
        };
    }
}

impl<'x> From<&'x [u8]> for Candidate<'x> {
    fn from(bytes: &'x [u8]) -> Self {
        Candidate::Bytes(bytes)
    }
}

impl<'x, const N: usize> From<&'x [u8; N]> for Candidate<'x> {
    fn from(bytes: &'x [u8; N]) -> Self {
        Candidate::Bytes(bytes.as_slice())
    }
}

impl<'x> From<&'x Vec<u8>> for Candidate<'x> {
    fn from(bytes: &'x Vec<u8>) -> Self {
        Candidate::Bytes(bytes.as_slice())
    }
}

impl<'x> From<Option<&'x [u8]>> for Candidate<'x> {
    fn from(bytes: Option<&'x [u8]>) -> Self {
        match bytes {
            Some(bytes) => Candidate::Bytes(bytes),
            None => Candidate::Absent,
        }
    }
}

/// Sink that matchers write human-readable descriptions into.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Description::default()
    }

    /// Appends literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Appends a value rendered with its `Debug` representation, which quotes
    /// and escapes strings.
    pub fn append_value(&mut self, value: &dyn fmt::Debug) -> &mut Self {
        let _ = write!(self.text, "{value:?}");
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A comparison predicate plus the descriptions of the expected value and of
/// a failed comparison, for test failure reporting.
pub trait Matcher {
    /// Evaluates the matcher against a candidate. Never panics; candidates of
    /// unrelated types simply do not match.
    fn matches(&self, candidate: Candidate<'_>) -> bool;

    /// Writes a description of the expected value into the sink.
    fn describe_to(&self, description: &mut Description);

    /// Writes a description of a failed comparison into the sink.
    fn describe_mismatch(&self, candidate: Candidate<'_>, description: &mut Description) {
        description.append_text("was ");
        candidate.append_value_to(description);
    }
}

/// Asserts that a candidate satisfies a matcher, panicking with the expected
/// and actual descriptions otherwise.
pub fn assert_that<'x>(candidate: impl Into<Candidate<'x>>, matcher: impl Matcher) {
    let candidate = candidate.into();
    if !matcher.matches(candidate) {
        let mut expected = Description::new();
        matcher.describe_to(&mut expected);
        let mut mismatch = Description::new();
        matcher.describe_mismatch(candidate, &mut mismatch);
        panic!("\nExpected: {expected}\n     but: {mismatch}");
    }
}
