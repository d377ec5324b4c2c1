/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use crate::Description;

/// Exact string equality with expected/actual descriptions, the comparison
/// that byte matchers delegate to once a candidate is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEqual {
    expected: String,
}

impl TextEqual {
    pub fn new(expected: impl Into<String>) -> Self {
        TextEqual {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Compares a candidate for exact equality. An absent candidate never
    /// equals a present expected value.
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|text| text == self.expected)
    }

    pub fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    pub fn describe_mismatch(&self, candidate: Option<&str>, description: &mut Description) {
        description.append_text("was ");
        match candidate {
            Some(text) => description.append_value(&text),
            None => description.append_text("absent"),
        };
    }
}
