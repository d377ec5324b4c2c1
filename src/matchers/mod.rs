/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

pub mod bytes;
pub mod text;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one comparison, with both sides rendered as decoded and
/// normalized text. `actual` is absent when the candidate was not a byte
/// buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchReport {
    pub matched: bool,
    pub expected: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub actual: Option<String>,
}
