/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::borrow::Cow;

/// Removes every Unicode whitespace character, the `White_Space` property
/// rather than just ASCII whitespace. Borrows the input when it contains no
/// whitespace.
pub fn remove_whitespace(text: &str) -> Cow<'_, str> {
    if text.contains(char::is_whitespace) {
        text.chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .into()
    } else {
        text.into()
    }
}
