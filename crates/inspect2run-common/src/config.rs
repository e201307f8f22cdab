//! Options controlling how a command line is rendered.

use serde::{Deserialize, Serialize};

/// Rendering options passed to the translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Break the command after each flag group with a trailing backslash.
    pub multiline: bool,
}

impl TranslateOptions {
    /// Creates options with line-continuation output set as given.
    #[must_use]
    pub const fn new(multiline: bool) -> Self {
        Self { multiline }
    }

    /// Returns the separator appended after each flag group.
    #[must_use]
    pub const fn group_ending(&self) -> &'static str {
        if self.multiline {
            crate::constants::LINE_CONTINUATION
        } else {
            ""
        }
    }
}
