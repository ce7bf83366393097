//! Display readout for the calculator session.
//!
//! The readout is a write-only projection of the session's output: after
//! every operation it holds exactly that operation's defined output and
//! nothing else.

use std::fmt;

/// Content shown at cold start and after a clear.
pub const CLEAR_READOUT: &str = "0";

/// Literal marker shown after a failed evaluation.
pub const ERROR_MARKER: &str = "Error";

/// The rendered output the user observes.
///
/// # Examples
///
/// ```
/// use calc_rs::core::{CLEAR_READOUT, Readout};
///
/// let readout = Readout::new();
/// assert_eq!(readout.content(), CLEAR_READOUT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    content: String,
}

impl Readout {
    /// Creates a readout showing the cold-start content (`"0"`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: CLEAR_READOUT.to_string(),
        }
    }

    /// Replaces the readout content entirely.
    pub fn show(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
    }

    /// Returns the current readout content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for Readout {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
