//! Calculator session: the input buffer and its state machine.
//!
//! A session owns the accumulated input text and the display readout,
//! and transitions between accumulating and settled states in response
//! to the three external triggers: token press, evaluate press, and
//! clear press.

use crate::core::readout::{CLEAR_READOUT, ERROR_MARKER, Readout};
use crate::error::EvalError;
use crate::eval::{Evaluator, default_evaluator, format_value};
use std::fmt;

/// Observable session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The readout mirrors the input buffer as tokens accumulate.
    Accumulating,

    /// The readout shows a computed result or the error marker.
    Settled,
}

/// A calculator session.
///
/// Holds the input buffer as text, renders it to the readout, and
/// evaluates it on demand with the configured [`Evaluator`]. Evaluation
/// failures never propagate: they settle the session on the `"Error"`
/// marker with an emptied buffer, and the failure kind stays inspectable
/// via [`Session::last_error`].
///
/// # Examples
///
/// ```
/// use calc_rs::core::Session;
///
/// let mut session = Session::new();
/// session.append("2");
/// session.append("+");
/// session.append("2");
/// session.evaluate();
/// assert_eq!(session.readout(), "4");
/// ```
pub struct Session {
    buffer: String,
    readout: Readout,
    state: SessionState,
    last_error: Option<EvalError>,
    evaluator: Box<dyn Evaluator>,
}

impl Session {
    /// Creates a session with the default evaluation strategy.
    ///
    /// Initial state: accumulating, empty buffer, readout `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(default_evaluator()))
    }

    /// Creates a session with a specific evaluation strategy.
    #[must_use]
    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            buffer: String::new(),
            readout: Readout::new(),
            state: SessionState::Accumulating,
            last_error: None,
            evaluator,
        }
    }

    /// Appends a token onto the input buffer.
    ///
    /// The token is concatenated verbatim: no validation, no length
    /// bound. The readout is set to the new buffer text. Appending after
    /// a settled evaluation continues from the prior result, which is
    /// what makes chained arithmetic work.
    pub fn append(&mut self, token: &str) {
        self.buffer.push_str(token);
        self.readout.show(&self.buffer);
        self.state = SessionState::Accumulating;
        self.last_error = None;
    }

    /// Evaluates the input buffer as an arithmetic expression.
    ///
    /// On success the readout and the buffer are both set to the
    /// formatted result. On any failure the readout shows the `"Error"`
    /// marker and the buffer is emptied, so the next append starts
    /// fresh. The session settles either way.
    pub fn evaluate(&mut self) {
        match self.evaluator.evaluate(&self.buffer) {
            Ok(value) => {
                let text = format_value(value);
                self.readout.show(&text);
                self.buffer = text;
                self.last_error = None;
            }
            Err(err) => {
                self.readout.show(ERROR_MARKER);
                self.buffer.clear();
                self.last_error = Some(err);
            }
        }
        self.state = SessionState::Settled;
    }

    /// Resets the session: empty buffer, readout `"0"`.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.readout.show(CLEAR_READOUT);
        self.state = SessionState::Accumulating;
        self.last_error = None;
    }

    /// Returns the current input buffer text.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the current readout content.
    #[must_use]
    pub fn readout(&self) -> &str {
        self.readout.content()
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the failure kind of the last evaluation, if it failed.
    ///
    /// Cleared by the next `append`, `clear`, or successful `evaluate`.
    #[must_use]
    pub const fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Returns the name of the configured evaluation strategy.
    #[must_use]
    pub fn evaluator_name(&self) -> &'static str {
        self.evaluator.name()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("buffer", &self.buffer)
            .field("readout", &self.readout)
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .field("evaluator", &self.evaluator.name())
            .finish()
    }
}
