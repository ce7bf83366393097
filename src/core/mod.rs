//! Core domain models for calc-rs.
//!
//! This module contains the calculator session and its display readout.
//! These are pure domain models with no I/O dependencies.

pub mod readout;
pub mod session;

pub use readout::{CLEAR_READOUT, ERROR_MARKER, Readout};
pub use session::{Session, SessionState};
