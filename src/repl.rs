//! Interactive calculator loop.
//!
//! The REPL is the trigger source for the calculator session: each input
//! line maps onto one of the three session operations, and the readout
//! is printed after every operation.
//!
//! Line protocol:
//!
//! - `=` alone evaluates the accumulated buffer;
//! - a line ending in `=` appends the prefix, then evaluates;
//! - `clear` (or `c`) resets the session;
//! - `quit`, `exit`, or `q` leaves the loop;
//! - an empty line is ignored;
//! - anything else is appended to the buffer verbatim.

use crate::core::Session;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Prompt written before each input line.
const PROMPT: &str = "calc> ";

/// Runs the interactive loop until the input ends or the user quits.
///
/// Generic over reader and writer so the loop can be driven by scripted
/// input in tests.
///
/// # Errors
///
/// Returns an error only for reader/writer I/O failures; evaluation
/// failures stay inside the session and surface as the `"Error"`
/// readout.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    verbose: bool,
) -> Result<()> {
    writeln!(
        output,
        "calc-rs interactive session ({} evaluator)",
        session.evaluator_name()
    )?;
    writeln!(
        output,
        "Type an expression to accumulate, '=' to evaluate, 'clear' to reset, 'quit' to leave."
    )?;
    writeln!(output, "{}", session.readout())?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" | "q" => break,
            "clear" | "c" => {
                session.clear();
                writeln!(output, "{}", session.readout())?;
            }
            "=" => {
                evaluate_and_report(session, &mut output, verbose)?;
            }
            text => {
                if let Some(prefix) = text.strip_suffix('=') {
                    let prefix = prefix.trim_end();
                    if !prefix.is_empty() {
                        session.append(prefix);
                    }
                    evaluate_and_report(session, &mut output, verbose)?;
                } else {
                    session.append(text);
                    writeln!(output, "{}", session.readout())?;
                }
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    Ok(())
}

fn evaluate_and_report<W: Write>(
    session: &mut Session,
    output: &mut W,
    verbose: bool,
) -> Result<()> {
    session.evaluate();
    writeln!(output, "{}", session.readout())?;
    if verbose && let Some(err) = session.last_error() {
        writeln!(output, "  ({err})")?;
    }
    Ok(())
}
