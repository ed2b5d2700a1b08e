//! Line session: the read-decode-print loop behind the `old-phone-pad` binary.
//!
//! Generic over the reader and writer so tests can drive it in memory.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::process;
use crate::input::{parse_line, SessionCommand, SessionConfig};
use crate::term::{styled, LineStyle};

const BANNER: &str = "------ Old Phone Pad -------";
const USAGE: &str = "Enter key sequences ending with # (or `quit` to exit)";
const PROMPT: &str = "Enter number: ";
const SEPARATOR: &str = "------------------";
const FAREWELL: &str = "Bye Bye!";

/// What happened during a session that ended normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Lines successfully decoded.
    pub decoded: usize,
    /// Whether the session ended because input ran out.
    pub reached_eof: bool,
}

/// Run the line session until `quit`, an empty line or end of input.
///
/// A line that fails to decode ends the session with an error; nothing more
/// is read after it.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: SessionConfig,
    color: bool,
) -> Result<SessionSummary> {
    let paint = |text: &str, line_style: LineStyle| -> String {
        if color {
            styled(text, line_style).to_string()
        } else {
            text.to_string()
        }
    };

    if !config.quiet {
        writeln!(out, "{}", paint(BANNER, LineStyle::Title))?;
        writeln!(out, "{USAGE}")?;
        writeln!(out)?;
    }

    let mut summary = SessionSummary::default();
    let mut line = String::new();

    loop {
        if !config.quiet {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read a line of input")?;
        if read == 0 {
            debug!("end of input");
            summary.reached_eof = true;
            if !config.quiet {
                writeln!(out)?;
            }
            break;
        }

        let sequence = match parse_line(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Decode(sequence) => sequence,
        };

        let message =
            process(&sequence).with_context(|| format!("could not decode {sequence:?}"))?;
        summary.decoded += 1;
        info!(presses = sequence.len(), letters = message.len(), "decoded line");

        if config.quiet {
            writeln!(out, "{message}")?;
        } else {
            writeln!(out, "{} {message}", paint("Output:", LineStyle::Accent))?;
            writeln!(out, "{}", paint(SEPARATOR, LineStyle::Dim))?;
        }
    }

    if !config.quiet {
        writeln!(out, "{FAREWELL}")?;
    }
    out.flush()?;
    Ok(summary)
}
