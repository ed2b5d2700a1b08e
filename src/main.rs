//! Line session runner (default binary).
//!
//! Reads one key-press sequence per line from stdin and prints the decoded
//! message. An empty line, `quit` or end of input ends the session; a
//! sequence that cannot be decoded ends it with an error.

use std::io::{self, IsTerminal};

use anyhow::Result;

use old_phone_pad::input::SessionConfig;
use old_phone_pad::logging::init_tracing;
use old_phone_pad::session::run_session;

fn main() -> Result<()> {
    init_tracing();

    let config = SessionConfig::from_env();
    let stdout = io::stdout();
    let color = config.use_color(stdout.is_terminal());

    run_session(io::stdin().lock(), stdout.lock(), config, color)?;
    Ok(())
}
