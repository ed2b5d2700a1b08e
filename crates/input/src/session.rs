//! Line session glue: classifying input lines and reading configuration.

/// Literal line that ends the session.
pub const QUIT_WORD: &str = "quit";

/// What the line session should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// End the session.
    Quit,
    /// Pass the line verbatim to the decoder.
    Decode(String),
}

/// Classify one line read from the terminal.
///
/// The trailing line ending is stripped; nothing else is. An empty line or
/// `quit` ends the session.
///
/// # Examples
///
/// ```
/// use old_phone_pad_input::{parse_line, SessionCommand};
///
/// assert_eq!(parse_line("quit\n"), SessionCommand::Quit);
/// assert_eq!(parse_line("\r\n"), SessionCommand::Quit);
/// assert_eq!(parse_line("33#\n"), SessionCommand::Decode("33#".to_string()));
/// ```
pub fn parse_line(line: &str) -> SessionCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || line == QUIT_WORD {
        SessionCommand::Quit
    } else {
        SessionCommand::Decode(line.to_string())
    }
}

/// Line session configuration, read from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Suppress banner, prompts and separators (`OLD_PHONE_PAD_QUIET`).
    pub quiet: bool,
    /// Never style output (`NO_COLOR`, `OLD_PHONE_PAD_NO_COLOR`).
    pub no_color: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let quiet = lookup("OLD_PHONE_PAD_QUIET")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        // NO_COLOR convention: any non-empty value disables color.
        let no_color = lookup("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false)
            || lookup("OLD_PHONE_PAD_NO_COLOR")
                .map(|v| is_truthy(&v))
                .unwrap_or(false);

        Self { quiet, no_color }
    }

    /// Whether output should be styled, given whether stdout is a terminal.
    pub fn use_color(&self, stdout_is_tty: bool) -> bool {
        stdout_is_tty && !self.no_color
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn quit_on_empty_or_quit_word() {
        assert_eq!(parse_line(""), SessionCommand::Quit);
        assert_eq!(parse_line("\n"), SessionCommand::Quit);
        assert_eq!(parse_line("quit"), SessionCommand::Quit);
        assert_eq!(parse_line("quit\r\n"), SessionCommand::Quit);
    }

    #[test]
    fn other_lines_pass_verbatim() {
        assert_eq!(
            parse_line("  2 2#\n"),
            SessionCommand::Decode("  2 2#".to_string())
        );
        assert_eq!(parse_line("QUIT"), SessionCommand::Decode("QUIT".to_string()));
        assert_eq!(parse_line(" quit"), SessionCommand::Decode(" quit".to_string()));
        assert_eq!(parse_line("22"), SessionCommand::Decode("22".to_string()));
    }

    #[test]
    fn config_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SessionConfig::default());
        assert!(config.use_color(true));
        assert!(!config.use_color(false));
    }

    #[test]
    fn config_reads_flags() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("OLD_PHONE_PAD_QUIET", "TRUE"),
            ("OLD_PHONE_PAD_NO_COLOR", "1"),
        ]));
        assert!(config.quiet);
        assert!(config.no_color);
        assert!(!config.use_color(true));

        let config = SessionConfig::from_lookup(lookup(&[("OLD_PHONE_PAD_QUIET", "0")]));
        assert!(!config.quiet);
    }

    #[test]
    fn no_color_convention() {
        assert!(SessionConfig::from_lookup(lookup(&[("NO_COLOR", "yes")])).no_color);
        assert!(!SessionConfig::from_lookup(lookup(&[("NO_COLOR", "")])).no_color);
    }
}
