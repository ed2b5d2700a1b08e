//! KeypadView: maps the live keypad state into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::VecDeque;

use crate::core::{encode, key_mapping};
use crate::types::{BACKSPACE, PAUSE, SEND};

/// Visual role of a line; the renderer picks colors from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    Title,
    Key,
    Accent,
    Dim,
    Warning,
}

/// One rendered row of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new(), LineStyle::Plain)
    }
}

/// Everything the keypad screen shows, borrowed from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadScreen<'a> {
    /// Raw presses since the last send.
    pub presses: &'a [char],
    /// Decoded preview of `presses`.
    pub preview: &'a str,
    /// Sent messages, oldest first.
    pub sent: &'a [String],
    /// One-off message such as "buffer full".
    pub notice: Option<&'a str>,
}

/// Sent messages kept for display, oldest first, never more than `cap`.
#[derive(Debug, Clone, Default)]
pub struct SentHistory {
    messages: VecDeque<String>,
    cap: usize,
}

impl SentHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Record a sent message, dropping the oldest once over capacity.
    pub fn push(&mut self, message: String) {
        if self.cap == 0 {
            return;
        }
        if self.messages.len() == self.cap {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The kept messages as one slice, for [`KeypadScreen::sent`].
    pub fn as_slice(&mut self) -> &[String] {
        self.messages.make_contiguous()
    }
}

/// Layout settings for the keypad screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadView {
    /// How many of the most recent sent messages to show.
    history_rows: usize,
    /// Word whose press sequence is shown as a usage hint.
    hint_word: &'static str,
}

impl Default for KeypadView {
    fn default() -> Self {
        Self {
            history_rows: 5,
            hint_word: "HELLO",
        }
    }
}

// Shown in place of a pause so the press line stays readable.
const PAUSE_GLYPH: char = '_';

impl KeypadView {
    pub fn new(history_rows: usize) -> Self {
        Self {
            history_rows,
            ..Self::default()
        }
    }

    pub fn history_rows(&self) -> usize {
        self.history_rows
    }

    /// An empty [`SentHistory`] holding exactly what this view can show.
    pub fn history(&self) -> SentHistory {
        SentHistory::new(self.history_rows)
    }

    pub fn with_hint(mut self, hint_word: &'static str) -> Self {
        self.hint_word = hint_word;
        self
    }

    pub fn render(&self, screen: &KeypadScreen<'_>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(16 + self.history_rows);

        lines.push(Line::new("------ Old Phone Pad -------", LineStyle::Title));
        lines.push(Line::blank());
        for row in keypad_rows() {
            lines.push(Line::new(row, LineStyle::Key));
        }
        lines.push(Line::blank());

        let presses: String = screen
            .presses
            .iter()
            .map(|&c| if c == PAUSE { PAUSE_GLYPH } else { c })
            .collect();
        lines.push(Line::new(format!("Presses: {presses}"), LineStyle::Plain));
        lines.push(Line::new(
            format!("Preview: {}", screen.preview),
            LineStyle::Accent,
        ));
        if let Some(notice) = screen.notice {
            lines.push(Line::new(notice, LineStyle::Warning));
        }

        lines.push(Line::blank());
        lines.push(Line::new("Sent:", LineStyle::Plain));
        let skip = screen.sent.len().saturating_sub(self.history_rows);
        for message in &screen.sent[skip..] {
            lines.push(Line::new(format!("  {message}"), LineStyle::Accent));
        }

        lines.push(Line::blank());
        if let Some(sequence) = encode(self.hint_word) {
            lines.push(Line::new(
                format!("e.g. {} = {}", self.hint_word, sequence),
                LineStyle::Dim,
            ));
        }
        lines.push(Line::new(
            format!(
                "2-9 type | space pause | {BACKSPACE} or Backspace delete | {SEND} or Enter send | Esc quit"
            ),
            LineStyle::Dim,
        ));

        lines
    }
}

/// The 4x3 phone grid, one string per row.
fn keypad_rows() -> [String; 4] {
    let mapping = key_mapping();
    let cell = |key: char| format!("[{key} {:<4}]", mapping.get(key).unwrap_or(""));
    let row = |keys: [char; 3]| {
        keys.iter()
            .map(|&k| cell(k))
            .collect::<Vec<_>>()
            .join(" ")
    };
    [
        row(['1', '2', '3']),
        row(['4', '5', '6']),
        row(['7', '8', '9']),
        row([BACKSPACE, '0', SEND]),
    ]
}
