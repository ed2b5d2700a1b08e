//! TerminalRenderer: flushes keypad lines to a real terminal.
//!
//! The keypad screen is a couple dozen short lines, so every draw is a full
//! redraw into a reused byte buffer followed by a single write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        style, Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor, Stylize,
        StyledContent,
    },
    terminal, QueueableCommand,
};

use crate::keypad_view::{Line, LineStyle};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole screen.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-screen redraw of `lines` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(lines: &[Line], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for (y, line) in lines.iter().enumerate() {
        let Ok(y) = u16::try_from(y) else {
            break;
        };
        out.queue(cursor::MoveTo(0, y))?;
        apply_style_into(out, line.style)?;
        out.queue(Print(&line.text))?;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }

    Ok(())
}

/// Style `text` with the palette used by the keypad screen.
///
/// The line session uses this for its one-line outputs.
pub fn styled(text: &str, line_style: LineStyle) -> StyledContent<&str> {
    let content = style(text);
    let content = match line_color(line_style) {
        Some(color) => content.with(color),
        None => content,
    };
    match line_style {
        LineStyle::Title | LineStyle::Accent => content.bold(),
        LineStyle::Dim => content.dim(),
        _ => content,
    }
}

fn apply_style_into(out: &mut Vec<u8>, line_style: LineStyle) -> Result<()> {
    if let Some(color) = line_color(line_style) {
        out.queue(SetForegroundColor(color))?;
    }
    match line_style {
        LineStyle::Title | LineStyle::Accent => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineStyle::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        LineStyle::Plain | LineStyle::Key | LineStyle::Warning => {}
    }
    Ok(())
}

fn line_color(line_style: LineStyle) -> Option<Color> {
    match line_style {
        LineStyle::Plain | LineStyle::Dim => None,
        LineStyle::Title => Some(Color::Cyan),
        LineStyle::Key => Some(Color::White),
        LineStyle::Accent => Some(Color::Green),
        LineStyle::Warning => Some(Color::Yellow),
    }
}
