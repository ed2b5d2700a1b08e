//! Terminal keypad module.
//!
//! A small presentation layer for the live keypad and the line session.
//! The view is pure data (lines of text with a style tag) so it can be tested
//! without a terminal; the renderer flushes those lines through `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Redraw the whole (small) screen on every press
//! - Share one palette between the live keypad and the line session

pub mod keypad_view;
pub mod renderer;

pub use old_phone_pad_core as core;
pub use old_phone_pad_types as types;

pub use keypad_view::{KeypadScreen, KeypadView, Line, LineStyle, SentHistory};
pub use renderer::{encode_lines_into, styled, TerminalRenderer};
