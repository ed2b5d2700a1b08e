//! Input module (decoder-facing).
//!
//! This module turns raw input into keypad presses and session commands. It
//! only reaches into the decoder crate to compact a full press buffer:
//!
//! - [`map`]: `crossterm` key events to [`crate::types::Press`] for the live keypad
//! - [`buffer`]: bounded, allocation-free press buffer
//! - [`session`]: line classification and environment configuration for the
//!   line session

pub mod buffer;
pub mod map;
pub mod session;

pub use old_phone_pad_core as core;
pub use old_phone_pad_types as types;

pub use buffer::PressBuffer;
pub use map::{handle_key_event, should_quit};
pub use session::{parse_line, SessionCommand, SessionConfig, QUIT_WORD};
