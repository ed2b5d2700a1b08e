//! Core decoder module - pure, deterministic, and testable
//!
//! This module turns key-press sequences from a multi-tap phone keypad into
//! text. It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same input always produces the same output
//! - **Stateless**: Every call starts from a fresh scan state
//! - **Thread-safe**: The only shared data is the immutable keypad table
//!
//! # Module Structure
//!
//! - [`keypad`]: the fixed digit to letters table and the cycling rule
//! - [`decoder`]: the single-pass decoding state machine
//! - [`encoder`]: canonical press sequences for a message (inverse direction)
//! - [`error`]: invalid-argument errors for rejected input
//!
//! # Decoding Rules
//!
//! - **Cycling**: `n` presses of a key give letter `(n - 1) mod len`
//! - **Pause** (space): ends the current letter, so `2 2#` is `AA`
//! - **Backspace** (`*`): ends the current letter, then removes the last letter
//! - **Send** (`#`): ends the current letter and the message; input must end with it
//! - **Anything else**: ignored
//!
//! # Example
//!
//! ```
//! use old_phone_pad_core::{key_mapping, letter_from_key, process};
//!
//! assert_eq!(process("8 88777444666*664#").unwrap(), "TURING");
//! assert_eq!(letter_from_key('7', 4), Some('S'));
//! assert_eq!(key_mapping().get('9'), Some("WXYZ"));
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod keypad;

pub use old_phone_pad_types as types;

// Re-export commonly used items for convenience
pub use decoder::{process, process_into, process_optional};
pub use encoder::encode;
pub use error::DecodeError;
pub use keypad::{key_mapping, letter_from_key, KeyMapping};
