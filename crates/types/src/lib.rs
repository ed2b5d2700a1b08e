//! Core types module - shared keypad data and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (decoder, terminal keypad, line session).
//!
//! # Keypad Layout
//!
//! The classic multi-tap layout. Pressing a key repeatedly cycles through its
//! letters; keys `0` and `1` carry no letters.
//!
//! | Key | Letters |
//! |-----|---------|
//! | `2` | ABC |
//! | `3` | DEF |
//! | `4` | GHI |
//! | `5` | JKL |
//! | `6` | MNO |
//! | `7` | PQRS |
//! | `8` | TUV |
//! | `9` | WXYZ |
//!
//! # Control Characters
//!
//! | Constant | Char | Meaning |
//! |----------|------|---------|
//! | `SEND` | `#` | Terminates the message |
//! | `BACKSPACE` | `*` | Deletes the last decoded letter |
//! | `PAUSE` | ` ` | Separates two letters on the same key |
//!
//! # Examples
//!
//! ```
//! use old_phone_pad_types::{Press, KEYPAD, SEND};
//!
//! // Classify raw characters
//! assert_eq!(Press::from_char('7'), Some(Press::Key('7')));
//! assert_eq!(Press::from_char(SEND), Some(Press::Send));
//! assert_eq!(Press::from_char('1'), None);
//!
//! // Layout
//! assert_eq!(KEYPAD.len(), 8);
//! assert_eq!(KEYPAD[5], ('7', "PQRS"));
//! ```

/// Terminator: ends the message. Scanning stops at its first occurrence.
pub const SEND: char = '#';

/// Backspace: removes the most recently decoded letter.
pub const BACKSPACE: char = '*';

/// Pause: forces the next press to start a new letter.
pub const PAUSE: char = ' ';

/// Fixed digit to letters table, ordered by key.
pub const KEYPAD: [(char, &str); 8] = [
    ('2', "ABC"),
    ('3', "DEF"),
    ('4', "GHI"),
    ('5', "JKL"),
    ('6', "MNO"),
    ('7', "PQRS"),
    ('8', "TUV"),
    ('9', "WXYZ"),
];

/// Press buffer capacity for the live keypad (one classic SMS).
pub const MAX_PRESSES: usize = 160;

/// Look up the letters assigned to a digit key.
///
/// # Examples
///
/// ```
/// use old_phone_pad_types::letters_for;
///
/// assert_eq!(letters_for('2'), Some("ABC"));
/// assert_eq!(letters_for('0'), None);
/// ```
pub fn letters_for(key: char) -> Option<&'static str> {
    KEYPAD
        .iter()
        .find(|(digit, _)| *digit == key)
        .map(|(_, letters)| *letters)
}

/// Check whether a character is one of the lettered keys `2`-`9`.
pub fn is_keypad_digit(c: char) -> bool {
    letters_for(c).is_some()
}

/// A single classified key press
///
/// - **Key**: one of the lettered digits `2`-`9`
/// - **Pause**: space, ends the current letter
/// - **Backspace**: `*`, ends the current letter then deletes one letter
/// - **Send**: `#`, ends the current letter and the message
///
/// Characters with no classification (`0`, `1`, letters, punctuation) are
/// represented by `None` at the call site and are ignored by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Press {
    Key(char),
    Pause,
    Backspace,
    Send,
}

impl Press {
    /// Classify one input character
    ///
    /// # Examples
    ///
    /// ```
    /// use old_phone_pad_types::Press;
    ///
    /// assert_eq!(Press::from_char(' '), Some(Press::Pause));
    /// assert_eq!(Press::from_char('*'), Some(Press::Backspace));
    /// assert_eq!(Press::from_char('9'), Some(Press::Key('9')));
    /// assert_eq!(Press::from_char('a'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            SEND => Some(Press::Send),
            BACKSPACE => Some(Press::Backspace),
            PAUSE => Some(Press::Pause),
            c if is_keypad_digit(c) => Some(Press::Key(c)),
            _ => None,
        }
    }

    /// Convert back to the character that encodes this press
    pub fn as_char(&self) -> char {
        match self {
            Press::Key(c) => *c,
            Press::Pause => PAUSE,
            Press::Backspace => BACKSPACE,
            Press::Send => SEND,
        }
    }
}
