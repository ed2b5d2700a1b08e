//! Multi-tap decoder - turns a key-press sequence into text.
//!
//! Decoding is a single left-to-right scan. Consecutive presses of one digit
//! accumulate into an active key; anything that ends a letter (another digit,
//! a pause, a backspace or the terminator) first flushes the active key into
//! the output. Flushing always happens before the press acts, so a backspace
//! deletes a whole decoded letter, never a partial keystroke.

use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::keypad::letter_from_key;
use crate::types::{Press, SEND};

/// Digit being cycled and how many times it has been pressed (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveKey {
    key: char,
    presses: usize,
}

impl ActiveKey {
    fn new(key: char) -> Self {
        Self { key, presses: 1 }
    }

    fn pressed_again(self) -> Self {
        Self {
            presses: self.presses + 1,
            ..self
        }
    }
}

/// Per-call scan state. Nothing here outlives one decode.
#[derive(Debug)]
struct DecodeState<'a> {
    active: Option<ActiveKey>,
    out: &'a mut String,
}

impl<'a> DecodeState<'a> {
    fn new(out: &'a mut String) -> Self {
        Self { active: None, out }
    }

    fn flush(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        if let Some(letter) = letter_from_key(active.key, active.presses) {
            trace!(key = %active.key, presses = active.presses, %letter, "flush");
            self.out.push(letter);
        }
    }

    /// Apply one press. Returns `false` once the message has been sent.
    fn apply(&mut self, press: Press) -> bool {
        match press {
            Press::Send => {
                self.flush();
                return false;
            }
            Press::Backspace => {
                self.flush();
                let removed = self.out.pop();
                trace!(?removed, "backspace");
            }
            Press::Pause => self.flush(),
            Press::Key(key) => match self.active {
                Some(active) if active.key == key => {
                    self.active = Some(active.pressed_again());
                }
                _ => {
                    self.flush();
                    self.active = Some(ActiveKey::new(key));
                }
            },
        }
        true
    }
}

fn validate(input: &str) -> Result<(), DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if !input.ends_with(SEND) {
        return Err(DecodeError::MissingTerminator);
    }
    Ok(())
}

/// Decode a key-press sequence into a caller-owned buffer.
///
/// `out` is cleared first and reused, so repeated calls with a warm buffer do
/// not allocate. On error `out` is left empty.
///
/// Characters other than `2`-`9`, space, `*` and `#` are skipped without
/// touching the scan state. Scanning stops at the first `#`; anything after it
/// is never examined.
pub fn process_into(input: &str, out: &mut String) -> Result<(), DecodeError> {
    out.clear();
    validate(input).inspect_err(|err| debug!(code = err.code(), "rejected input"))?;

    let mut state = DecodeState::new(out);
    for c in input.chars() {
        let Some(press) = Press::from_char(c) else {
            continue;
        };
        if !state.apply(press) {
            break;
        }
    }

    debug!(input_len = input.len(), output_len = out.len(), "decoded");
    Ok(())
}

/// Decode a key-press sequence into the message the user typed.
///
/// # Examples
///
/// ```
/// use old_phone_pad_core::{process, DecodeError};
///
/// assert_eq!(process("33#").unwrap(), "E");
/// assert_eq!(process("227*#").unwrap(), "B");
/// assert_eq!(process("4433555 555666#").unwrap(), "HELLO");
/// assert_eq!(process("22"), Err(DecodeError::MissingTerminator));
/// ```
pub fn process(input: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(input.len());
    process_into(input, &mut out)?;
    Ok(out)
}

/// [`process`] for input that may be absent. `None` is rejected like `""`.
pub fn process_optional(input: Option<&str>) -> Result<String, DecodeError> {
    match input {
        Some(input) => process(input),
        None => Err(DecodeError::EmptyInput),
    }
}
