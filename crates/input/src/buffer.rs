//! Bounded press buffer for the live keypad.
//!
//! Backed by a fixed-capacity `ArrayVec`, so pushing presses and rendering the
//! sequence into a warm `String` never allocate.

use arrayvec::ArrayVec;

use crate::core::{encode, process};
use crate::types::{Press, MAX_PRESSES, SEND};

/// Raw presses typed since the last send, oldest first.
///
/// The terminator is never stored: the buffer holds the message being typed,
/// and [`PressBuffer::write_sequence`] appends `#` when handing it to the
/// decoder.
#[derive(Debug, Clone, Default)]
pub struct PressBuffer {
    presses: ArrayVec<char, MAX_PRESSES>,
}

impl PressBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns `false` if it was not stored: the buffer is
    /// full, or the press is `Send`.
    pub fn push(&mut self, press: Press) -> bool {
        if press == Press::Send {
            return false;
        }
        self.presses.try_push(press.as_char()).is_ok()
    }

    /// Record a backspace, even when the buffer is full.
    ///
    /// With room left this is a plain `*` press. A full buffer is instead
    /// rewritten to the shortest presses for the decoded message minus its
    /// last letter, which decodes the same as appending `*` and frees space.
    /// Returns `false` only if the buffer could not be rewritten.
    pub fn backspace(&mut self) -> bool {
        if self.push(Press::Backspace) {
            return true;
        }

        let Ok(mut message) = process(&self.to_sequence()) else {
            return false;
        };
        message.pop();
        let Some(sequence) = encode(&message) else {
            return false;
        };
        let compacted = sequence.trim_end_matches(SEND);
        if compacted.chars().count() > MAX_PRESSES {
            return false;
        }

        self.presses.clear();
        self.presses.extend(compacted.chars());
        true
    }

    pub fn clear(&mut self) {
        self.presses.clear();
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.presses.is_full()
    }

    pub fn remaining(&self) -> usize {
        self.presses.remaining_capacity()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.presses
    }

    /// Write the stored presses followed by `#` into `out` (cleared first).
    pub fn write_sequence(&self, out: &mut String) {
        out.clear();
        out.extend(self.presses.iter());
        out.push(SEND);
    }

    /// The stored presses as a `#`-terminated sequence.
    pub fn to_sequence(&self) -> String {
        let mut out = String::with_capacity(self.presses.len() + 1);
        self.write_sequence(&mut out);
        out
    }
}
