//! Keypad mapping - the fixed digit to letters table and the cycling rule.
//!
//! The table is a `'static` constant from the types crate and is never
//! mutated, so lookups are safe from any thread without locking.

use crate::types::{letters_for, KEYPAD};

/// Read-only view over the keypad table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    entries: &'static [(char, &'static str)],
}

static KEY_MAPPING: KeyMapping = KeyMapping { entries: &KEYPAD };

/// The fixed digit to letters table (8 entries, keys `2`-`9`).
///
/// # Examples
///
/// ```
/// use old_phone_pad_core::key_mapping;
///
/// let mapping = key_mapping();
/// assert_eq!(mapping.len(), 8);
/// assert_eq!(mapping.get('7'), Some("PQRS"));
/// assert_eq!(mapping.get('1'), None);
/// ```
pub fn key_mapping() -> &'static KeyMapping {
    &KEY_MAPPING
}

impl KeyMapping {
    /// Letters assigned to `key`, in cycling order.
    pub fn get(&self, key: char) -> Option<&'static str> {
        letters_for(key)
    }

    pub fn contains_key(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = char> + 'static {
        self.entries.iter().map(|(digit, _)| *digit)
    }

    /// `(key, letters)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + 'static {
        self.entries.iter().copied()
    }

    /// Reverse lookup: the key carrying `letter` and how many presses reach it.
    pub fn key_for_letter(&self, letter: char) -> Option<(char, usize)> {
        self.entries.iter().find_map(|(digit, letters)| {
            letters
                .chars()
                .position(|c| c == letter)
                .map(|index| (*digit, index + 1))
        })
    }
}

/// Letter reached after `press_count` consecutive presses of `key`.
///
/// Presses cycle: one past the last letter wraps back to the first. Returns
/// `None` for keys without letters and for a press count of zero.
///
/// # Examples
///
/// ```
/// use old_phone_pad_core::letter_from_key;
///
/// assert_eq!(letter_from_key('2', 1), Some('A'));
/// assert_eq!(letter_from_key('2', 3), Some('C'));
/// assert_eq!(letter_from_key('2', 4), Some('A'));
/// assert_eq!(letter_from_key('1', 1), None);
/// ```
pub fn letter_from_key(key: char, press_count: usize) -> Option<char> {
    let letters = key_mapping().get(key)?;
    let index = press_count.checked_sub(1)? % letters.len();
    letters.chars().nth(index)
}
