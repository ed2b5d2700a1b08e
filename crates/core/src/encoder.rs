//! Press sequence encoder - the inverse of the decoder.
//!
//! Produces the shortest canonical key-press sequence for a message: each
//! letter is typed with the fewest presses, and a pause is inserted only when
//! two consecutive letters share a key.

use crate::keypad::key_mapping;
use crate::types::{PAUSE, SEND};

/// Encode uppercase `A`-`Z` text as a `#`-terminated press sequence.
///
/// Returns `None` if the text contains anything the keypad cannot type
/// (lowercase, digits, spaces, punctuation).
///
/// # Examples
///
/// ```
/// use old_phone_pad_core::{encode, process};
///
/// let presses = encode("HELLO").unwrap();
/// assert_eq!(presses, "4433555 555666#");
/// assert_eq!(process(&presses).unwrap(), "HELLO");
/// assert_eq!(encode("hello"), None);
/// ```
pub fn encode(text: &str) -> Option<String> {
    let mapping = key_mapping();
    let mut out = String::with_capacity(text.len() * 2 + 1);
    let mut last_key = None;

    for letter in text.chars() {
        let (key, presses) = mapping.key_for_letter(letter)?;
        if last_key == Some(key) {
            out.push(PAUSE);
        }
        out.extend(std::iter::repeat(key).take(presses));
        last_key = Some(key);
    }

    out.push(SEND);
    Some(out)
}
