//! Old Phone Pad (workspace facade crate).
//!
//! This package exposes the `old_phone_pad::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`, and
//! holds the two binaries: the line session (`old-phone-pad`) and the live
//! terminal keypad (`keypad`).

pub mod logging;
pub mod session;

pub use old_phone_pad_core as core;
pub use old_phone_pad_input as input;
pub use old_phone_pad_term as term;
pub use old_phone_pad_types as types;
