//! Legal-move scanning and hints
//!
//! Scans a word pool for words that would be accepted against the current
//! chain head, and picks random hints from the survivors.

mod engine;

pub use engine::{playable, random_hint, used_words};
