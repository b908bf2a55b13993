//! Formatting utilities for terminal output

/// Separator shown between chain words, most recent first
///
/// Downstream consumers rely on this exact rendering; change with care.
pub const CHAIN_SEPARATOR: &str = " 🤜 ";

/// Render a chain (most recent word first) as a single line
#[must_use]
pub fn chain_display<'a, I>(words: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().collect::<Vec<_>>().join(CHAIN_SEPARATOR)
}

/// Render a difficulty level as a 10-cell meter
#[must_use]
pub fn difficulty_bar(level: u8) -> String {
    let filled = usize::from(level).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
