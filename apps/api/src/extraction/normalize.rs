//! Text normalization shared by every downstream matcher.

/// Lower-cases the input and maps every character outside
/// `[a-z0-9+.# ]` to a single space. Deliberately does not collapse
/// whitespace runs — callers that need tokens split on runs themselves.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '.' | '#' | ' ' => c,
            _ => ' ',
        })
        .collect()
}

/// Splits normalized text into non-empty whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
