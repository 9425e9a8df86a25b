//! Host key names to engine key presses.

/// Map a `KeyboardEvent.key` value to the character the engine understands.
///
/// Only single-character keys pass through. Named keys such as "Shift",
/// "Enter" or "ArrowLeft" return `None`, so their first letter can never
/// clear a challenge.
pub fn key_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
