//! Greedy word wrapping
//!
//! Words are separated by single spaces only. Consecutive spaces produce
//! empty words, which are kept so that wrapping never drops characters.

/// Split `text` into lines no wider than `max_width`.
///
/// Lines are filled left to right: each word is appended to the current line
/// unless that would exceed `max_width` and the current line already holds
/// something. A word wider than `max_width` is placed alone on its own line
/// and never split. The result always has at least one line, which is empty
/// for empty input.
pub fn wrap_words(
    text: &str,
    max_width: f32,
    mut measure_fn: impl FnMut(&str) -> f32,
) -> Vec<String> {
    let mut words = text.split(' ');
    let mut lines = Vec::new();
    let mut current = words.next().unwrap_or_default().to_string();

    for word in words {
        let candidate = format!("{} {}", current, word);
        if measure_fn(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    lines.push(current);
    lines
}
