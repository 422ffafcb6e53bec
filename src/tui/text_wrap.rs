//! Fixed-width line wrapping for chat text.
//!
//! Works on `char`s, one cell per char. Wide glyphs are not measured.
//!
//! Rules:
//! - a `\n` always ends the current line and is dropped
//! - an overflowing line breaks at its last space (the space moves to the
//!   next line and is trimmed there)
//! - with no usable space the line is cut one char short of the width,
//!   so a hard break always shortens the candidate line
//! - emitted lines have leading spaces stripped

/// Wrap `text` into lines of at most `width` chars.
///
/// A `width` of 0 is treated as 1.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let chars: Vec<char> = text.chars().collect();

    let mut lines = Vec::new();
    let mut rest: &[char] = &chars;
    let mut current: Vec<char> = Vec::with_capacity(width);

    while let Some(&c) = rest.get(current.len()) {
        if c == '\n' {
            lines.push(trim_start(&current));
            rest = &rest[current.len() + 1..];
            current.clear();
        } else if current.len() < width {
            current.push(c);
        } else {
            let split = break_index(&current);
            lines.push(trim_start(&current[..split]));
            rest = &rest[split..];
            current.clear();
        }
    }

    if !current.is_empty() {
        lines.push(trim_start(&current));
    }

    lines
}

/// Where to cut a full line: its last interior space, else one char short
/// of the end. Never 0, so every break makes progress.
fn break_index(line: &[char]) -> usize {
    match line.iter().rposition(|&c| c == ' ') {
        Some(i) if i > 0 => i,
        _ => line.len().saturating_sub(1).max(1),
    }
}

fn trim_start(line: &[char]) -> String {
    line.iter().skip_while(|&&c| c == ' ').collect()
}
