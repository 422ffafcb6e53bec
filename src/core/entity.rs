//! HTML entity decoding for message bodies.
//!
//! Chat servers escape a handful of characters before relaying text. Only the
//! named references `&lt;` `&gt;` `&quot;` `&amp;` and decimal numeric
//! references (`&#65;`) are understood. Hexadecimal references (`&#x41;`) are
//! recognised but deliberately passed through untouched.
//!
//! Decoding is a single left-to-right pass into a fresh buffer: replaced text
//! is never rescanned, so `&amp;lt;` decodes to `&lt;`, not `<`.

const NAMED: [(&str, char); 4] = [("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"'), ("&amp;", '&')];

pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        match decode_reference(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Try to decode the reference at the start of `tail` (which begins with `&`).
/// Returns the decoded char and how many bytes of `tail` it consumed.
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    if let Some(&(entity, ch)) = NAMED.iter().find(|(entity, _)| tail.starts_with(entity)) {
        return Some((ch, entity.len()));
    }

    let body = tail.strip_prefix("&#")?;
    let end = body.find(';')?;
    let number = &body[..end];

    // Hex references are unsupported: leave them verbatim.
    if number.starts_with(['x', 'X']) {
        return None;
    }
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let code = number.parse::<u32>().ok()?;
    let ch = char::from_u32(code)?;
    Some((ch, "&#".len() + end + 1))
}
