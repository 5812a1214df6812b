//! RFC 2047 "B" encoded-words for non-ASCII header values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

const PREFIX: &str = "=?UTF-8?b?";
const SUFFIX: &str = "?=";
/// RFC 2047 caps a single encoded-word at 75 characters
const MAX_WORD_LEN: usize = 75;
/// Raw bytes that fit in one word once base64 encoded
const MAX_CHUNK_BYTES: usize = (MAX_WORD_LEN - PREFIX.len() - SUFFIX.len()) / 4 * 3;

fn needs_encoding(value: &str) -> bool {
    value
        .bytes()
        .any(|b| (b < b' ' || b > b'~') && b != b'\t')
}

/// Encode a header value as UTF-8 B encoded-words.
///
/// Plain printable ASCII is returned untouched. Longer values are split on
/// character boundaries into several words joined by a space.
pub fn encode_word(value: &str) -> String {
    if !needs_encoding(value) {
        return value.to_string();
    }

    let mut words = Vec::new();
    let mut start = 0;
    let mut end = 0;

    for (idx, ch) in value.char_indices() {
        let next = idx + ch.len_utf8();
        if next - start > MAX_CHUNK_BYTES && end > start {
            words.push(wrap(&value[start..end]));
            start = end;
        }
        end = next;
    }
    if end > start {
        words.push(wrap(&value[start..end]));
    }

    words.join(" ")
}

fn wrap(chunk: &str) -> String {
    format!("{PREFIX}{}{SUFFIX}", STANDARD.encode(chunk))
}
