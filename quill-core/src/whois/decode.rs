//! Byte-level decoding of raw WHOIS responses.
//!
//! Registries answer in UTF-8, ASCII or a legacy single-byte encoding
//! without announcing which. UTF-8 is tried first; when that fails the
//! bytes are read as Latin-1, which maps every byte to a char.

use std::borrow::Cow;

use tracing::warn;

use crate::error::{QuillError, Result};

/// Decodes a raw response into text.
///
/// Returns [`QuillError::Undecodable`] when the bytes are not UTF-8 and
/// `latin1_fallback` is off, or when the text carries NUL bytes (a binary
/// payload rather than a WHOIS answer). Returns [`QuillError::EmptyResponse`]
/// when nothing but whitespace is left.
pub fn decode(raw: &[u8], latin1_fallback: bool) -> Result<Cow<'_, str>> {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) if latin1_fallback => {
            warn!(
                valid_up_to = e.valid_up_to(),
                "Response is not valid UTF-8, decoding as Latin-1"
            );
            Cow::Owned(raw.iter().map(|&b| b as char).collect())
        }
        Err(e) => {
            return Err(QuillError::Undecodable(format!(
                "invalid UTF-8 at byte {}",
                e.valid_up_to()
            )))
        }
    };

    if text.contains('\0') {
        return Err(QuillError::Undecodable(
            "response contains NUL bytes".to_string(),
        ));
    }

    if text.trim().is_empty() {
        return Err(QuillError::EmptyResponse);
    }

    Ok(text)
}

/// Cuts `text` to at most `max` bytes without splitting a character.
pub fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    warn!(len = text.len(), max = max, "Response exceeds size limit, truncating");
    &text[..end]
}
