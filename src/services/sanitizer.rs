//! Sanitation of extracted document text.
//!
//! Best-effort by construction: invalid input is dropped, never
//! substituted, and no function here returns an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Document;

/// ASCII control characters 0x00-0x1F plus DEL.
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F\x7F]").expect("valid control character class"));

/// Strip ASCII control characters from already-valid text.
pub fn clean_text(text: &str) -> String {
    CONTROL_CHARS.replace_all(text, "").into_owned()
}

/// Decode bytes as UTF-8, dropping undecodable sequences, then strip
/// control characters.
pub fn clean_bytes(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                decoded.push_str(valid);
                break;
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                // SAFETY: from_utf8 validated everything before valid_up_to.
                decoded.push_str(unsafe { std::str::from_utf8_unchecked(&rest[..valid_up_to]) });
                let skip = err.error_len().unwrap_or(rest.len() - valid_up_to);
                rest = &rest[valid_up_to + skip..];
            }
        }
    }

    clean_text(&decoded)
}

/// Rewrite each document's content with its sanitized form.
pub fn sanitize_documents(documents: &mut [Document]) {
    for doc in documents.iter_mut() {
        doc.content = clean_text(&doc.content);
    }
}
