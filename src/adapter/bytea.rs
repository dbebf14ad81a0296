//! bytea text formats
//!
//! PostgreSQL emits bytea either in hex format (`\x` followed by hex pairs,
//! the default since 9.0) or in the older escape format, where `\\` is a
//! backslash and `\ooo` is an octal byte.
//!
//! Decoding is NOT the inverse of [`encode_hex`] for escape-format input; it
//! only applies to output read back from the server.

use super::errors::{AdapterError, AdapterResult};

const HEX_PREFIX: &str = "\\x";

/// Encode bytes in hex format
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Decode server output in either format
pub fn decode(text: &str) -> AdapterResult<Vec<u8>> {
    match text.strip_prefix(HEX_PREFIX) {
        Some(digits) => Ok(hex::decode(digits)?),
        None => decode_escape(text.as_bytes()),
    }
}

fn decode_escape(bytes: &[u8]) -> AdapterResult<Vec<u8>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'\\') {
            out.push(b'\\');
            i += 2;
            continue;
        }

        let octal = bytes
            .get(i + 1..i + 4)
            .and_then(parse_octal)
            .ok_or(AdapterError::ByteaEscape { position: i })?;
        out.push(octal);
        i += 4;
    }

    Ok(out)
}

/// Three octal digits, at most `\377`
fn parse_octal(digits: &[u8]) -> Option<u8> {
    digits.iter().try_fold(0u16, |acc, &d| match d {
        b'0'..=b'7' => Some(acc * 8 + u16::from(d - b'0')),
        _ => None,
    })
    .and_then(|value| u8::try_from(value).ok())
}
