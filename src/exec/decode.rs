// src/exec/decode.rs

//! Text decoding for captured child output.
//!
//! Standard output is decoded strictly: bytes that are not UTF-8 are an
//! error, never a partial write. Line endings are normalised the way a
//! text-mode reader does it (`\r\n` and a lone `\r` both become `\n`).

use std::str::Utf8Error;

/// Strictly decode `bytes` as UTF-8 and normalise line endings.
pub fn decode_text(bytes: &[u8]) -> Result<String, Utf8Error> {
    let text = std::str::from_utf8(bytes)?;
    Ok(normalize_newlines(text))
}

/// Lossy variant for stderr, which is only ever shown to the user.
pub fn decode_lossy(bytes: &[u8]) -> String {
    normalize_newlines(&String::from_utf8_lossy(bytes))
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_lone_cr_become_lf() {
        assert_eq!(decode_text(b"a\r\nb\rc\n").unwrap(), "a\nb\nc\n");
        assert_eq!(decode_text(b"\r\r\n").unwrap(), "\n\n");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(decode_text(&[0x66, 0x6f, 0xff, 0x0a]).is_err());
    }

    #[test]
    fn lossy_replaces_invalid_bytes() {
        assert_eq!(decode_lossy(&[b'x', 0xff, b'\r', b'\n']), "x\u{fffd}\n");
    }
}
