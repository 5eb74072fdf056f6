use crate::error::Result;
use crate::plugin::Plugin;

/// One token produced by the [`HexPairs`] scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexToken {
    /// A completed two-digit hex pair, already parsed to its byte value.
    Byte(u8),
    /// A literal newline encountered in the input.
    Newline,
}

/// Scans a byte stream for two-digit hex pairs.
///
/// Non-hex bytes are skipped, newlines are surfaced as their own token, and
/// at most one pending half-pair is carried across skipped bytes. An odd
/// trailing digit at end of input is dropped. The scanner holds no state
/// beyond the current cursor and pending digit, so a fresh one can be built
/// per call.
pub struct HexPairs<'a> {
    input: &'a [u8],
    cursor: usize,
    pending: Option<u8>,
}

impl<'a> HexPairs<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            pending: None,
        }
    }
}

impl Iterator for HexPairs<'_> {
    type Item = HexToken;

    fn next(&mut self) -> Option<HexToken> {
        while self.cursor < self.input.len() {
            let byte = self.input[self.cursor];
            self.cursor += 1;

            if byte == b'\r' || byte == b'\n' {
                return Some(HexToken::Newline);
            }
            let Some(digit) = (byte as char).to_digit(16) else {
                continue;
            };
            match self.pending.take() {
                Some(high) => return Some(HexToken::Byte(high * 16 + digit as u8)),
                None => self.pending = Some(digit as u8),
            }
        }
        None
    }
}

pub struct Hex2Ascii;

impl Plugin for Hex2Ascii {
    fn name(&self) -> &str {
        "Hex2Ascii"
    }

    fn description(&self) -> &str {
        "Displays ascii from hexadecimal."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for token in HexPairs::new(data) {
            match token {
                HexToken::Newline => out.push(b'\n'),
                HexToken::Byte(value) if (0x20..=0x7e).contains(&value) => out.push(value),
                HexToken::Byte(value) => out.extend_from_slice(format!("\\x{value:02x}").as_bytes()),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_pairs_digits_and_skips_noise() {
        let tokens: Vec<HexToken> = HexPairs::new(b"4 1z42").collect();
        assert_eq!(tokens, vec![HexToken::Byte(0x41), HexToken::Byte(0x42)]);
    }

    #[test]
    fn converts_hex_to_ascii() {
        let out = Hex2Ascii.process(b"746f6d", &[]).unwrap();
        assert_eq!(out, b"tom");
    }

    #[test]
    fn odd_trailing_digit_is_dropped() {
        let out = Hex2Ascii.process(b"746f6d4", &[]).unwrap();
        assert_eq!(out, b"tom");
    }

    #[test]
    fn newlines_are_preserved() {
        let out = Hex2Ascii.process(b"41\n42", &[]).unwrap();
        assert_eq!(out, b"A\nB");
    }

    #[test]
    fn half_pair_survives_a_newline() {
        // The pending digit is not reset by the newline token.
        let out = Hex2Ascii.process(b"4\n1", &[]).unwrap();
        assert_eq!(out, b"\nA");
    }

    #[test]
    fn non_printable_bytes_become_escapes() {
        let out = Hex2Ascii.process(b"0041ff", &[]).unwrap();
        assert_eq!(out, b"\\x00A\\xff");
    }
}
