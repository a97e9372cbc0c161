//! Hexadecimal text for colors, e.g. `#daa520`.
//!
//! The number of digits determines the depth: `n` digits split into three
//! equal groups, each digit carrying 4 bits, so `#rgb` is 12 bits deep,
//! `#rrggbb` is 24 bits deep and `#rrrrggggbbbb` is 48 bits deep.

use std::str::FromStr;

use crate::color::{Color, Depth, Sample};
use crate::error::{Error, Result};

/// Bits carried by one hex digit.
const BITS_PER_DIGIT: usize = 4;

/// The widest channel that fits in a [`Sample`].
const MAX_DIGITS_PER_CHANNEL: usize = Sample::BITS as usize / BITS_PER_DIGIT;

fn invalid(input: &str, reason: &'static str) -> Error {
    tracing::debug!(input, reason, "rejected hex color");
    Error::InvalidFormat {
        input: input.to_string(),
        reason,
    }
}

impl Color {
    /// Parse a color from hexadecimal text. The leading `#` is optional and
    /// both upper and lower case digits are accepted.
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);

        if digits.is_empty() {
            return Err(invalid(text, "no digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(text, "contains non-hexadecimal characters"));
        }
        if digits.len() % 3 != 0 {
            return Err(invalid(text, "length must be divisible by 3"));
        }

        let group = digits.len() / 3;
        if group > MAX_DIGITS_PER_CHANNEL {
            return Err(invalid(text, "too many digits per channel"));
        }

        // Every byte is an ASCII hex digit, so slicing on byte offsets is
        // safe and each group parses.
        let sample = |i: usize| {
            Sample::from_str_radix(&digits[i * group..(i + 1) * group], 16)
                .map_err(|_| invalid(text, "contains non-hexadecimal characters"))
        };

        Self::with_depth(
            i64::from(sample(0)?),
            i64::from(sample(1)?),
            i64::from(sample(2)?),
            (digits.len() * BITS_PER_DIGIT) as i64,
        )
    }

    /// Write the color as `#` followed by `depth / 12` lower-case,
    /// zero-padded hex digits per channel.
    pub fn to_hex(&self) -> Result<String> {
        let depth: Depth = self.depth();
        if depth % 12 != 0 {
            tracing::debug!(depth, "hex requested for non-duodecimal depth");
            return Err(Error::UnsupportedDepth(depth));
        }

        let width = usize::from(depth / 12);
        let (red, green, blue) = self.rgb();
        Ok(format!("#{red:0width$x}{green:0width$x}{blue:0width$x}"))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digits() {
        let c = Color::from_hex("#DAA520").unwrap();
        assert_eq!(c.rgb(), (218, 165, 32));
        assert_eq!(c.depth(), 24);
        assert_eq!(c.to_hex().unwrap(), "#daa520");

        let c: Color = "daa520".parse().unwrap();
        assert_eq!(c, Color::GOLDENROD);
    }

    #[test]
    fn digit_count_sets_depth() {
        let c = Color::from_hex("#fa0").unwrap();
        assert_eq!(c.rgb(), (15, 10, 0));
        assert_eq!(c.depth(), 12);
        assert_eq!(c.to_hex().unwrap(), "#fa0");

        let c = Color::from_hex("ffff00008000").unwrap();
        assert_eq!(c.rgb(), (65535, 0, 32768));
        assert_eq!(c.depth(), 48);

        let c = Color::from_hex("ffffffff0000000100000000").unwrap();
        assert_eq!(c.depth(), 96);
        assert_eq!(c.red(), u32::MAX);
        assert_eq!(c.to_hex().unwrap(), "#ffffffff0000000100000000");
    }

    #[test]
    fn output_is_zero_padded() {
        let c = Color::new(0, 10, 255).unwrap();
        assert_eq!(c.to_hex().unwrap(), "#000aff");

        let c = Color::with_depth(1, 2, 3, 36).unwrap();
        assert_eq!(c.to_hex().unwrap(), "#001002003");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "#12345",
            "",
            "#",
            "#ggg",
            "+ff",
            "#12 456",
            "123456789123456789123456789",
            "#\u{ff}\u{ff}\u{ff}",
        ] {
            assert!(
                matches!(Color::from_hex(text), Err(Error::InvalidFormat { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_needs_whole_digits_per_channel() {
        let c = Color::with_depth(1, 2, 3, 9).unwrap();
        assert_eq!(c.to_hex(), Err(Error::UnsupportedDepth(9)));

        let c = Color::with_depth(1, 2, 3, 30).unwrap();
        assert_eq!(c.to_hex(), Err(Error::UnsupportedDepth(30)));
    }
}
