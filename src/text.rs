//! String Conversion
//!
//! Rendering to and parsing from bases 2, 10 and 16, built entirely on the
//! level interface: decimal output divides by ten and collects remainders,
//! hex walks the value four bits at a time, binary one bit at a time.
//! Parsing mirrors each walk in reverse. A printf-style format selector
//! (`%d`, `%x`, `%X`, `%b`) is kept for compatibility; [`Radix`] is the
//! preferred way to name a base.

use std::fmt;

use crate::base::U128;
use crate::double::Wide;
use crate::level::Level;

/// Output and input bases supported by the string converters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Base 2
    Binary,
    /// Base 10
    Decimal,
    /// Base 16, lowercase digits
    LowerHex,
    /// Base 16, uppercase digits
    UpperHex,
}

impl Radix {
    /// Read a printf-style format selector: the character at index 1
    /// picks the base (`d`, `b`, `x` or `X`); everything else in the
    /// string is ignored. Returns `None` for any other selector.
    pub fn from_format(format: &str) -> Option<Radix> {
        match format.as_bytes().get(1) {
            Some(b'd') => Some(Radix::Decimal),
            Some(b'b') => Some(Radix::Binary),
            Some(b'x') => Some(Radix::LowerHex),
            Some(b'X') => Some(Radix::UpperHex),
            _ => None,
        }
    }
}

/// Render a value in the given base, most-significant digit first, with
/// leading zeros stripped. Zero renders as `"0"`.
pub fn render<L: Level>(value: &L, radix: Radix) -> String {
    match radix {
        Radix::Decimal => render_decimal(value),
        Radix::Binary => render_binary(value),
        Radix::LowerHex => render_hex(value, b'a'),
        Radix::UpperHex => render_hex(value, b'A'),
    }
}

/// Render through a printf-style format selector. An unrecognized
/// selector yields an empty string rather than an error.
pub fn render_format<L: Level>(value: &L, format: &str) -> String {
    match Radix::from_format(format) {
        Some(radix) => render(value, radix),
        None => String::new(),
    }
}

fn render_decimal<L: Level>(value: &L) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let ten = L::from_u64(10);
    let mut scratch = value.clone();
    let mut digits = Vec::new();
    while !scratch.is_zero() {
        let remainder = match scratch.div_rem(&ten) {
            Ok(remainder) => remainder,
            Err(_) => unreachable!(),
        };
        digits.push(b'0' + remainder.low_byte());
    }
    digits.reverse();
    String::from_utf8(digits).expect("decimal digits are ascii")
}

fn render_hex<L: Level>(value: &L, letter_base: u8) -> String {
    let mut scratch = value.clone();
    let mut digits = vec![0u8; L::BITS / 4];
    for slot in digits.iter_mut().rev() {
        let nibble = scratch.low_byte() & 0xF;
        *slot = if nibble > 9 {
            letter_base + nibble - 10
        } else {
            b'0' + nibble
        };
        scratch.shr_assign_bits(4);
    }
    trim_leading_zeros(digits)
}

fn render_binary<L: Level>(value: &L) -> String {
    let mut scratch = value.clone();
    let mut digits = Vec::with_capacity(L::BITS);
    for _ in 0..L::BITS {
        digits.push(b'0' + (scratch.low_byte() & 1));
        scratch.shr1(false);
    }
    digits.reverse();
    trim_leading_zeros(digits)
}

fn trim_leading_zeros(digits: Vec<u8>) -> String {
    let first = digits
        .iter()
        .position(|&d| d != b'0')
        .unwrap_or(digits.len() - 1);
    String::from_utf8(digits[first..].to_vec()).expect("digits are ascii")
}

/// Parse a value, sniffing the base from the text: a `0x` prefix selects
/// hex, `0b` binary, anything else decimal. Leading characters that are
/// not digits are skipped; parsing stops at the first character that is
/// not a digit of the selected base. An empty digit stream yields zero.
pub fn parse<L: Level>(text: &str) -> L {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && !bytes[start].is_ascii_digit() {
        start += 1;
    }
    if start >= bytes.len() {
        return L::zero();
    }
    if bytes[start] == b'0' {
        match bytes.get(start + 1) {
            Some(b'x') | Some(b'X') => return parse_digits(&bytes[start + 2..], Radix::LowerHex),
            Some(b'b') | Some(b'B') => return parse_digits(&bytes[start + 2..], Radix::Binary),
            _ => {}
        }
    }
    parse_digits(&bytes[start..], Radix::Decimal)
}

/// Parse a value in a known base. Leading whitespace and `+` are skipped
/// and a matching `0x`/`0b` prefix is accepted but not required.
pub fn parse_radix<L: Level>(text: &str, radix: Radix) -> L {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && (bytes[start].is_ascii_whitespace() || bytes[start] == b'+') {
        start += 1;
    }
    let rest = match radix {
        Radix::LowerHex | Radix::UpperHex => strip_base_prefix(&bytes[start..], b'x'),
        Radix::Binary => strip_base_prefix(&bytes[start..], b'b'),
        Radix::Decimal => &bytes[start..],
    };
    parse_digits(rest, radix)
}

fn strip_base_prefix(bytes: &[u8], marker: u8) -> &[u8] {
    if bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].eq_ignore_ascii_case(&marker) {
        &bytes[2..]
    } else {
        bytes
    }
}

pub(crate) fn parse_digits<L: Level>(bytes: &[u8], radix: Radix) -> L {
    let mut value = L::zero();
    match radix {
        Radix::Decimal => {
            let ten = L::from_u64(10);
            for &b in bytes {
                if !b.is_ascii_digit() {
                    break;
                }
                value.widening_mul(&ten);
                value.carrying_add(&L::from_u64((b - b'0') as u64), false);
            }
        }
        Radix::LowerHex | Radix::UpperHex => {
            for &b in bytes {
                let digit = match b {
                    b'0'..=b'9' => b - b'0',
                    b'a'..=b'f' => b - b'a' + 10,
                    b'A'..=b'F' => b - b'A' + 10,
                    _ => break,
                };
                value.shl_assign_bits(4);
                value.or_word(digit as u64);
            }
        }
        Radix::Binary => {
            for &b in bytes {
                if b != b'0' && b != b'1' {
                    break;
                }
                value.shl1(false);
                value.or_word((b - b'0') as u64);
            }
        }
    }
    value
}

/// String conversion for every level, provided on top of the level
/// interface.
pub trait Text: Level {
    /// Render in the given base; see [`render`].
    fn to_text(&self, radix: Radix) -> String {
        render(self, radix)
    }

    /// Render through a printf-style format selector; see
    /// [`render_format`].
    fn to_text_format(&self, format: &str) -> String {
        render_format(self, format)
    }

    /// Parse with base sniffing; see [`parse`].
    fn from_text(text: &str) -> Self {
        parse(text)
    }

    /// Parse in a known base; see [`parse_radix`].
    fn from_text_radix(text: &str, radix: Radix) -> Self {
        parse_radix(text, radix)
    }
}

impl<L: Level> Text for L {}

macro_rules! impl_text_fmt {
    ($ty:ty $(, $lp:ident)?) => {
        impl $(<$lp: Level>)? fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&render(self, Radix::Decimal))
            }
        }

        impl $(<$lp: Level>)? fmt::LowerHex for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&render(self, Radix::LowerHex))
            }
        }

        impl $(<$lp: Level>)? fmt::UpperHex for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&render(self, Radix::UpperHex))
            }
        }

        impl $(<$lp: Level>)? fmt::Binary for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&render(self, Radix::Binary))
            }
        }
    };
}

impl_text_fmt!(U128);
impl_text_fmt!(Wide<L>, L);
