use super::*;

use crate::error::ParseError;
use crate::hexfloat::{self, HexFloatError};

/// Why a normalised literal was rejected; the caller attaches the literal and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
  Malformed,
  OutOfRange,
}

impl Format {
  /// Decode a literal into a bit pattern of this format and its value.
  ///
  /// Underscores are ignored everywhere (`0x4040_0000` is `0x40400000`). Then, in order:
  ///
  ///   1. `epsilon` (any case, after optional whitespace) stands for [machine
  ///      epsilon](Self::epsilon_bits).
  ///   2. If the literal contains a `.`, an `n`, or an `N` (so this includes `inf`, `infinity`, and
  ///      `nan`), it is a *value*: a [hex float](crate::hexfloat) if it starts with `0x`,
  ///      otherwise a decimal float. It is rounded to this format's carrier and then narrowed with
  ///      [`Codec::narrow`].
  ///   3. Otherwise it is a *bit pattern*: a non-negative integer in decimal, or in hex, octal,
  ///      or binary with a `0x`, `0o`, or `0b` prefix.
  ///
  /// Errors with [`ParseError::Malformed`] if none of these apply, or with
  /// [`ParseError::OutOfRange`] if the bit pattern is negative or too wide for this format, or
  /// if the value is finite but too big for the carrier.
  ///
  /// ```
  /// # use fp_decode::Format;
  /// let three = Format::Fp32.decode("0x1.8p1").unwrap();
  /// assert_eq!((three.bits(), three.value()), (0x4040_0000, 3.0));
  ///
  /// let three = Format::Fp16.decode("0b0_10000_1000000000").unwrap();
  /// assert_eq!((three.bits(), three.value()), (0x4200, 3.0));
  ///
  /// assert!(Format::Bf8.decode("0x100").is_err());
  /// ```
  pub fn decode(self, literal: &str) -> Result<Decoded, ParseError> {
    let normalised: String = literal.chars().filter(|&c| c != '_').collect();
    let bits = self.decode_bits(&normalised).map_err(|failure| {
      log::debug!("{self} literal {literal:?} rejected: {failure:?}");
      let literal = literal.to_owned();
      match failure {
        Failure::Malformed => ParseError::Malformed { literal, format: self },
        Failure::OutOfRange => ParseError::OutOfRange { literal, format: self },
      }
    })?;
    Decoded::from_bits(self, bits).ok_or_else(|| ParseError::OutOfRange { literal: literal.to_owned(), format: self })
  }

  /// The dispatch of [`Self::decode`], on the literal with underscores already removed.
  fn decode_bits(self, s: &str) -> Result<u64, Failure> {
    if is_epsilon(s) {
      log::debug!("{s:?}: {self} machine epsilon");
      Ok(self.epsilon_bits())
    } else if s.contains(['.', 'n', 'N']) {
      let value = parse_value(s)?;
      log::debug!("{s:?}: value {value:e}, narrowing to {self}");
      self.narrow(value).ok_or(Failure::OutOfRange)
    } else {
      log::debug!("{s:?}: {self} bit pattern");
      let bits = parse_integer(s)?;
      if bits > self.layout().max_bits() {
        return Err(Failure::OutOfRange)
      }
      Ok(bits)
    }
  }
}

fn is_epsilon(s: &str) -> bool {
  s.trim_start().get(..7).is_some_and(|prefix| prefix.eq_ignore_ascii_case("epsilon"))
}

/// Whether `s` looks like the start of a hex float: whitespace, any signs, then `0x`.
fn is_hex_float(s: &str) -> bool {
  let s = s.trim_start().trim_start_matches(['+', '-']);
  s.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"))
}

/// Parse a decimal or hexadecimal float literal, including the special values.
fn parse_value(s: &str) -> Result<f64, Failure> {
  if is_hex_float(s) {
    hexfloat::parse(s).map_err(|err| match err {
      HexFloatError::Invalid => Failure::Malformed,
      HexFloatError::Overflow => Failure::OutOfRange,
    })
  } else {
    s.trim().parse::<f64>().map_err(|_| Failure::Malformed)
  }
}

/// Parse an integer with an optional sign and a `0x`, `0o`, or `0b` radix prefix (decimal
/// otherwise). Like in most languages, a decimal number cannot start with `0` unless it is all
/// `0`s, to avoid confusion with C's octal.
///
/// Negative numbers other than zero, and numbers too big for a `u64`, are well-formed but
/// [`Failure::OutOfRange`].
fn parse_integer(s: &str) -> Result<u64, Failure> {
  let s = s.trim();
  let (negative, s) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };
  let (radix, digits) = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
    Some("0x") => (16, &s[2..]),
    Some("0o") => (8, &s[2..]),
    Some("0b") => (2, &s[2..]),
    _ => (10, s),
  };
  if digits.is_empty() || (radix == 10 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0')) {
    return Err(Failure::Malformed)
  }

  let mut value = Some(0u64);
  for c in digits.chars() {
    let digit = c.to_digit(radix).ok_or(Failure::Malformed)?;
    value = value
      .and_then(|value| value.checked_mul(u64::from(radix)))
      .and_then(|value| value.checked_add(u64::from(digit)));
  }
  match value {
    Some(0) => Ok(0),
    Some(value) if !negative => Ok(value),
    _ => Err(Failure::OutOfRange),
  }
}
