//! Hexadecimal floating point literals (the C99 `%a` syntax), on `f64`.
//!
//! A hex float is a hexadecimal significand, optionally with a radix point, scaled by a power of
//! two written in decimal: `0x1.8p1` is `1.5 * 2^1 = 3.0`. Unlike decimal literals, every finite
//! `f64` has an exact hex-float rendering, so a [`format`] then [`parse`] round trip is lossless.
//!
//! Parsing and rounding are done by [`fhex`]; this module adds overflow detection and the
//! fixed-width rendering.
//!
//! ```
//! # use fp_decode::hexfloat;
//! assert_eq!(hexfloat::parse("0x1.8p1"), Ok(3.0));
//! assert_eq!(hexfloat::parse("-0X.Cp+2"), Ok(-3.0));
//! assert_eq!(hexfloat::format(3.0), "0x1.8000000000000p+1");
//! ```

use core::num::IntErrorKind;

use fhex::FromHex;
use thiserror::Error;

/// The error returned by [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexFloatError {
  /// The string is not a hex-float literal.
  #[error("invalid hexadecimal float literal")]
  Invalid,
  /// The literal is well-formed, but its magnitude rounds to more than `f64::MAX`.
  #[error("hexadecimal float literal too large to represent")]
  Overflow,
}

/// Number of explicit fraction bits in an `f64`.
const FRAC_BITS: u32 = f64::MANTISSA_DIGITS - 1;

/// The exponent of [`f64::MIN_POSITIVE`], the smallest normal `f64`.
const MIN_NORMAL_EXP: i64 = f64::MIN_EXP as i64 - 1;

/// Binary exponents are clamped to this magnitude; anything beyond is a guaranteed over- or
/// underflow.
const EXPONENT_LIMIT: i64 = 1 << 32;

/// Parse a hex-float literal into the nearest `f64` (ties to even).
///
/// The accepted grammar is, case-insensitively, with surrounding whitespace allowed:
///
/// ```text
/// [+-] 0x hexdigits [. [hexdigits]] [p [+-] decdigits]
/// [+-] 0x . hexdigits [p [+-] decdigits]
/// [+-] (inf | nan)
/// ```
///
/// Subnormal results are rounded like any other; results rounding above `f64::MAX` in
/// magnitude are a [`HexFloatError::Overflow`].
pub fn parse(s: &str) -> Result<f64, HexFloatError> {
  let Some(canonical) = Canonical::new(s) else {
    // Not a finite literal: either one of the special values, or invalid.
    return f64::from_hex(s).filter(|x| !x.is_finite()).ok_or(HexFloatError::Invalid)
  };
  let value = f64::from_hex(&canonical.literal).ok_or(HexFloatError::Invalid)?;
  if value.is_infinite() {
    return Err(HexFloatError::Overflow)
  }
  // Rounding a value below the smallest normal can give at most the smallest normal.
  if canonical.top < MIN_NORMAL_EXP && value.abs() > f64::MIN_POSITIVE {
    return Ok(f64::MIN_POSITIVE.copysign(value))
  }
  Ok(value)
}

/// A finite hex-float literal rewritten as `[-]0x<digits>p<exponent>`, with an integer
/// significand that has no leading zeros.
///
/// [`fhex`] keeps the first 15 digits it sees (leading zeros included) and only a sticky bit for
/// the rest, so leading zeros must not take up that room.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Canonical {
  literal: String,
  /// The exponent of the msb of the value, or `i64::MIN` if it's zero.
  top: i64,
}

impl Canonical {
  /// Returns `None` if `s` is not a finite hex-float literal.
  fn new(s: &str) -> Option<Self> {
    let s = s.trim();
    let (sign, s) = match s.strip_prefix('-') {
      Some(rest) => ("-", rest),
      None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    let (mantissa, exponent) = match s.split_once(['p', 'P']) {
      Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)?),
      None => (s, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (int.is_empty() && frac.is_empty()) || !int.chars().chain(frac.chars()).all(|c| c.is_ascii_hexdigit()) {
      return None
    }

    let digits = format!("{int}{frac}");
    let digits = digits.trim_start_matches('0');
    let exponent = exponent - 4 * frac.len() as i64;
    let Some(first) = digits.chars().next().and_then(|c| c.to_digit(16)) else {
      return Some(Self { literal: format!("{sign}0x0p0"), top: i64::MIN })
    };
    let first_bits = i64::from(u32::BITS - first.leading_zeros());
    Some(Self {
      literal: format!("{sign}0x{digits}p{exponent}"),
      top: exponent + 4 * (digits.len() as i64 - 1) + first_bits - 1,
    })
  }
}

/// Parse the decimal exponent after the `p`, clamped to [`EXPONENT_LIMIT`].
fn parse_exponent(s: &str) -> Option<i64> {
  match s.parse::<i64>() {
    Ok(exponent) => Some(exponent.clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT)),
    Err(err) => match err.kind() {
      IntErrorKind::PosOverflow => Some(EXPONENT_LIMIT),
      IntErrorKind::NegOverflow => Some(-EXPONENT_LIMIT),
      _ => None,
    },
  }
}

/// Render an `f64` as a hex-float literal.
///
/// Normal numbers are rendered as `0x1.` followed by all 13 fraction digits and a signed binary
/// exponent; subnormals as `0x0.` followed by 13 digits and `p-1022`; zeros as `0x0.0p+0`.
/// Negative numbers (including `-0.0`) are prefixed with `-`. The non-finite values are `inf`,
/// `-inf`, and `nan`.
///
/// ```
/// # use fp_decode::hexfloat::format;
/// assert_eq!(format(1.0), "0x1.0000000000000p+0");
/// assert_eq!(format(-0.1), "-0x1.999999999999ap-4");
/// assert_eq!(format(f64::from_bits(1)), "0x0.0000000000001p-1022");
/// assert_eq!(format(-0.0), "-0x0.0p+0");
/// ```
pub fn format(value: f64) -> String {
  if value.is_nan() {
    return "nan".into()
  }
  let sign = if value.is_sign_negative() { "-" } else { "" };
  if value.is_infinite() {
    return format!("{sign}inf")
  }
  if value == 0. {
    return format!("{sign}0x0.0p+0")
  }

  let bits = value.to_bits();
  let fraction = bits & ((1 << FRAC_BITS) - 1);
  let exponent = (bits << 1 >> (FRAC_BITS + 1)) as i64;
  let bias = i64::from(f64::MAX_EXP) - 1;
  let digits = FRAC_BITS.div_ceil(4) as usize;
  if exponent == 0 {
    format!("{sign}0x0.{fraction:0digits$x}p{:+}", 1 - bias)
  } else {
    format!("{sign}0x1.{fraction:0digits$x}p{:+}", exponent - bias)
  }
}
