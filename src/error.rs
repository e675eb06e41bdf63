//! Error types.

use crate::Format;
use thiserror::Error;

/// The error returned when a literal cannot be decoded into a [`Format`].
///
/// Both variants carry the offending literal (as given, before any normalisation) and the
/// target format, so they can be reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  /// The literal is neither a special token, a decimal or hexadecimal float value, nor an
  /// integer bit pattern.
  #[error("invalid {format} number: {literal} (malformed literal)")]
  Malformed { literal: String, format: Format },

  /// The literal was parsed, but does not fit the format: a negative or too wide bit pattern, or
  /// a finite value too big for the format's carrier.
  #[error("invalid {format} number: {literal} (out of range)")]
  OutOfRange { literal: String, format: Format },
}

/// The kind of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  Malformed,
  OutOfRange,
}

impl core::fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      ErrorKind::Malformed => "malformed literal",
      ErrorKind::OutOfRange => "out of range",
    })
  }
}

impl ParseError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ParseError::Malformed { .. } => ErrorKind::Malformed,
      ParseError::OutOfRange { .. } => ErrorKind::OutOfRange,
    }
  }

  /// The literal that failed to parse.
  pub fn literal(&self) -> &str {
    match self {
      ParseError::Malformed { literal, .. } | ParseError::OutOfRange { literal, .. } => literal,
    }
  }

  /// The format the literal was parsed for.
  pub fn format(&self) -> Format {
    match self {
      ParseError::Malformed { format, .. } | ParseError::OutOfRange { format, .. } => *format,
    }
  }
}

/// The error returned when parsing an unknown [`Format`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format `{0}` (expected one of bf8, bf16, fp16, fp32, fp64)")]
pub struct UnknownFormat(pub String);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    let err = ParseError::Malformed { literal: "1.2.3".into(), format: Format::Fp32 };
    assert_eq!(err.to_string(), "invalid fp32 number: 1.2.3 (malformed literal)");
    let err = ParseError::OutOfRange { literal: "0x1_0000".into(), format: Format::Bf16 };
    assert_eq!(err.to_string(), "invalid bf16 number: 0x1_0000 (out of range)");
  }

  #[test]
  fn accessors() {
    let err = ParseError::OutOfRange { literal: "-1".into(), format: Format::Bf8 };
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err.literal(), "-1");
    assert_eq!(err.format(), Format::Bf8);
    assert_eq!(err.kind().to_string(), "out of range");
  }
}
