//! This crate decodes, encodes, and inspects the bit fields of five binary floating point
//! formats: IEEE-754 binary16, binary32, and binary64, plus the 16- and 8-bit "brain floats".
//!
//! # Introduction
//!
//! Every format here is one sign bit, then a biased exponent field, then a fraction field:
//!
//! | Format | bits | exponent | fraction | bias |
//! |--------|------|----------|----------|------|
//! | bf8    | 8    | 5        | 2        | 15   |
//! | fp16   | 16   | 5        | 10       | 15   |
//! | bf16   | 16   | 8        | 7        | 127  |
//! | fp32   | 32   | 8        | 23       | 127  |
//! | fp64   | 64   | 11       | 52       | 1023 |
//!
//! The brain floats have no native type: bf16 is the upper half of an fp32 and bf8 is the upper
//! half of an fp16. They are widened by zero-extending the bit pattern, and narrowed by rounding
//! the wide pattern to nearest (ties to even), taking care that a NaN stays a NaN.
//!
//! # Usage
//!
//! ```
//! use fp_decode::{Decoded, Format};
//!
//! // Parse a literal: a bit pattern (decimal, hex, octal, or binary), a decimal or hex float
//! // value (rounded to the format), or the special token `epsilon`.
//! let a = fp_decode::decode("0x4200", Format::Fp16).unwrap();
//! let b = Format::Fp32.decode("0x1.8p1").unwrap();
//! let c = Format::Bf16.decode("3.0").unwrap();
//! let d = Format::Fp64.decode("epsilon").unwrap();
//! assert_eq!((a.bits(), a.value()), (0x4200, 3.0));
//! assert_eq!((b.bits(), b.value()), (0x4040_0000, 3.0));
//! assert_eq!((c.bits(), c.value()), (0x4040, 3.0));
//! assert_eq!(d.value(), f64::EPSILON);
//!
//! // Or start from a raw bit pattern.
//! let e = Decoded::from_bits(Format::Bf8, 0x42).unwrap();
//! assert_eq!(e.value(), 3.0);
//!
//! // Look at the fields.
//! assert_eq!(a.binary(), "0 10000 1000000000");
//! assert_eq!(a.exponent_info(), "16 - 15 = 1");
//! assert_eq!(a.hex_value(), "0x1.800p+1");
//! ```
//!
//! Malformed literals and literals that don't fit the format are told apart:
//!
//! ```
//! # use fp_decode::{ErrorKind, Format};
//! assert_eq!(Format::Fp32.decode("1.2.3").unwrap_err().kind(), ErrorKind::Malformed);
//! assert_eq!(Format::Fp32.decode("-1").unwrap_err().kind(), ErrorKind::OutOfRange);
//! assert_eq!(Format::Bf8.decode("0x100").unwrap_err().kind(), ErrorKind::OutOfRange);
//! ```
//!
//! The per-format conversions are also available statically, through the [`Codec`] trait on the
//! marker types [`Bf8`], [`Bf16`], [`Fp16`], [`Fp32`], and [`Fp64`].
//!
//! # Logging
//!
//! The library logs through the [`log`] facade: parse decisions at `debug` level, rounding
//! details at `trace` level. The `fpdecode` binary prints them to stderr according to `RUST_LOG`.

mod format;
mod underlying;
mod error;
pub mod hexfloat;

pub use format::{Format, Layout, Decoded, Fields, Report};
pub use format::{Codec, Bf8, Bf16, Fp16, Fp32, Fp64};
pub use error::{ParseError, ErrorKind, UnknownFormat};
pub use underlying::{Bits, Carrier};

/// Decode `literal` as a number in `format`; shorthand for [`Format::decode`].
pub fn decode(literal: &str, format: Format) -> Result<Decoded, ParseError> {
  format.decode(literal)
}

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x4000} else {0x10_0000};
