//! This module and its submodules contain the bit-pattern codec for the five supported formats,
//! plus the literal parser and field cracker built on top of it.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Wide/carrier**: the native IEEE type a format widens to (`f16`, `f32`, or `f64`).
//!   - **Narrow**: the format being encoded into, which is never wider than its carrier.

/// One of the five supported floating point formats.
///
/// | Format | bits | exponent | fraction | bias | carrier |
/// |--------|------|----------|----------|------|---------|
/// | bf8    | 8    | 5        | 2        | 15   | fp16    |
/// | fp16   | 16   | 5        | 10       | 15   | fp16    |
/// | bf16   | 16   | 8        | 7        | 127  | fp32    |
/// | fp32   | 32   | 8        | 23       | 127  | fp32    |
/// | fp64   | 64   | 11       | 52       | 1023 | fp64    |
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Hash)]
pub enum Format {
  /// 8-bit "brain float": the top byte of an fp16.
  Bf8,
  /// 16-bit "brain float": the top two bytes of an fp32.
  Bf16,
  /// IEEE-754 binary16.
  Fp16,
  /// IEEE-754 binary32.
  Fp32,
  /// IEEE-754 binary64.
  Fp64,
}

/// The static field layout of a [`Format`]: every format has exactly one sign bit (the msb),
/// followed by the exponent field and then the fraction field.
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Hash)]
pub struct Layout {
  /// Total width, in bits.
  pub bits: u32,
  /// Width of the biased exponent field, in bits.
  pub exp_bits: u32,
  /// Width of the fraction (explicit mantissa) field, in bits.
  pub frac_bits: u32,
  /// The exponent bias; the unbiased exponent is `exponent - bias`.
  pub bias: i32,
}

/// The result of decoding: a bit pattern in a [`Format`] together with the value it encodes.
///
/// A `Decoded` is only ever constructed with `bits` inside the format's range, and with `value`
/// equal to the widened bit pattern, so both halves always agree.
#[derive(Clone, Copy, Debug)]
pub struct Decoded {
  format: Format,
  bits: u64,
  value: f64,
}

/// Map a runtime [`Format`] to its [`Codec`] marker type, binding it to `$codec` inside `$body`.
macro_rules! dispatch {
  ($format:expr, $codec:ident => $body:expr) => {
    match $format {
      $crate::format::Format::Bf8 => { type $codec = $crate::format::Bf8; $body }
      $crate::format::Format::Bf16 => { type $codec = $crate::format::Bf16; $body }
      $crate::format::Format::Fp16 => { type $codec = $crate::format::Fp16; $body }
      $crate::format::Format::Fp32 => { type $codec = $crate::format::Fp32; $body }
      $crate::format::Format::Fp64 => { type $codec = $crate::format::Fp64; $body }
    }
  };
}

/// Basics: construction and accessors
mod basics;

/// Per-format constants (layout, epsilon, key diagram, etc)
mod consts;

/// Pattern ↔ value conversion
mod codec;
pub use codec::{Codec, Bf8, Bf16, Fp16, Fp32, Fp64};

/// Sign/exponent/fraction fields
mod crack;
pub use crack::Fields;

/// Literal parsing
mod parse;

/// Rendering (hex float, binary string, report)
mod fmt;
pub use fmt::Report;

/// Test utilities
#[cfg(test)]
mod test;
