use super::*;

use crate::format::{Format, Layout};
use half::f16;

/// The trait for the native IEEE-754 value types a bit pattern can be reinterpreted as (only
/// satisfied by [`half::f16`], `f32`, and `f64`).
///
/// Every format is widened to exactly one carrier: bf8 and fp16 to `f16`, bf16 and fp32 to
/// `f32`, fp64 to `f64`. Conversions between a carrier and its [`Carrier::Bits`] are pure
/// reinterpretations, and never touch NaN payloads.
///
/// This is a *sealed* type.
pub trait Carrier: sealed::Sealed + Copy + core::fmt::Debug {
  /// The unsigned integer type with the same width as `Self`.
  type Bits: Bits;

  /// The field layout of `Self`, as the matching native [`Format`].
  const LAYOUT: Layout;

  fn from_bits(bits: Self::Bits) -> Self;
  fn to_bits(self) -> Self::Bits;

  /// Widen to an `f64`. This is exact for every non-NaN value.
  fn to_f64(self) -> f64;

  /// Round an `f64` to the nearest `Self`, ties to even. Returns `None` if `value` is finite but
  /// too big in magnitude for `Self`, i.e. it would become an infinity.
  fn from_f64(value: f64) -> Option<Self>;
}

mod sealed {
  pub trait Sealed {}
  impl Sealed for half::f16 {}
  impl Sealed for f32 {}
  impl Sealed for f64 {}
}

impl Carrier for f16 {
  type Bits = u16;
  const LAYOUT: Layout = Format::Fp16.layout();

  #[inline]
  fn from_bits(bits: u16) -> Self { f16::from_bits(bits) }

  #[inline]
  fn to_bits(self) -> u16 { f16::to_bits(self) }

  #[inline]
  fn to_f64(self) -> f64 { f16::to_f64(self) }

  fn from_f64(value: f64) -> Option<Self> {
    let narrow = f16::from_f64(value);
    (value.is_finite() == narrow.is_finite() || value.is_nan()).then_some(narrow)
  }
}

impl Carrier for f32 {
  type Bits = u32;
  const LAYOUT: Layout = Format::Fp32.layout();

  #[inline]
  fn from_bits(bits: u32) -> Self { f32::from_bits(bits) }

  #[inline]
  fn to_bits(self) -> u32 { f32::to_bits(self) }

  #[inline]
  fn to_f64(self) -> f64 { self.into() }

  fn from_f64(value: f64) -> Option<Self> {
    // `as` rounds to nearest, ties to even.
    let narrow = value as f32;
    (value.is_finite() == narrow.is_finite() || value.is_nan()).then_some(narrow)
  }
}

impl Carrier for f64 {
  type Bits = u64;
  const LAYOUT: Layout = Format::Fp64.layout();

  #[inline]
  fn from_bits(bits: u64) -> Self { f64::from_bits(bits) }

  #[inline]
  fn to_bits(self) -> u64 { f64::to_bits(self) }

  #[inline]
  fn to_f64(self) -> f64 { self }

  #[inline]
  fn from_f64(value: f64) -> Option<Self> { Some(value) }
}
