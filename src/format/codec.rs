use super::*;

use crate::underlying::{Bits, Carrier, Sealed};
use half::f16;

/// The conversion between the bit pattern of a [`Format`] and its value.
///
/// Every format has a *carrier*: the native IEEE type whose bit layout either *is* the format's
/// layout (fp16, fp32, fp64) or *starts with* it (bf8 is the top byte of an fp16, bf16 the top
/// two bytes of an fp32). Values are always exchanged as a carrier.
///
/// This is implemented once per format, on the zero-sized markers [`Bf8`], [`Bf16`], [`Fp16`],
/// [`Fp32`], and [`Fp64`]. To go from a runtime [`Format`] to its marker, use
/// [`Format::widen`] and [`Format::narrow`].
///
/// ```
/// # use fp_decode::{Bf16, Codec};
/// assert_eq!(Bf16::widen(0x4040), 3.0_f32);
/// assert_eq!(Bf16::narrow(3.0_f32), 0x4040);
/// ```
pub trait Codec {
  /// The unsigned integer type holding one bit pattern.
  type Bits: Bits;

  /// The native IEEE type the format widens to.
  type Carrier: Carrier;

  /// The runtime tag for this format.
  const FORMAT: Format;

  /// As [`Format::layout`].
  const LAYOUT: Layout = Self::FORMAT.layout();

  /// Convert a bit pattern into its value. This is exact and never fails.
  fn widen(bits: Self::Bits) -> Self::Carrier;

  /// Convert a value into a bit pattern. This never fails: formats narrower than their carrier
  /// round to nearest, ties to even, and NaNs always stay NaNs (see
  /// [`round_nearest_even`]). For the native formats this is the exact inverse of
  /// [`Self::widen`].
  fn narrow(wide: Self::Carrier) -> Self::Bits;
}

/// 8-bit "brain float": 1 sign bit, 5 exponent bits, 2 fraction bits; the top byte of an fp16.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bf8;

/// 16-bit "brain float": 1 sign bit, 8 exponent bits, 7 fraction bits; the top two bytes of an
/// fp32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bf16;

/// IEEE-754 binary16.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp16;

/// IEEE-754 binary32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp32;

/// IEEE-754 binary64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp64;

/// A native format is its own carrier, so both directions are plain reinterpretations.
macro_rules! impl_native {
  ($codec:ty, $format:expr, $bits:ty, $carrier:ty) => {
    impl Codec for $codec {
      type Bits = $bits;
      type Carrier = $carrier;
      const FORMAT: Format = $format;

      #[inline]
      fn widen(bits: $bits) -> $carrier {
        <$carrier as Carrier>::from_bits(bits)
      }

      #[inline]
      fn narrow(wide: $carrier) -> $bits {
        <$carrier as Carrier>::to_bits(wide)
      }
    }
  }
}

impl_native!{Fp16, Format::Fp16, u16, f16}
impl_native!{Fp32, Format::Fp32, u32, f32}
impl_native!{Fp64, Format::Fp64, u64, f64}

impl Codec for Bf16 {
  type Bits = u16;
  type Carrier = f32;
  const FORMAT: Format = Format::Bf16;

  #[inline]
  fn widen(bits: u16) -> f32 {
    f32::from_bits(u32::from(bits) << 16)
  }

  #[inline]
  fn narrow(wide: f32) -> u16 {
    // The result has 16 significant bits, so the cast is lossless.
    round_nearest_even::<f32>(wide.to_bits(), Self::LAYOUT) as u16
  }
}

impl Codec for Bf8 {
  type Bits = u8;
  type Carrier = f16;
  const FORMAT: Format = Format::Bf8;

  #[inline]
  fn widen(bits: u8) -> f16 {
    f16::from_bits(u16::from(bits) << 8)
  }

  #[inline]
  fn narrow(wide: f16) -> u8 {
    round_nearest_even::<f16>(wide.to_bits(), Self::LAYOUT) as u8
  }
}

/// Narrow the bit pattern `wide` of a carrier `W` into a format with layout `narrow`, which
/// shares `W`'s sign and exponent fields but keeps only the top bits of its fraction. The result
/// is returned right-aligned in a `W::Bits`.
///
/// - If `wide` is a NaN, the lost fraction bits are simply truncated. If this would leave the
///   narrow fraction all zero (making the result an infinity), the msb of the narrow fraction is
///   set so that the result is still a NaN. The sign is kept; the rest of the payload is not.
/// - Otherwise, the result is rounded to nearest, ties to even. This is done by adding
///   `half_ulp - 1`, plus 1 if the lsb that survives truncation is odd, then truncating. If
///   the addition carries into the exponent field it rounds up to the next binade, or to
///   infinity; this is correct, and needs no special-casing.
pub(crate) fn round_nearest_even<W: Carrier>(wide: W::Bits, narrow: Layout) -> W::Bits {
  let carrier = W::LAYOUT;
  debug_assert_eq!(carrier.exp_bits, narrow.exp_bits, "{narrow:?} cannot be carried by {carrier:?}");
  let lost = carrier.bits - narrow.bits;
  let truncated = wide >> lost;

  // The magnitude (i.e. all but the sign bit) is above the one for infinity iff it's a NaN.
  let infinity = W::Bits::MAX.mask_lsb(carrier.exp_bits) << carrier.frac_bits;
  if wide.mask_lsb(carrier.bits - 1) > infinity {
    if truncated.mask_lsb(narrow.frac_bits) == W::Bits::ZERO {
      log::trace!("NaN {wide:#X} truncates to an infinity, forcing the quiet bit");
      truncated | W::Bits::ONE << (narrow.frac_bits - 1)
    } else {
      truncated
    }
  } else {
    let half_ulp_minus_one = W::Bits::MAX.mask_lsb(lost - 1);
    let parity = if truncated.get_lsb() { W::Bits::ONE } else { W::Bits::ZERO };
    wide.wrapping_add(half_ulp_minus_one.wrapping_add(parity)) >> lost
  }
}
