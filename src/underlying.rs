//! This module contains the implementations of the underlying machine-type operations needed by
//! the codec. These are hidden from the end-user, who only sees the sealed [`Bits`] trait
//! (implemented for `u8`, `u16`, `u32`, and `u64`) and the sealed [`Carrier`] trait
//! (implemented for [`half::f16`], `f32`, and `f64`).

/// The trait for the unsigned machine integer types that hold the raw storage of a bit pattern
/// (only satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Bits: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug + core::fmt::Binary + core::fmt::UpperHex +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> + core::ops::BitOrAssign +
  core::ops::Not<Output=Self> +
  Into<u64>
{
  const ZERO: Self;
  const ONE: Self;
  const MAX: Self;
  const BITS: u32;

  /// Take the lowest [`Self::BITS`] bits of `x`.
  ///
  /// ```ignore
  /// assert_eq!(u8::of_u64(0x1234), 0x34)
  /// ```
  fn of_u64(x: u64) -> Self;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Get the lsb of `self` as a bool
  fn get_lsb(self) -> bool;

  fn wrapping_add(self, other: Self) -> Self;
}

/// Implementation of all functions; every carrier is a plain unsigned int.
macro_rules! impl_common {
  ($uint:ty) => {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = <$uint>::MAX;
    const BITS: u32 = <$uint>::BITS;

    #[inline]
    fn of_u64(x: u64) -> Self { x as $uint }

    #[inline]
    fn mask_lsb(self, n: u32) -> Self {
      if n >= Self::BITS {
        self
      } else {
        self & ((1 as $uint << n) - 1)
      }
    }

    #[inline]
    fn get_lsb(self) -> bool { self & 1 != 0 }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }
  }
}

impl Bits for u64 {}
impl Sealed for u64 {
  impl_common!{u64}
}

impl Bits for u32 {}
impl Sealed for u32 {
  impl_common!{u32}
}

impl Bits for u16 {}
impl Sealed for u16 {
  impl_common!{u16}
}

impl Bits for u8 {}
impl Sealed for u8 {
  impl_common!{u8}
}

mod carrier;
pub use carrier::Carrier;
