use super::*;

use crate::underlying::Sealed;

/// The three fields of a bit pattern, each right-aligned.
///
/// ```
/// # use fp_decode::{Fields, Format};
/// let fields = Fields::crack(0x4200, Format::Fp16.layout());
/// assert_eq!(fields, Fields { sign: 0, exponent: 0b10000, fraction: 0b10_0000_0000 });
/// assert_eq!(fields.recombine(Format::Fp16.layout()), 0x4200);
/// ```
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Hash)]
pub struct Fields {
  /// The sign bit, `0` (positive) or `1` (negative).
  pub sign: u64,
  /// The biased exponent, [`Layout::exp_bits`] wide.
  pub exponent: u64,
  /// The fraction, [`Layout::frac_bits`] wide.
  pub fraction: u64,
}

impl Fields {
  /// Split `bits` into its fields according to `layout`. Bits higher than [`Layout::bits`] are
  /// ignored.
  pub fn crack(bits: u64, layout: Layout) -> Self {
    Self {
      sign: (bits >> (layout.exp_bits + layout.frac_bits)).mask_lsb(Layout::SIGN_BITS),
      exponent: (bits >> layout.frac_bits).mask_lsb(layout.exp_bits),
      fraction: bits.mask_lsb(layout.frac_bits),
    }
  }

  /// Put the fields back together; the exact inverse of [`Self::crack`].
  pub fn recombine(self, layout: Layout) -> u64 {
    self.sign << (layout.exp_bits + layout.frac_bits)
      | self.exponent << layout.frac_bits
      | self.fraction
  }

  /// The exponent with the bias removed.
  ///
  /// Note that this is the plain difference `exponent - bias`, also for zeros and subnormals
  /// (where the effective exponent is actually `1 - bias`) and for infinities and NaNs.
  pub fn unbiased_exponent(self, layout: Layout) -> i64 {
    self.exponent as i64 - i64::from(layout.bias)
  }

  /// Whether the sign bit is set.
  pub fn is_negative(self) -> bool {
    self.sign != 0
  }

  /// Render as binary digits: the sign bit, a space, the exponent field, a space, and the fraction
  /// field, each field zero-padded to its width, e.g. `"0 10000 1000000000"` for fp16 `3.0`.
  pub fn binary(self, layout: Layout) -> String {
    format!(
      "{sign:b} {exponent:0we$b} {fraction:0wf$b}",
      sign = self.sign,
      exponent = self.exponent,
      fraction = self.fraction,
      we = layout.exp_bits as usize,
      wf = layout.frac_bits as usize,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn crack_fp16() {
    assert_eq!(
      Fields::crack(0b1_01111_0000000001, Format::Fp16.layout()),
      Fields { sign: 1, exponent: 0b01111, fraction: 0b1 },
    );
  }

  #[test]
  fn crack_fp64() {
    assert_eq!(
      Fields::crack(0xbff8_0000_0000_0001, Format::Fp64.layout()),
      Fields { sign: 1, exponent: 0x3ff, fraction: 0x8_0000_0000_0001 },
    );
  }

  #[test]
  fn crack_ignores_high_bits() {
    assert_eq!(
      Fields::crack(0x1_42, Format::Bf8.layout()),
      Fields::crack(0x42, Format::Bf8.layout()),
    );
  }

  #[test]
  fn unbiased_exponent() {
    let layout = Format::Bf16.layout();
    assert_eq!(Fields::crack(0x3f80, layout).unbiased_exponent(layout), 0);
    assert_eq!(Fields::crack(0x0001, layout).unbiased_exponent(layout), -127);
    assert_eq!(Fields::crack(0x7f80, layout).unbiased_exponent(layout), 128);
  }

  #[test]
  fn binary() {
    assert_eq!(Fields::crack(0x42, Format::Bf8.layout()).binary(Format::Bf8.layout()), "0 10000 10");
    assert_eq!(Fields::crack(0x4200, Format::Fp16.layout()).binary(Format::Fp16.layout()), "0 10000 1000000000");
    assert_eq!(Fields::crack(0xc040, Format::Bf16.layout()).binary(Format::Bf16.layout()), "1 10000000 1000000");
    assert_eq!(
      Fields::crack(0x0000_0001, Format::Fp32.layout()).binary(Format::Fp32.layout()),
      "0 00000000 00000000000000000000001",
    );
  }

  #[test]
  fn binary_width() {
    for format in Format::ALL {
      let layout = format.layout();
      let binary = Fields::crack(layout.max_bits(), layout).binary(layout);
      assert_eq!(binary.len(), layout.bits as usize + 2, "{format}");
      assert_eq!(binary.chars().filter(|&c| c == '1').count(), layout.bits as usize, "{format}");
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn recombine(format in proptest::sample::select(Format::ALL.to_vec()), bits in any::<u64>()) {
      let layout = format.layout();
      let bits = bits & layout.max_bits();
      prop_assert_eq!(Fields::crack(bits, layout).recombine(layout), bits);
    }
  }

  #[test]
  fn recombine_exhaustive() {
    for format in [Format::Bf8, Format::Bf16, Format::Fp16] {
      let layout = format.layout();
      for bits in format.patterns_exhaustive() {
        assert_eq!(Fields::crack(bits, layout).recombine(layout), bits, "{format} {bits:#X}");
      }
    }
  }
}
