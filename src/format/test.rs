use super::*;

impl Format {
  /// An iterator through every bit pattern of this format. Only meant for formats of at most 16
  /// bits.
  pub(crate) fn patterns_exhaustive(self) -> impl Iterator<Item = u64> {
    assert!(self.layout().bits <= 16, "{self} is too wide to test exhaustively");
    0 ..= self.layout().max_bits()
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any bit pattern of this
  /// format.
  pub(crate) fn patterns_proptest(self) -> impl proptest::strategy::Strategy<Value = u64> {
    0 ..= self.layout().max_bits()
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any bit pattern of this
  /// format that is not a NaN.
  pub(crate) fn patterns_proptest_non_nan(self) -> impl proptest::strategy::Strategy<Value = u64> {
    use proptest::prelude::*;
    self.patterns_proptest().prop_filter("NaN", move |&bits| !self.widen(bits).is_nan())
  }
}

/// Check whether `bits`, in `format`, is the correctly rounded (to nearest, ties to even) encoding
/// of `wide`, which must not be a NaN.
///
/// This is the obvious, slow rendition: compare the distance from `wide` to the value of `bits`
/// against the distance to each of its neighbours. Above the largest finite value, the infinity
/// pattern stands for the value the next bit pattern would have if the exponent were unbounded.
pub(crate) fn is_correct_rounded(format: Format, wide: f64, bits: u64) -> bool {
  debug_assert!(!wide.is_nan());
  let layout = format.layout();
  let sign_bit = 1u64 << (layout.bits - 1);
  let infinity = ((1u64 << layout.exp_bits) - 1) << layout.frac_bits;
  let magnitude = bits & !sign_bit;

  if (bits & sign_bit != 0) != wide.is_sign_negative() {
    return false
  }
  let target = wide.abs();
  if target.is_infinite() || magnitude > infinity {
    return target.is_infinite() && magnitude == infinity
  }

  let value = |m: u64| {
    if m < infinity {
      format.widen(m)
    } else {
      2. * format.widen(infinity - 1) - format.widen(infinity - 2)
    }
  };
  let is_even = magnitude % 2 == 0;
  let here = (target - value(magnitude)).abs();
  let beats = |there: f64| here < there || (here == there && is_even);

  let below = magnitude.checked_sub(1).map(|m| (target - value(m)).abs());
  let above = (magnitude < infinity).then(|| (target - value(magnitude + 1)).abs());
  below.map_or(true, beats) && above.map_or(true, beats)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn patterns_exhaustive() {
    assert_eq!(Format::Bf8.patterns_exhaustive().count(), 256);
    assert_eq!(Format::Bf16.patterns_exhaustive().count(), 65536);
    assert_eq!(Format::Fp16.patterns_exhaustive().last(), Some(0xFFFF));
  }

  #[test]
  fn is_correct_rounded_bf16() {
    let f = |bits: u32| f64::from(f32::from_bits(bits));
    assert!(is_correct_rounded(Format::Bf16, f(0x3f80_8000), 0x3f80));
    assert!(!is_correct_rounded(Format::Bf16, f(0x3f80_8000), 0x3f81));
    assert!(is_correct_rounded(Format::Bf16, f(0x3f80_8001), 0x3f81));
    assert!(!is_correct_rounded(Format::Bf16, f(0x3f80_8001), 0x3f80));
    assert!(is_correct_rounded(Format::Bf16, f(0x7f7f_ffff), 0x7f80));
    assert!(!is_correct_rounded(Format::Bf16, f(0x7f7f_0000), 0x7f80));
    assert!(!is_correct_rounded(Format::Bf16, -1.0, 0x3f80));
  }
}
