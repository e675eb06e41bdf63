use super::*;

impl Format {
  /// All formats, narrowest first.
  pub const ALL: [Format; 5] = [Format::Bf8, Format::Bf16, Format::Fp16, Format::Fp32, Format::Fp64];

  /// The field layout of `self`.
  ///
  /// ```
  /// # use fp_decode::Format;
  /// let layout = Format::Bf16.layout();
  /// assert_eq!((layout.bits, layout.exp_bits, layout.frac_bits, layout.bias), (16, 8, 7, 127));
  /// ```
  pub const fn layout(self) -> Layout {
    match self {
      Format::Bf8  => Layout { bits: 8,  exp_bits: 5,  frac_bits: 2,  bias: 15 },
      Format::Fp16 => Layout { bits: 16, exp_bits: 5,  frac_bits: 10, bias: 15 },
      Format::Bf16 => Layout { bits: 16, exp_bits: 8,  frac_bits: 7,  bias: 127 },
      Format::Fp32 => Layout { bits: 32, exp_bits: 8,  frac_bits: 23, bias: 127 },
      Format::Fp64 => Layout { bits: 64, exp_bits: 11, frac_bits: 52, bias: 1023 },
    }
  }

  /// The bit pattern of machine epsilon, the smallest `x` such that `1.0 + x > 1.0`; that is,
  /// 2 <sup>-frac_bits</sup>.
  pub const fn epsilon_bits(self) -> u64 {
    match self {
      Format::Bf8  => 0x34,
      Format::Bf16 => 0x3C00,
      Format::Fp16 => 0x1400,
      Format::Fp32 => 0x3400_0000,
      Format::Fp64 => 0x3CB0_0000_0000_0000,
    }
  }

  /// The number of hex digits that are always `0` in the `f64` hex-float rendering of a value
  /// of this format, because they were introduced purely by widening to `f64`.
  //
  // An f64 has 13 fraction nibbles. bf8 only needs 1, but it is trimmed like bf16 so that both
  // brain floats render with the same precision.
  pub(crate) const fn hex_padding(self) -> usize {
    match self {
      Format::Bf8 | Format::Bf16 => 11,
      Format::Fp16 => 10,
      Format::Fp32 => 7,
      Format::Fp64 => 0,
    }
  }

  /// The field-layout diagram, one line per entry, meant to be printed directly above the
  /// [binary rendering](Decoded::binary) of a number in this format so that each column shows
  /// the bit index and field (`S`ign, `E`xponent, `F`raction) of the digit below it.
  pub const fn key(self) -> &'static [&'static str] {
    match self {
      Format::Bf8 => &[
        "7 65432 10",
        "S -E5-- F2",
      ],
      Format::Fp16 => &[
        "1       0",
        "5 43210 9876543210",
        "S -E5-- ---F10----",
      ],
      Format::Bf16 => &[
        "1      0",
        "5 43210987 6543210",
        "S ---E8--- --F7---",
      ],
      Format::Fp32 => &[
        "3  2          1         0",
        "1 09876543 21098765432109876543210",
        "S ---E8--- ----------F23----------",
      ],
      Format::Fp64 => &[
        "6    5          4         3         2         1         0",
        "3 21098765432 1098765432109876543210987654321098765432109876543210",
        "S ----E11---- ------------------------F52-------------------------",
      ],
    }
  }
}

impl Layout {
  /// The number of sign bits, which is always 1.
  pub const SIGN_BITS: u32 = 1;

  /// The largest valid bit pattern, `2^bits - 1`.
  pub const fn max_bits(self) -> u64 {
    u64::MAX >> (64 - self.bits)
  }
}
