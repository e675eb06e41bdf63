use super::*;

use crate::error::UnknownFormat;

impl Format {
  /// The lowercase name of `self`, as used on the command line (`bf8`, `bf16`, `fp16`, `fp32`,
  /// or `fp64`).
  pub const fn name(self) -> &'static str {
    match self {
      Format::Bf8 => "bf8",
      Format::Bf16 => "bf16",
      Format::Fp16 => "fp16",
      Format::Fp32 => "fp32",
      Format::Fp64 => "fp64",
    }
  }

  /// Widen a bit pattern of this format to its value, as an `f64`. Bits higher than the lowest
  /// [`Layout::bits`] are ignored.
  pub fn widen(self, bits: u64) -> f64 {
    use crate::underlying::{Carrier, Sealed};
    dispatch!(self, C => C::widen(<<C as Codec>::Bits as Sealed>::of_u64(bits)).to_f64())
  }

  /// Narrow a value to a bit pattern of this format.
  ///
  /// The value is first rounded to the format's carrier (fp16 for bf8 and fp16, fp32 for bf16
  /// and fp32, fp64 for itself), then [`Codec::narrow`] is applied. Returns `None` if `value` is
  /// finite but overflows the carrier.
  pub fn narrow(self, value: f64) -> Option<u64> {
    use crate::underlying::Carrier;
    dispatch!(self, C => {
      let wide = <<C as Codec>::Carrier as Carrier>::from_f64(value)?;
      Some(C::narrow(wide).into())
    })
  }
}

impl core::fmt::Display for Format {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl core::str::FromStr for Format {
  type Err = UnknownFormat;

  /// Parse a format name, case-insensitively, with or without the leading `--`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let name = s.strip_prefix("--").unwrap_or(s);
    Format::ALL.into_iter()
      .find(|format| format.name().eq_ignore_ascii_case(name))
      .ok_or_else(|| UnknownFormat(s.to_owned()))
  }
}

impl Decoded {
  /// Construct from a raw bit pattern. Returns `None` if `bits` is wider than `format`.
  ///
  /// ```
  /// # use fp_decode::{Decoded, Format};
  /// let three = Decoded::from_bits(Format::Fp16, 0x4200).unwrap();
  /// assert_eq!(three.value(), 3.0);
  /// assert!(Decoded::from_bits(Format::Fp16, 0x1_0000).is_none());
  /// ```
  pub fn from_bits(format: Format, bits: u64) -> Option<Self> {
    (bits <= format.layout().max_bits()).then(|| Self { format, bits, value: format.widen(bits) })
  }

  /// The format `self` is encoded in.
  #[inline]
  pub const fn format(self) -> Format {
    self.format
  }

  /// The raw bit pattern.
  #[inline]
  pub const fn bits(self) -> u64 {
    self.bits
  }

  /// The value encoded by [`Self::bits`], widened (exactly, unless it's NaN) to an `f64`.
  #[inline]
  pub const fn value(self) -> f64 {
    self.value
  }

  /// Split the bit pattern into its sign, exponent, and fraction fields.
  #[inline]
  pub fn fields(self) -> Fields {
    Fields::crack(self.bits, self.format.layout())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_roundtrip() {
    for format in Format::ALL {
      assert_eq!(format.name().parse::<Format>(), Ok(format));
      assert_eq!(format.to_string(), format.name());
    }
  }

  #[test]
  fn parse_flag_and_case() {
    assert_eq!("--bf16".parse::<Format>(), Ok(Format::Bf16));
    assert_eq!("FP32".parse::<Format>(), Ok(Format::Fp32));
    assert_eq!("fp8".parse::<Format>(), Err(UnknownFormat("fp8".into())));
  }

  #[test]
  fn from_bits_range() {
    for format in Format::ALL {
      let max = format.layout().max_bits();
      assert!(Decoded::from_bits(format, max).is_some());
      if let Some(over) = max.checked_add(1) {
        assert!(Decoded::from_bits(format, over).is_none());
      }
    }
  }

  #[test]
  fn widen() {
    assert_eq!(Format::Bf8.widen(0x42), 3.0);
    assert_eq!(Format::Bf16.widen(0x4040), 3.0);
    assert_eq!(Format::Fp16.widen(0x4200), 3.0);
    assert_eq!(Format::Fp32.widen(0x4040_0000), 3.0);
    assert_eq!(Format::Fp64.widen(0x4008_0000_0000_0000), 3.0);
  }

  #[test]
  fn narrow() {
    assert_eq!(Format::Bf8.narrow(3.0), Some(0x42));
    assert_eq!(Format::Bf16.narrow(3.0), Some(0x4040));
    assert_eq!(Format::Fp16.narrow(3.0), Some(0x4200));
    assert_eq!(Format::Fp32.narrow(3.0), Some(0x4040_0000));
    assert_eq!(Format::Fp64.narrow(3.0), Some(0x4008_0000_0000_0000));
  }

  #[test]
  fn narrow_overflow() {
    assert_eq!(Format::Bf8.narrow(1e6), None);
    assert_eq!(Format::Fp16.narrow(1e6), None);
    assert_eq!(Format::Bf16.narrow(1e39), None);
    assert_eq!(Format::Fp32.narrow(1e39), None);
    assert_eq!(Format::Fp64.narrow(f64::MAX), Some(0x7FEF_FFFF_FFFF_FFFF));
  }
}
