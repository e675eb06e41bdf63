use super::*;

use core::fmt::{Display, Formatter};
use crate::hexfloat;

/// Width of the label column of a [`Report`], colon included.
const LABEL_WIDTH: usize = 11;

impl Decoded {
  /// The value in decimal: the shortest text that parses back to the same `f64`, or `inf`,
  /// `-inf`, `nan`. Exponents are signed and have at least two digits, e.g. `1e+16` or `1e-05`.
  pub fn dec_value(self) -> String {
    match self.value {
      x if x.is_nan() => "nan".into(),
      x if x.is_infinite() => if x > 0. { "inf".into() } else { "-inf".into() },
      x => {
        let text = format!("{x:?}");
        let scientific = text.split_once('e')
          .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
        match scientific {
          Some((mantissa, exponent)) => format!("{mantissa}e{exponent:+03}"),
          None => text,
        }
      }
    }
  }

  /// The value as a [hex float](hexfloat::format), without the trailing zero digits that only
  /// exist because the value was widened to an `f64`.
  ///
  /// ```
  /// # use fp_decode::Format;
  /// assert_eq!(Format::Fp16.decode("3.0").unwrap().hex_value(), "0x1.800p+1");
  /// assert_eq!(Format::Fp32.decode("3.0").unwrap().hex_value(), "0x1.800000p+1");
  /// assert_eq!(Format::Fp64.decode("3.0").unwrap().hex_value(), "0x1.8000000000000p+1");
  /// ```
  pub fn hex_value(self) -> String {
    let mut hex = hexfloat::format(self.value);
    let padding = self.format.hex_padding();
    if let Some(p) = hex.find('p') {
      let keep = p.saturating_sub(padding);
      if hex[keep..p].bytes().all(|b| b == b'0') && hex[..keep].contains('.') {
        hex.replace_range(keep..p, "");
      }
    }
    hex
  }

  /// The raw bit pattern in uppercase hex, e.g. `0x4200`.
  pub fn hex(self) -> String {
    format!("0x{:X}", self.bits)
  }

  /// The [binary rendering](Fields::binary) of the bit pattern.
  pub fn binary(self) -> String {
    self.fields().binary(self.format.layout())
  }

  pub fn sign_info(self) -> &'static str {
    if self.fields().is_negative() { "Negative" } else { "Positive" }
  }

  /// The exponent field, as `"<biased> - <bias> = <unbiased>"`.
  pub fn exponent_info(self) -> String {
    let layout = self.format.layout();
    let fields = self.fields();
    format!("{} - {} = {}", fields.exponent, layout.bias, fields.unbiased_exponent(layout))
  }

  /// The fraction field in uppercase hex, e.g. `0x200`.
  pub fn fraction_hex(self) -> String {
    format!("0x{:X}", self.fields().fraction)
  }

  /// A printable breakdown of `self`; see [`Report`].
  pub fn report(self) -> Report {
    Report(self)
  }
}

/// The full human-readable breakdown of a [`Decoded`] number, as printed by the `fpdecode`
/// binary. For example, for fp16 `3.0`:
///
/// ```text
///
///   DecValue: 3.0
///   HexValue: 0x1.800p+1
///        Hex: 0x4200
///        Key: 1       0
///             5 43210 9876543210
///             S -E5-- ---F10----
///     Binary: 0 10000 1000000000
///       Sign: Positive
///   Exponent: 16 - 15 = 1
///   Fraction: 0x200
///
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Report(Decoded);

impl Display for Report {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    // An empty label continues the previous line's field.
    fn line(f: &mut Formatter<'_>, label: &str, value: impl Display) -> core::fmt::Result {
      let label = if label.is_empty() { String::new() } else { format!("{label}:") };
      writeln!(f, "{label:>w$} {value}", w = LABEL_WIDTH)
    }

    let decoded = self.0;
    writeln!(f)?;
    line(f, "DecValue", decoded.dec_value())?;
    line(f, "HexValue", decoded.hex_value())?;
    line(f, "Hex", decoded.hex())?;
    for (i, key) in decoded.format.key().iter().enumerate() {
      line(f, if i == 0 { "Key" } else { "" }, key)?;
    }
    line(f, "Binary", decoded.binary())?;
    line(f, "Sign", decoded.sign_info())?;
    line(f, "Exponent", decoded.exponent_info())?;
    line(f, "Fraction", decoded.fraction_hex())?;
    writeln!(f)
  }
}
