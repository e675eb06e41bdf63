use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use fp_decode::{Format, ParseError, Report};

const NOTES: &str = "\
Notes: 1. If NUMBER is a non-negative integer (decimal, hex, octal, or
          binary) it is taken as the bit pattern representation of
          the floating point value.
       2. If NUMBER contains a decimal (or binary) point, it is
          taken as the desired value itself.
       3. Underscores can be inserted in NUMBER for readability.
       4. The special floating point values epsilon, inf, and nan
          are also supported. Epsilon is defined as the smallest
          value of x such that 1.0 + x > 1.0.

Examples: fpdecode --fp16 0x4200
          fpdecode --fp16 0b0_10000_1000000000
          fpdecode --fp32 0x4040_0000
          fpdecode --fp32 0x1.8p1
          fpdecode --fp32 3.0
          fpdecode --fp64 epsilon
          fpdecode --fp64 inf
          fpdecode --fp64 nan";

/// Show the value and the bit fields of a bf8, bf16, fp16, fp32, or fp64 number.
#[derive(Parser, Debug)]
#[command(version, about, after_help = NOTES, arg_required_else_help = true)]
#[command(group(ArgGroup::new("format").args(["bf8", "bf16", "fp16", "fp32", "fp64"])))]
struct Cli {
  /// 8-bit brain float (1 sign, 5 exponent, 2 fraction bits)
  #[arg(long)]
  bf8: bool,

  /// 16-bit brain float (1 sign, 8 exponent, 7 fraction bits)
  #[arg(long)]
  bf16: bool,

  /// IEEE-754 half precision (1 sign, 5 exponent, 10 fraction bits)
  #[arg(long)]
  fp16: bool,

  /// IEEE-754 single precision (1 sign, 8 exponent, 23 fraction bits)
  #[arg(long)]
  fp32: bool,

  /// IEEE-754 double precision (1 sign, 11 exponent, 52 fraction bits) [default]
  #[arg(long)]
  fp64: bool,

  /// A bit pattern, a value, or one of epsilon, inf, nan
  #[arg(allow_hyphen_values = true)]
  number: String,
}

impl Cli {
  fn format(&self) -> Format {
    let flags = [self.bf8, self.bf16, self.fp16, self.fp32, self.fp64];
    Format::ALL.into_iter()
      .zip(flags)
      .find_map(|(format, set)| set.then_some(format))
      .unwrap_or(Format::Fp64)
  }
}

fn run(cli: &Cli) -> Result<Report> {
  let format = cli.format();
  log::debug!("decoding {:?} as {format}", cli.number);
  let decoded = format.decode(&cli.number)
    .with_context(|| format!("Invalid {format} number: {}", cli.number))?;
  Ok(decoded.report())
}

fn main() -> ExitCode {
  env_logger::init();
  let cli = Cli::parse();
  match run(&cli) {
    Ok(report) => {
      print!("{report}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      match err.downcast_ref::<ParseError>() {
        Some(cause) => eprintln!("{err} ({})", cause.kind()),
        None => eprintln!("{err:#}"),
      }
      ExitCode::FAILURE
    }
  }
}
