use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fp_decode::{Bf8, Bf16, Codec, Decoded, Format};
use half::f16;

// Establish a baseline by comparing with the native conversions

fn baseline_f64_to_f32(c: &mut Criterion) {
  c.bench_function("baseline_f64_to_f32", |b| {
    b.iter(|| black_box(3.14_f64) as f32);
  });
}

fn baseline_f64_to_f16(c: &mut Criterion) {
  c.bench_function("baseline_f64_to_f16", |b| {
    b.iter(|| f16::from_f64(black_box(3.14_f64)));
  });
}

// Time narrowing 1 carrier value to a brain float

const NUMS_F32: [f32; 4] = [3.0, 3.14159, -1.0e-40, f32::NAN];

fn narrow_bf16(c: &mut Criterion) {
  let mut g = c.benchmark_group("narrow_bf16");
  for num in NUMS_F32 {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{:#010x}", num.to_bits())), &num, |b, &num| {
      b.iter(|| Bf16::narrow(black_box(num)));
    });
  }
  g.finish();
}

const NUMS_F16: [f16; 4] = [f16::from_f32_const(3.0), f16::from_f32_const(3.14159), f16::from_f32_const(-1.0e-6), f16::NAN];

fn narrow_bf8(c: &mut Criterion) {
  let mut g = c.benchmark_group("narrow_bf8");
  for num in NUMS_F16 {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("{:#06x}", num.to_bits())), &num, |b, &num| {
      b.iter(|| Bf8::narrow(black_box(num)));
    });
  }
  g.finish();
}

// Time parsing 1 literal, per format and per kind of literal

const LITERALS: [&str; 4] = ["0x4200", "3.14159", "0x1.8p1", "epsilon"];

fn parse(c: &mut Criterion) {
  for format in Format::ALL {
    let mut g = c.benchmark_group(format!("parse_{format}"));
    for literal in LITERALS {
      g.throughput(Throughput::Elements(1));
      g.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
        b.iter(|| format.decode(black_box(literal)));
      });
    }
    g.finish();
  }
}

// Time rendering the full report

fn render(c: &mut Criterion) {
  let mut g = c.benchmark_group("render");
  for format in Format::ALL {
    let Some(decoded) = Decoded::from_bits(format, format.epsilon_bits()) else { continue };
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format), &decoded, |b, &decoded| {
      b.iter(|| black_box(decoded).report().to_string());
    });
  }
  g.finish();
}

criterion_group!(baseline,
  baseline_f64_to_f32,
  baseline_f64_to_f16,
);

criterion_group!(narrow,
  narrow_bf16,
  narrow_bf8,
);

criterion_group!(text,
  parse,
  render,
);

criterion_main!(baseline, narrow, text);
