use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tapered_posit::{p32, p64, Posit, RoundFrom, Value};

// Establish a baseline by comparing with a single fpu add

fn baseline_fpu_add_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f64", |b| {
    b.iter(|| black_box(3.14) + black_box(69.420));
  });
}

// Time decoding and encoding 1 posit

const NUMS_32: [i32; 4] = [
  0b00101011100101110110111101100011u32 as _,
  0b00000000010101010100111100100101u32 as _,
  0b11010100001001010100101000101110u32 as _,
  0b01110010011111001111001001110000u32 as _,
];

const NUMS_64: [i64; 4] = [
  0b0010101110010111011011110110001100101001101111011111000111100111u64 as _,
  0b0000000001010101010011110010010100011000100101110110100010000011u64 as _,
  0b1101010000100101010010100010111011010010011010111001111111001011u64 as _,
  0b0111001001111100111100100111000011010111000101000001001101001111u64 as _,
];

fn decode_p32(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_p32");
  for num in NUMS_32.map(p32::from_bits) {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("0b{:032b}", num.to_bits())), &num, |b, &num| {
      b.iter(|| black_box(num).decode());
    });
  }
  g.finish();
}

fn decode_p64(c: &mut Criterion) {
  let mut g = c.benchmark_group("decode_p64");
  for num in NUMS_64.map(p64::from_bits) {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::from_parameter(format_args!("0b{:064b}", num.to_bits())), &num, |b, &num| {
      b.iter(|| black_box(num).decode());
    });
  }
  g.finish();
}

/// Encode the exact value of each posit back, both through the scratch-buffer encoder and
/// through the field objects.
fn encode<const N: u32, const ES: u32, Int: tapered_posit::Int>(
  c: &mut Criterion,
  name: &str,
  nums: impl IntoIterator<Item = Posit<N, ES, Int>>,
) {
  let mut g = c.benchmark_group(name);
  for num in nums {
    let value = num.to_value();
    let id = format!("{}", num.hex_format());
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("convert_to_posit", &id), &value, |b, value| {
      b.iter(|| Posit::<N, ES, Int>::convert_to_posit(black_box(value)));
    });
    g.bench_with_input(BenchmarkId::new("round_from_fields", &id), &value, |b, value| {
      b.iter(|| Posit::<N, ES, Int>::round_from_fields(black_box(value)));
    });
  }
  g.finish();
}

fn encode_p32(c: &mut Criterion) {
  encode(c, "encode_p32", NUMS_32.map(p32::from_bits))
}

fn encode_p64(c: &mut Criterion) {
  encode(c, "encode_p64", NUMS_64.map(p64::from_bits))
}

// Time conversions from native types

const FLOATS: [f64; 4] = [3.14159, -2.5e-7, 1614591918.0, 1e300];

fn from_f64(c: &mut Criterion) {
  let mut g = c.benchmark_group("from_f64");
  for x in FLOATS {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("p32", x), &x, |b, &x| {
      b.iter(|| p32::round_from(black_box(x)));
    });
    g.bench_with_input(BenchmarkId::new("p64", x), &x, |b, &x| {
      b.iter(|| p64::round_from(black_box(x)));
    });
  }
  g.finish();
}

fn from_value(c: &mut Criterion) {
  let value = Value::from(1614591918_i64);
  c.bench_function("from_value_p32", |b| {
    b.iter(|| p32::convert_to_posit(black_box(&value)));
  });
}

criterion_group!(baseline,
  baseline_fpu_add_f64,
);

criterion_group!(codec,
  decode_p32,
  decode_p64,
  encode_p32,
  encode_p64,
);

criterion_group!(conversions,
  from_f64,
  from_value,
);

criterion_main!(baseline, codec, conversions);
