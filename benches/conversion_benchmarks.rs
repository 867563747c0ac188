use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pcm_convert::convert::{bit_depth, channels};
use pcm_convert::{Buffer, Format, Sample};

const SAMPLE_RATE: u32 = 48000;

/// One second of interleaved noise-like samples
fn one_second(channels: u16) -> Vec<Sample> {
    (0..SAMPLE_RATE as usize * channels as usize)
        .map(|i| ((i * 7919) % 65536) as Sample - 32768)
        .collect()
}

/// Benchmark channel remapping for each supported shape
fn bench_channel_remap(c: &mut Criterion) {
    let mut group = c.benchmark_group("channels");

    for (from, to) in [(1u16, 2u16), (2, 1), (6, 2), (6, 1), (1, 6)] {
        let samples = one_second(from);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}to{}", from, to)),
            &samples,
            |b, samples| {
                b.iter(|| black_box(channels::convert(black_box(samples), from, to)));
            },
        );
    }
    group.finish();
}

/// Benchmark in-place bit depth rescaling
fn bench_bit_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_depth");

    for (from, to) in [(8u16, 16u16), (16, 8), (16, 24), (24, 16)] {
        let samples = one_second(2);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}to{}", from, to)),
            &samples,
            |b, samples| {
                b.iter_batched_ref(
                    || samples.clone(),
                    |buf| bit_depth::convert(black_box(buf), from, to),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

/// Benchmark a full Buffer conversion (stereo 16-bit to mono 8-bit)
fn bench_buffer_convert(c: &mut Criterion) {
    let source = Buffer::new(one_second(2), Format::stereo(16, SAMPLE_RATE).unwrap());
    let target = Format::mono(8, SAMPLE_RATE).unwrap();

    c.bench_function("buffer_convert_stereo16_to_mono8", |b| {
        b.iter(|| black_box(source.convert(black_box(target))));
    });
}

criterion_group!(
    benches,
    bench_channel_remap,
    bench_bit_depth,
    bench_buffer_convert
);
criterion_main!(benches);
