use criterion::{criterion_group, criterion_main, Criterion};
use gx2_swizzle::{swizzle, TileMode};

use criterion::BenchmarkId;
use criterion::Throughput;

fn swizzle_benchmark(c: &mut Criterion) {
    // GX2_SURFACE_FORMAT_UNORM_R8_G8_B8_A8
    let format = 0x1a;
    let bytes_per_pixel = 4;
    // We'll allocate the size needed by the largest run.
    // This avoids including the allocation time in the benchmark.
    let source = vec![0u8; 512 * 512 * bytes_per_pixel];

    let mut group = c.benchmark_group("swizzle");
    for size in [32, 64, 128, 256, 512] {
        group.throughput(Throughput::Bytes((size * size * bytes_per_pixel) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                swizzle(
                    size as u32,
                    size as u32,
                    format,
                    TileMode::Tiled2dThin1,
                    0,
                    size as u32,
                    &source[..size * size * bytes_per_pixel],
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, swizzle_benchmark);
criterion_main!(benches);
