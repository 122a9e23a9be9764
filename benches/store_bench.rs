//! Benchmarks for fontdata store growth and primitive access

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fontdata::{GrowthStrategy, StoreConfig, WritableFontData};

/// Append `len` bytes as ULONGs into a fresh growable buffer
fn append_ulongs(config: &StoreConfig, len: usize) -> WritableFontData {
    let data = WritableFontData::with_config(config).unwrap();
    for i in (0..len).step_by(4) {
        data.write_ulong(i, i as u32).unwrap();
    }
    data
}

fn store_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_ulongs");
    for len in [4 * 1024, 256 * 1024] {
        for growth in [GrowthStrategy::Doubling, GrowthStrategy::Segmented] {
            let config = StoreConfig::builder().growth(growth).build();
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", growth), len),
                &len,
                |b, &len| b.iter(|| append_ulongs(&config, black_box(len))),
            );
        }
    }
    group.finish();

    let data = append_ulongs(&StoreConfig::default(), 64 * 1024);
    c.bench_function("checksum_64k", |b| {
        b.iter(|| {
            // Force recomputation by invalidating the cache each round
            data.set_checksum_ranges(&[]);
            black_box(data.checksum().unwrap())
        })
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
