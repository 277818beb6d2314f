//! Benchmarks for tidekv engine operations

use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;
use tidekv::{Config, Engine};

fn engine_benchmarks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    // Thresholds raised so flush/merge cost does not dominate the write path.
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .memtable_obj_limit(4096)
        .wal_obj_limit(4096)
        .journal_line_limit(4096)
        .build();
    let mut engine = Engine::open(config).unwrap();

    let mut i = 0usize;
    c.bench_function("upsert", |b| {
        b.iter(|| {
            engine
                .upsert(&format!("key{}", i % 1024), "value")
                .unwrap();
            i += 1;
        })
    });

    c.bench_function("get_memtable_hit", |b| {
        b.iter(|| engine.get("key1").unwrap())
    });
}

criterion_group!(benches, engine_benchmarks);
criterion_main!(benches);
