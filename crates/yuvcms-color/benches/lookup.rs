//! Row applier throughput.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use yuvcms_color::{Channel, TransformTable};

fn bench_apply_row(c: &mut Criterion) {
    let table = TransformTable::shared();
    let width = 720usize;
    let y: Vec<u8> = (0..width).map(|i| (i * 7) as u8).collect();
    let u: Vec<u8> = (0..width).map(|i| (i * 13 + 5) as u8).collect();
    let v: Vec<u8> = (0..width).map(|i| (i * 29 + 11) as u8).collect();
    let mut dst = vec![0u8; width];

    let mut group = c.benchmark_group("table");
    group.throughput(Throughput::Bytes(width as u64));
    group.bench_function("apply_row_sd", |b| {
        b.iter(|| {
            for ch in Channel::ALL {
                table.apply_row(black_box(ch), &y, &u, &v, &mut dst);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_apply_row);
criterion_main!(benches);
