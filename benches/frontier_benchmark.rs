use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wavefront::VertexSubset;

fn bench_representation_conversion(c: &mut Criterion) {
    let n = 1_000_000;
    let ids: Vec<usize> = (0..n).step_by(13).collect();

    c.bench_function("frontier_sparse_to_dense", |b| {
        b.iter(|| {
            let mut s = VertexSubset::from_sparse(n, ids.clone());
            s.materialize_dense();
            black_box(s.len())
        });
    });

    c.bench_function("frontier_dense_to_sparse", |b| {
        let mut dense = VertexSubset::from_sparse(n, ids.clone());
        dense.materialize_dense();
        b.iter(|| {
            let mut s = VertexSubset::from_words(
                n,
                dense.as_bitmap().unwrap().words().iter().map(|w| {
                    w.load(core::sync::atomic::Ordering::Relaxed)
                }).collect(),
            );
            black_box(s.materialize_sparse().len())
        });
    });

    c.bench_function("frontier_dense_popcount", |b| {
        let mut dense = VertexSubset::from_sparse(n, ids.clone());
        dense.materialize_dense();
        let bits = dense.as_bitmap().unwrap();
        b.iter(|| black_box(bits.count_ones()));
    });
}

criterion_group!(benches, bench_representation_conversion);
criterion_main!(benches);
