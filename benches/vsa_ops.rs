use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hypertrit::{
    bind, bind_in_place, bundle, dot, permute, similarity, PackedTritVec, TritVec, DIM,
};

fn bench_dense_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_ops");

    // Deterministic vectors for stable benches
    let a = TritVec::from_symbol("alpha", DIM).unwrap();
    let b = TritVec::from_symbol("beta", DIM).unwrap();
    let cvec = TritVec::from_symbol("gamma", DIM).unwrap();

    group.bench_function("bind", |bencher| {
        bencher.iter(|| bind(black_box(&a), black_box(&b)).unwrap())
    });

    group.bench_function("bind_in_place", |bencher| {
        let mut out = TritVec::zeros(DIM).unwrap();
        bencher.iter(|| bind_in_place(&mut out, black_box(&a), black_box(&b)).unwrap())
    });

    group.bench_function("bundle_3", |bencher| {
        bencher.iter(|| bundle([black_box(&a), black_box(&b), black_box(&cvec)]).unwrap())
    });

    group.bench_function("dot", |bencher| {
        bencher.iter(|| dot(black_box(&a), black_box(&b)).unwrap())
    });

    group.bench_function("similarity", |bencher| {
        bencher.iter(|| similarity(black_box(&a), black_box(&b)).unwrap())
    });

    group.bench_function("permute", |bencher| {
        bencher.iter(|| permute(black_box(&a), black_box(1234)).unwrap())
    });

    group.finish();
}

fn bench_packed_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_ops");

    let a = PackedTritVec::pack(&TritVec::from_symbol("alpha", DIM).unwrap()).unwrap();
    let b = PackedTritVec::pack(&TritVec::from_symbol("beta", DIM).unwrap()).unwrap();
    let cvec = PackedTritVec::pack(&TritVec::from_symbol("gamma", DIM).unwrap()).unwrap();

    group.bench_function("bind", |bencher| {
        bencher.iter(|| black_box(&a).bind(black_box(&b)).unwrap())
    });

    group.bench_function("bind_into", |bencher| {
        let mut out = PackedTritVec::zeros(DIM).unwrap();
        bencher.iter(|| black_box(&a).bind_into(black_box(&b), &mut out).unwrap())
    });

    group.bench_function("bundle_3", |bencher| {
        bencher.iter(|| {
            PackedTritVec::bundle([black_box(&a), black_box(&b), black_box(&cvec)]).unwrap()
        })
    });

    group.bench_function("dot", |bencher| {
        bencher.iter(|| black_box(&a).dot(black_box(&b)).unwrap())
    });

    group.bench_function("similarity", |bencher| {
        bencher.iter(|| black_box(&a).similarity(black_box(&b)).unwrap())
    });

    group.finish();
}

fn bench_pack_unpack(c: &mut Criterion) {
    let dims = [1_024usize, 10_000, 65_536];

    let mut group = c.benchmark_group("pack_unpack");

    for dim in dims {
        let dense = TritVec::random(dim, 7).unwrap();
        let packed = PackedTritVec::pack(&dense).unwrap();

        group.bench_with_input(BenchmarkId::new("pack", dim), &dense, |bencher, v| {
            bencher.iter(|| PackedTritVec::pack(black_box(v)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("unpack", dim), &packed, |bencher, p| {
            bencher.iter(|| black_box(p).unpack().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dense_ops, bench_packed_ops, bench_pack_unpack);
criterion_main!(benches);
