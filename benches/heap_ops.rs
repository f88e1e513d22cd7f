use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fixed_heap::{heap_sort, Heap};
use rand::prelude::*;

fn random_keys(n: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<i32>()).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let keys = random_keys(1024);

    c.bench_function("insert", |b| {
        b.iter_batched(
            || Heap::new(keys.len()),
            |mut heap| {
                for &k in &keys {
                    heap.insert(k).unwrap();
                }
                heap
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("extract_max", |b| {
        b.iter_batched(
            || Heap::from_vec(keys.clone()),
            |mut heap| {
                while heap.extract_max().is_ok() {}
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("build", |b| {
        let mut heap = Heap::new(keys.len());
        b.iter(|| heap.build(keys.clone()).unwrap())
    });

    c.bench_function("heap_sort", |b| {
        b.iter_batched(
            || keys.clone(),
            |mut data| heap_sort(&mut data),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
