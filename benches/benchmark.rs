// Query layer benchmarks over a synthetic dataset
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listx_core::{query, Listing};

const NAMES: [&str; 5] = [
    "Cozy Loft",
    "Sunny room near park",
    "Garden Cottage",
    "Quiet studio",
    "Family home with loft",
];

fn generate_dataset(size: usize) -> Vec<Listing> {
    (0..size)
        .map(|i| {
            let id = (100_000 + i).to_string();
            let price = format!("${},{:03}.50", i % 3, (i * 37) % 1000);
            Listing::from_pairs([
                ("id", id.as_str()),
                ("NAME", NAMES[i % NAMES.len()]),
                ("price", price.as_str()),
            ])
            .enrich(i)
        })
        .collect()
}

fn benchmark_enrich(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("listx", size), size, |b, &size| {
            b.iter(|| black_box(generate_dataset(size)));
        });
    }

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [1000, 10000, 100000].iter() {
        let dataset = generate_dataset(*size);
        let last_id = (100_000 + size - 1).to_string();

        group.bench_with_input(BenchmarkId::new("get_by_id", size), &dataset, |b, data| {
            b.iter(|| black_box(query::get_by_id(data, &last_id)));
        });

        group.bench_with_input(BenchmarkId::new("search_by_name", size), &dataset, |b, data| {
            b.iter(|| black_box(query::search_by_name(data, "LOFT")));
        });

        group.bench_with_input(BenchmarkId::new("filter_by_price", size), &dataset, |b, data| {
            b.iter(|| black_box(query::filter_by_price_range(data, 500.0, 1500.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_enrich, benchmark_queries);
criterion_main!(benches);
