// Criterion benchmarks for the matching core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datemate_algo::core::{prioritize, MatchSelector};
use datemate_algo::models::{Gender, Interest, UserProfile};

fn create_candidate(id: usize) -> UserProfile {
    let gender = if id % 2 == 0 { Gender::Female } else { Gender::Male };
    let interest = match id % 3 {
        0 => Interest::Boys,
        1 => Interest::Girls,
        _ => Interest::Both,
    };

    UserProfile::new(format!("user-{}", id))
        .with_gender(gender)
        .with_interest(interest)
}

fn create_requester() -> UserProfile {
    UserProfile::new("current_user")
        .with_gender(Gender::Male)
        .with_interest(Interest::Girls)
}

fn bench_prioritize(c: &mut Criterion) {
    let requester = create_requester();
    let pool: Vec<UserProfile> = (0..1000).map(create_candidate).collect();

    c.bench_function("prioritize_1000", |b| {
        b.iter(|| prioritize(black_box(&requester), black_box(pool.clone())));
    });
}

fn bench_select_matches(c: &mut Criterion) {
    let selector = MatchSelector::default();
    let requester = create_requester();

    let mut group = c.benchmark_group("matching");

    for pool_size in [10, 50, 100, 500, 1000].iter() {
        let pool: Vec<UserProfile> = (0..*pool_size).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("select_matches", pool_size),
            pool_size,
            |b, _| {
                b.iter(|| {
                    selector.select_matches(
                        black_box(&requester),
                        black_box(pool.clone()),
                        black_box(5),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_uncapped_selector(c: &mut Criterion) {
    // A cap as large as the pool, to measure the full two-pass scan
    let selector = MatchSelector::new(1000);
    let requester = create_requester();
    let pool: Vec<UserProfile> = (0..1000).map(create_candidate).collect();

    c.bench_function("select_matches_uncapped_1000", |b| {
        b.iter(|| {
            selector.select_matches(
                black_box(&requester),
                black_box(pool.clone()),
                black_box(50),
            )
        });
    });
}

criterion_group!(benches, bench_prioritize, bench_select_matches, bench_uncapped_selector);
criterion_main!(benches);
