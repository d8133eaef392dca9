//! Benchmarks for the query pipeline
//!
//! Run with: cargo bench --package query
//!
//! This benchmarks filtering, sorting, and pagination over a synthetic
//! catalog large enough to make the per-stage costs visible.

use catalog::{Category, Extension, Listing, ListingStatus};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use query::{FilterSpec, execute};

fn build_test_catalog(count: u32) -> Vec<Listing> {
    (1..=count)
        .map(|i| Listing {
            id: i,
            name: format!("domain{i:05}.com"),
            category: Category::ALL[(i as usize) % Category::ALL.len()],
            extension: Extension::ALL[(i as usize) % Extension::ALL.len()],
            price: 500 + (i as u64 * 37) % 5000,
            description: format!("Synthetic listing number {i} for benchmarking"),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000 + i as i64,
            updated_at: None,
        })
        .collect()
}

fn bench_unfiltered_page(c: &mut Criterion) {
    let catalog = build_test_catalog(10_000);
    let spec = FilterSpec {
        sort_by: "newest".to_string(),
        ..Default::default()
    };

    c.bench_function("execute_unfiltered_10k", |b| {
        b.iter(|| {
            let page = execute(black_box(catalog.clone()), black_box(&spec), 1).unwrap();
            black_box(page)
        })
    });
}

fn bench_filtered_page(c: &mut Criterion) {
    let catalog = build_test_catalog(10_000);
    let spec = FilterSpec {
        search: "42".to_string(),
        category: "Technology".to_string(),
        min_price: "1000".to_string(),
        max_price: "4000".to_string(),
        sort_by: "price-low".to_string(),
        ..Default::default()
    };

    c.bench_function("execute_filtered_10k", |b| {
        b.iter(|| {
            let page = execute(black_box(catalog.clone()), black_box(&spec), 2).unwrap();
            black_box(page)
        })
    });
}

criterion_group!(benches, bench_unfiltered_page, bench_filtered_page);
criterion_main!(benches);
