// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering.
//!
//! Measures the performance of:
//! - Deriving the category set from a catalog
//! - Computing the visible subset for a filter

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::catalog::{visible_projects, Catalog, Category, CategoryFilter, Project};
use std::hint::black_box;

/// Builds a synthetic catalog large enough to make filtering measurable.
fn synthetic_catalog(size: u32) -> Catalog {
    let categories = [
        "Branding",
        "UI Design",
        "Marketing",
        "Web Design",
        "Packaging",
        "Print",
    ];

    let projects: Vec<Project> = (0..size)
        .map(|i| {
            Project::new(
                i + 1,
                format!("Project {i}"),
                categories[(i as usize) % categories.len()],
                "A short summary.",
                "A longer description of the project and its outcome.",
                &["Tag A", "Tag B"],
            )
        })
        .collect();

    Catalog::new(projects)
}

fn bench_category_set_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filtering");

    let catalog = synthetic_catalog(1_000);

    group.bench_function("derive_category_set", |b| {
        b.iter(|| {
            let rebuilt = Catalog::new(catalog.projects().to_vec());
            black_box(rebuilt.categories().len());
        });
    });

    group.finish();
}

fn bench_visible_projects(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filtering");

    let catalog = synthetic_catalog(1_000);
    let filter = CategoryFilter::Only(Category::new("Print"));

    group.bench_function("visible_projects_all", |b| {
        b.iter(|| {
            let visible = visible_projects(catalog.projects(), &CategoryFilter::All);
            black_box(visible.len());
        });
    });

    group.bench_function("visible_projects_single_category", |b| {
        b.iter(|| {
            let visible = visible_projects(catalog.projects(), &filter);
            black_box(visible.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_category_set_derivation, bench_visible_projects);
criterion_main!(benches);
