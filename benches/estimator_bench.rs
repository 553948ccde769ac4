// ABOUTME: Criterion benchmarks for the requirement, prediction, and herd report paths
// ABOUTME: Measures single-animal formulas and sequential versus parallel report generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

//! Criterion benchmarks for the estimator.
//!
//! Covers the per-animal formulas and whole-herd report generation at several
//! herd sizes, sequential and on the rayon pool.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use herdwise::config::EstimatorConfig;
use herdwise::formatters::OutputFormat;
use herdwise::nutrition::{calculate_requirements, BreedCatalog, PerformancePredictor};
use herdwise::reports::{render_report, HerdReportGenerator};
use herdwise_core::models::{AnimalRecord, PhysiologicalStage};

const HERD_SIZES: [usize; 3] = [100, 1_000, 10_000];

const BREEDS: [&str; 5] = ["angus", "Hereford", "charolais", "holstein", "wagyu"];
const STAGES: [&str; 4] = ["growing", "fattening", "lactating", "maintenance"];

/// Deterministic herd with a few unknown breeds mixed in
#[allow(clippy::cast_precision_loss)]
fn generate_herd(count: usize) -> Vec<AnimalRecord> {
    (0..count)
        .map(|index| {
            AnimalRecord::new(format!("bench_{index}"), BREEDS[index % BREEDS.len()])
                .with_sex(if index % 2 == 0 { "male" } else { "female" })
                .with_weight(90.0 + ((index * 37) % 600) as f64)
                .with_birth_date(format!(
                    "{}-{:02}-{:02}",
                    2019 + index % 5,
                    index % 12 + 1,
                    index % 28 + 1
                ))
                .with_stage(STAGES[index % STAGES.len()])
        })
        .collect()
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

fn bench_requirements(c: &mut Criterion) {
    let config = EstimatorConfig::<true>::default();
    let mut group = c.benchmark_group("requirements");

    for stage in PhysiologicalStage::ALL {
        group.bench_with_input(
            BenchmarkId::new("calculate", stage),
            &stage,
            |b, stage| {
                b.iter(|| {
                    calculate_requirements(
                        black_box(412.0),
                        black_box(1.1),
                        black_box(14.0),
                        *stage,
                        &config.requirements,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let config = EstimatorConfig::<true>::default();
    let catalog = BreedCatalog::builtin();
    let predictor = PerformancePredictor::new(&config);
    let Some(angus) = catalog.get_by_id("angus") else {
        return;
    };

    c.bench_function("predict_daily_gain", |b| {
        b.iter(|| {
            predictor.predict_daily_gain(
                angus,
                black_box(2.5),
                black_box(9.0),
                black_box(350.0),
            )
        });
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_herd_report(c: &mut Criterion) {
    let config = EstimatorConfig::<true>::default();
    let catalog = BreedCatalog::builtin();
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());
    let mut group = c.benchmark_group("herd_report");

    for size in HERD_SIZES {
        let herd = generate_herd(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &herd, |b, herd| {
            b.iter(|| generator.generate(black_box(herd)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &herd, |b, herd| {
            b.iter(|| generator.generate_parallel(black_box(herd)));
        });
    }

    group.finish();
}

fn bench_csv_export(c: &mut Criterion) {
    let config = EstimatorConfig::<true>::default();
    let catalog = BreedCatalog::builtin();
    let Ok(report) =
        HerdReportGenerator::new(&catalog, &config, report_date()).report(&generate_herd(1_000))
    else {
        return;
    };

    c.bench_function("render_csv_1000", |b| {
        b.iter(|| render_report(black_box(&report), OutputFormat::Csv));
    });
}

criterion_group!(
    benches,
    bench_requirements,
    bench_prediction,
    bench_herd_report,
    bench_csv_export
);
criterion_main!(benches);
