// ABOUTME: Integration tests for herd report generation over raw animal records
// ABOUTME: Row isolation, breed fallback, report modes, parallel ordering, and feed pricing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use herdwise::nutrition::{BreedCatalog, BreedFallbackPolicy, BreedMatch};
use herdwise::reports::{HerdReportGenerator, ReportMode, ReportRow};
use herdwise_core::errors::{ErrorCode, RowError};
use herdwise_core::models::{AnimalRecord, PhysiologicalStage, Sex};

mod common;

use common::{fattening_steer, report_date, sample_herd};

fn invalid_error(row: &ReportRow) -> &RowError {
    row.error()
        .unwrap_or_else(|| panic!("row {} should be invalid", row.id()))
}

// ============================================================================
// BASIC GENERATION
// ============================================================================

#[test]
fn test_empty_herd_gives_empty_report() {
    common::init_test_logging();
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());

    assert!(generator.generate(&[]).is_empty());

    let report = generator.report(&[]).unwrap();
    assert!(report.rows.is_empty());
    assert_eq!(report.summary.animals, 0);
    assert_eq!(report.summary.mean_predicted_gain_kg, None);
    assert_eq!(report.summary.herd_feed_conversion_ratio, None);
    assert!(report.summary.total_daily_feed_cost.abs() < f64::EPSILON);
}

#[test]
fn test_sample_herd_all_rows_computed_in_order() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let herd = sample_herd();
    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&herd);

    assert_eq!(rows.len(), herd.len());
    for (index, (row, record)) in rows.iter().zip(&herd).enumerate() {
        assert_eq!(row.index(), index);
        assert_eq!(row.id(), record.id);
        assert!(row.is_valid(), "{}: {:?}", record.id, row.error());
    }
}

#[test]
fn test_computed_row_fields() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let rows = HerdReportGenerator::new(&catalog, &config, report_date())
        .generate(&[fattening_steer("A1")]);
    let row = rows[0].computed().unwrap();

    assert_eq!(row.breed_id, "angus");
    assert_eq!(row.breed_match, BreedMatch::Id);
    assert_eq!(row.sex, Sex::Male);
    assert_eq!(row.age_months, 12);
    assert_eq!(row.stage, PhysiologicalStage::Fattening);
    assert!((row.target_daily_gain_kg - 1.3).abs() < f64::EPSILON);
    assert!((row.fed_dry_matter_intake_kg - row.target_dry_matter_intake_kg()).abs() < f64::EPSILON);
    assert!(row.predicted_avg_daily_gain_kg > 0.0);
    assert!(!row.degenerate);
}

#[test]
fn test_breed_matched_by_display_name_and_date_formats() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&sample_herd());

    // "Hereford" born 01/10/2024
    let heifer = rows[1].computed().unwrap();
    assert_eq!(heifer.breed_id, "hereford");
    assert_eq!(heifer.sex, Sex::Female);
    assert_eq!(heifer.age_months, 8);

    // Per-animal target gain overrides the stage default
    let charolais = rows[3].computed().unwrap();
    assert!((charolais.target_daily_gain_kg - 1.5).abs() < f64::EPSILON);
    assert_eq!(charolais.sex, Sex::Unknown);
}

#[test]
fn test_stage_default_target_gains() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());

    for stage in PhysiologicalStage::ALL {
        let record = fattening_steer("S").with_stage(stage.as_str());
        let rows = generator.generate(&[record]);
        let row = rows[0].computed().unwrap();
        let expected = config.report.default_target_gain_kg.for_stage(stage);
        assert!((row.target_daily_gain_kg - expected).abs() < f64::EPSILON);
    }
}

// ============================================================================
// ROW ISOLATION
// ============================================================================

#[test]
fn test_single_bad_birth_date_invalidates_only_its_row() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let mut herd = sample_herd();
    herd[2].birth_date = Some("31/02/2022".to_owned());

    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&herd);

    assert_eq!(rows.len(), herd.len());
    assert_eq!(rows.iter().filter(|row| !row.is_valid()).count(), 1);
    assert!(matches!(
        invalid_error(&rows[2]),
        RowError::MalformedField { field, .. } if field == "birth_date"
    ));
}

#[test]
fn test_birth_date_after_report_date_is_invalid() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let calf = fattening_steer("C1").with_birth_date("2025-06-02");

    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&[calf]);
    let error = invalid_error(&rows[0]);
    assert_eq!(error.field(), Some("birth_date"));
    assert!(error.to_string().contains("after the report date"));
}

#[test]
fn test_missing_and_malformed_fields() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());

    let mut no_weight = fattening_steer("W0");
    no_weight.weight_kg = None;
    let mut no_stage = fattening_steer("S0");
    no_stage.stage = None;

    let cases = [
        (no_weight, RowError::missing_field("weight_kg")),
        (no_stage, RowError::missing_field("stage")),
        (
            AnimalRecord::new("B0", " ")
                .with_weight(300.0)
                .with_birth_date("2024-01-01")
                .with_stage("growing"),
            RowError::missing_field("breed"),
        ),
    ];
    for (record, expected) in cases {
        let rows = generator.generate(&[record]);
        assert_eq!(invalid_error(&rows[0]), &expected);
    }

    for record in [
        fattening_steer("W1").with_weight(-5.0),
        fattening_steer("W2").with_weight(f64::NAN),
        fattening_steer("S1").with_stage("dry-off"),
        fattening_steer("X1").with_sex("steerish"),
        fattening_steer("G1").with_target_gain(-0.5),
    ] {
        let rows = generator.generate(&[record]);
        assert!(matches!(
            invalid_error(&rows[0]),
            RowError::MalformedField { .. }
        ));
    }
}

// ============================================================================
// BREED FALLBACK
// ============================================================================

#[test]
fn test_unknown_breed_strict_marks_row_invalid() {
    let catalog = BreedCatalog::builtin();
    let config =
        common::config_with(|config| config.report.breed_fallback = BreedFallbackPolicy::Strict);
    let record = fattening_steer("U1");
    let record = AnimalRecord {
        breed: "Wagyu".to_owned(),
        ..record
    };

    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&[record]);
    assert_eq!(invalid_error(&rows[0]), &RowError::breed_not_found("Wagyu"));
}

#[test]
fn test_unknown_breed_falls_back_to_first_catalog_entry() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let record = AnimalRecord {
        breed: "Wagyu".to_owned(),
        ..fattening_steer("U2")
    };

    let rows = HerdReportGenerator::new(&catalog, &config, report_date()).generate(&[record]);
    let row = rows[0].computed().unwrap();
    assert_eq!(row.breed_match, BreedMatch::Fallback);
    assert_eq!(row.breed_id, catalog.get_all()[0].id);
}

// ============================================================================
// REPORT MODES
// ============================================================================

#[test]
fn test_batch_mode_fails_on_first_invalid_row() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let mut herd = sample_herd();
    herd[1].weight_kg = None;
    herd[3].stage = Some("hibernating".to_owned());

    let generator = HerdReportGenerator::new(&catalog, &config, report_date());
    let error = generator
        .report_with(&herd, ReportMode::Batch, false)
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.row_index, Some(1));
    assert_eq!(error.context.resource_id.as_deref(), Some("A2"));
    assert_eq!(error.context.details["field"], "weight_kg");
    assert_eq!(error.context.details["error"]["kind"], "missing_field");
    assert_eq!(error.context.details["breed"], herd[1].breed.as_str());

    let streaming = generator
        .report_with(&herd, ReportMode::Streaming, false)
        .unwrap();
    assert_eq!(streaming.summary.invalid_rows, 2);
    assert_eq!(streaming.summary.valid_rows, 2);
}

#[test]
fn test_configured_batch_mode_applies_to_report() {
    let catalog = BreedCatalog::builtin();
    let config = common::config_with(|config| config.report.mode = ReportMode::Batch);
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());

    assert!(generator.report(&sample_herd()).is_ok());
    let bad = fattening_steer("B1").with_birth_date("someday");
    assert!(generator.report(&[bad]).is_err());
}

// ============================================================================
// PARALLELISM
// ============================================================================

#[test]
fn test_parallel_output_matches_sequential() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let breeds = ["angus", "Hereford", "holstein", "wagyu", "brahman", ""];
    let stages = ["growing", "fattening", "lactating", "maintenance", "unknown"];

    let herd: Vec<AnimalRecord> = (0..300_u32)
        .map(|i| {
            AnimalRecord::new(format!("H{i:03}"), breeds[i as usize % breeds.len()])
                .with_weight(f64::from(80 + (i * 7) % 620))
                .with_birth_date(format!("2022-{:02}-{:02}", i % 12 + 1, i % 28 + 1))
                .with_stage(stages[i as usize % stages.len()])
        })
        .collect();

    let generator = HerdReportGenerator::new(&catalog, &config, report_date());
    let sequential = generator.generate(&herd);
    let parallel = generator.generate_parallel(&herd);

    assert_eq!(sequential, parallel);
    assert!(parallel.windows(2).all(|pair| pair[0].index() < pair[1].index()));
    assert!(parallel.iter().any(|row| !row.is_valid()));
}

#[test]
fn test_lazy_rows_match_generate() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let herd = sample_herd();
    let generator = HerdReportGenerator::new(&catalog, &config, report_date());

    let first_two: Vec<ReportRow> = generator.rows(&herd).take(2).collect();
    assert_eq!(first_two.as_slice(), &generator.generate(&herd)[..2]);
}

// ============================================================================
// FEED PRICING AND SUMMARY
// ============================================================================

#[test]
fn test_fixed_intake_prices_every_animal_the_same() {
    let catalog = BreedCatalog::builtin();
    let config = common::config_with(|config| config.report.fixed_dry_matter_intake_kg = Some(10.0));
    let rows =
        HerdReportGenerator::new(&catalog, &config, report_date()).generate(&sample_herd());

    let expected_cost = 10.0 / 0.88 * 0.15;
    for row in rows.iter().filter_map(ReportRow::computed) {
        assert!((row.fed_dry_matter_intake_kg - 10.0).abs() < f64::EPSILON);
        assert!((row.daily_feed_cost - expected_cost).abs() < 1e-9);
    }
}

#[test]
fn test_summary_totals() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let mut herd = sample_herd();
    herd.push(AnimalRecord::new("X9", "angus"));

    let report = HerdReportGenerator::new(&catalog, &config, report_date())
        .report(&herd)
        .unwrap();
    let summary = &report.summary;

    assert_eq!(report.as_of, report_date());
    assert_eq!(summary.animals, 5);
    assert_eq!(summary.valid_rows, 4);
    assert_eq!(summary.invalid_rows, 1);
    assert_eq!(summary.currency, config.report.currency);

    let computed: Vec<_> = report.rows.iter().filter_map(ReportRow::computed).collect();
    let cost: f64 = computed.iter().map(|row| row.daily_feed_cost).sum();
    assert!((summary.total_daily_feed_cost - cost).abs() < 1e-9);
    assert!(summary.mean_predicted_gain_kg.unwrap() > 0.0);
    assert!(summary.herd_feed_conversion_ratio.unwrap().is_finite());
}

#[test]
fn test_all_computed_figures_finite() {
    let catalog = BreedCatalog::builtin();
    let config = common::default_config();
    let herd: Vec<AnimalRecord> = [1.0, 35.0, 400.0, 1500.0]
        .iter()
        .map(|weight| fattening_steer("F").with_weight(*weight))
        .collect();

    for row in HerdReportGenerator::new(&catalog, &config, report_date()).generate(&herd) {
        let row = row.computed().cloned().unwrap();
        for value in [
            row.requirements.energy_mcal_per_day,
            row.requirements.protein_g_per_day,
            row.fed_dry_matter_intake_kg,
            row.predicted_avg_daily_gain_kg,
            row.daily_feed_cost,
        ] {
            assert!(value.is_finite());
        }
        if let Some(ratio) = row.feed_conversion_ratio {
            assert!(ratio.is_finite());
        }
    }
}
