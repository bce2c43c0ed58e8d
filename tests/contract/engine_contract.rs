//! Contract tests for the metric engine surfaces.
//!
//! Every dataset shape, however degenerate, must uphold the same emission
//! contract: derived points are finite and chronological, rankings are
//! bounded and ordered, lookups are bounded and case-insensitive.

use metamorph_core::{
    derive_metric_points, has_adjacent_coverage, rank_by_market_value, search_firm_names,
    FinancialRecord, FirmIndex, FirmName, YearPair, MAX_LOOKUP_RESULTS, MAX_RANK_ENTRIES,
};

struct DatasetCase {
    label: &'static str,
    records: Vec<FinancialRecord>,
}

fn record(name: &str, year: i32, profit: f64, sales: f64, market_value: f64) -> FinancialRecord {
    FinancialRecord::new(
        FirmName::parse(name).expect("valid firm name"),
        year,
        profit,
        sales,
        market_value,
    )
    .expect("valid record")
}

fn dataset_cases() -> Vec<DatasetCase> {
    vec![
        DatasetCase {
            label: "fully covered firm",
            records: vec![
                record("Acme", 2017, 5.0, 100.0, 1000.0),
                record("Acme", 2018, 8.0, 100.0, 1200.0),
                record("Acme", 2019, 10.0, 100.0, 1500.0),
                record("Acme", 2020, 7.0, 100.0, 1300.0),
                record("Acme", 2021, 12.0, 100.0, 1800.0),
            ],
        },
        DatasetCase {
            label: "zeros everywhere",
            records: vec![
                record("Zero", 2017, 0.0, 0.0, 0.0),
                record("Zero", 2018, 0.0, 0.0, 0.0),
                record("Zero", 2019, 0.0, 0.0, 0.0),
            ],
        },
        DatasetCase {
            label: "negative swings",
            records: vec![
                record("Swing", 2017, -20.0, 80.0, 500.0),
                record("Swing", 2018, 15.0, 90.0, 300.0),
                record("Swing", 2019, -5.0, 70.0, 450.0),
            ],
        },
        DatasetCase {
            label: "extreme magnitudes",
            records: vec![
                record("Extreme", 2017, 1e-9, 1e9, 1e-308),
                record("Extreme", 2018, 1e9, 1e-9, 1e308),
                record("Extreme", 2019, -1e300, 2.0, 1e12),
            ],
        },
        DatasetCase {
            label: "gapped and restated years",
            records: vec![
                record("Mixed", 2017, 5.0, 100.0, 1000.0),
                record("Mixed", 2019, 8.0, 100.0, 1200.0),
                record("Mixed", 2020, 6.0, 100.0, 1100.0),
                record("Mixed", 2020, 9.0, 100.0, 1250.0),
            ],
        },
    ]
}

#[test]
fn derived_points_are_finite_and_chronological_for_all_datasets() {
    for case in dataset_cases() {
        let index = FirmIndex::build(&case.records);

        for (name, series) in index.iter() {
            let points = derive_metric_points(series);

            assert!(
                points.len() <= YearPair::ALL.len(),
                "case '{}', firm '{}': at most four transitions",
                case.label,
                name
            );

            for point in &points {
                assert!(
                    point.n.is_finite() && point.n != 0.0,
                    "case '{}', firm '{}': emitted n must be finite and non-zero",
                    case.label,
                    name
                );
                assert!(
                    point.m.is_finite(),
                    "case '{}', firm '{}': emitted m must be finite",
                    case.label,
                    name
                );
            }

            for pair in points.windows(2) {
                assert!(
                    pair[0].years < pair[1].years,
                    "case '{}', firm '{}': points must stay chronological",
                    case.label,
                    name
                );
            }
        }
    }
}

#[test]
fn rankings_are_bounded_ordered_and_coverage_validated() {
    for case in dataset_cases() {
        let index = FirmIndex::build(&case.records);
        let entries = rank_by_market_value(&index);

        assert!(
            entries.len() <= MAX_RANK_ENTRIES,
            "case '{}': ranking must stay within its cap",
            case.label
        );

        for pair in entries.windows(2) {
            assert!(
                pair[0].market_value >= pair[1].market_value,
                "case '{}': ranking must be descending",
                case.label
            );
        }

        for entry in &entries {
            let series = index
                .series(entry.name.as_str())
                .expect("ranked firm must exist in the index");
            assert!(
                has_adjacent_coverage(series),
                "case '{}', firm '{}': ranked firms must have adjacent coverage",
                case.label,
                entry.name
            );
        }
    }
}

#[test]
fn lookups_are_bounded_and_match_case_insensitively() {
    let fragments = ["a", "e", "ZE", "firm", ""];

    for case in dataset_cases() {
        let index = FirmIndex::build(&case.records);

        for fragment in fragments {
            let matches = search_firm_names(&index, fragment);

            assert!(
                matches.len() <= MAX_LOOKUP_RESULTS,
                "case '{}', query '{}': lookup must stay within its cap",
                case.label,
                fragment
            );

            if fragment.is_empty() {
                assert!(
                    matches.is_empty(),
                    "case '{}': empty query must match nothing",
                    case.label
                );
                continue;
            }

            let needle = fragment.to_lowercase();
            for name in matches {
                assert!(
                    name.search_key().contains(&needle),
                    "case '{}', query '{}': '{}' must contain the fragment",
                    case.label,
                    fragment,
                    name
                );
            }
        }
    }
}
