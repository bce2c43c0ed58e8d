use std::time::{Duration, Instant};

use crate::domain::FirmName;
use crate::grouping::FirmIndex;
use crate::metrics::{derive_metric_points, MetricPoint};

/// Outcome of one timed metric pass over a selected firm.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmAnalysis {
    pub name: FirmName,
    pub points: Vec<MetricPoint>,
    /// Wall-clock duration of the derivation pass, from a monotonic clock.
    pub elapsed: Duration,
}

impl FirmAnalysis {
    /// Elapsed derivation time in milliseconds with sub-millisecond
    /// precision, for display and machine-readable output.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Run the metric engine for one firm and measure the pass.
///
/// Returns `None` when the firm is absent from the index; nothing is timed
/// in that case. An indexed firm with no valid transitions yields an empty
/// point list, not `None`.
pub fn analyze_firm(index: &FirmIndex, name: &str) -> Option<FirmAnalysis> {
    let series = index.series(name)?;

    let started = Instant::now();
    let points = derive_metric_points(series);
    let elapsed = started.elapsed();

    Some(FirmAnalysis {
        name: series.name().clone(),
        points,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FinancialRecord;

    fn record(year: i32, profit: f64, sales: f64, market_value: f64) -> FinancialRecord {
        FinancialRecord::new(
            FirmName::parse("Acme").expect("name must parse"),
            year,
            profit,
            sales,
            market_value,
        )
        .expect("record must be valid")
    }

    #[test]
    fn unknown_firm_yields_none() {
        let index = FirmIndex::build(&[record(2017, 5.0, 100.0, 1000.0)]);
        assert!(analyze_firm(&index, "Borealis").is_none());
    }

    #[test]
    fn known_firm_yields_timed_analysis() {
        let index = FirmIndex::build(&[
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 8.0, 100.0, 1200.0),
        ]);

        let analysis = analyze_firm(&index, "Acme").expect("Acme should be analyzable");

        assert_eq!(analysis.name.as_str(), "Acme");
        assert_eq!(analysis.points.len(), 1);
        assert!(analysis.elapsed_ms() >= 0.0);
        assert!(analysis.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn firm_without_transitions_yields_empty_points() {
        let index = FirmIndex::build(&[record(2017, 5.0, 100.0, 1000.0)]);

        let analysis = analyze_firm(&index, "Acme").expect("Acme is indexed");
        assert!(analysis.points.is_empty());
    }
}
