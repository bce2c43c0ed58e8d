use serde::{Deserialize, Serialize};

use crate::domain::YearPair;
use crate::grouping::FirmSeries;

/// Derived metric for one valid year transition.
///
/// `n` is the change in profitability rate `profit / sales` between the two
/// years. `m` is the relative market-value growth over the same transition
/// divided by `n`: how much market value moved per unit of profitability
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub years: YearPair,
    pub n: f64,
    pub m: f64,
}

/// Compute the chronological metric sequence for one firm series.
///
/// A transition yields a point only when both years are present and the
/// values survive the guards; everything else is excluded silently. Partial
/// output is the contract, not a failure mode.
pub fn derive_metric_points(series: &FirmSeries) -> Vec<MetricPoint> {
    let mut points = Vec::with_capacity(YearPair::ALL.len());

    for pair in YearPair::ALL {
        let (Some(prev), Some(curr)) = (
            series.record_for_year(pair.prev()),
            series.record_for_year(pair.curr()),
        ) else {
            continue;
        };

        let n = curr.profitability() - prev.profitability();

        // The zero guards run in this fixed order before any growth ratio
        // is formed; `n` is the denominator of `m`.
        if n == 0.0 || prev.market_value == 0.0 || curr.sales == 0.0 || prev.sales == 0.0 {
            continue;
        }

        let mv_growth = (curr.market_value - prev.market_value) / prev.market_value;
        let m = mv_growth / n;

        if !m.is_finite() {
            continue;
        }

        points.push(MetricPoint { years: pair, n, m });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FinancialRecord, FirmName};
    use crate::grouping::FirmIndex;

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

    fn points_for(records: Vec<FinancialRecord>) -> Vec<MetricPoint> {
        let index = FirmIndex::build(&records);
        let series = index.series("Acme").expect("Acme should be indexed");
        derive_metric_points(series)
    }

    #[test]
    fn computes_single_transition() {
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 8.0, 100.0, 1200.0),
        ]);

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.years.label(), "2017-2018");
        assert!((point.n - 0.03).abs() < 1e-12);
        assert!((point.m - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn skips_missing_years_and_keeps_order() {
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 8.0, 100.0, 1200.0),
            record(2020, 6.0, 100.0, 1100.0),
            record(2021, 9.0, 100.0, 1400.0),
        ]);

        let labels: Vec<String> = points.iter().map(|point| point.years.label()).collect();
        assert_eq!(labels, vec!["2017-2018", "2020-2021"]);
    }

    #[test]
    fn excludes_zero_profitability_change() {
        // Market value moved, but profitability is flat; the transition is
        // excluded rather than producing a division by zero.
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 5.0, 100.0, 1300.0),
        ]);

        assert!(points.is_empty());
    }

    #[test]
    fn excludes_zero_previous_market_value() {
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 0.0),
            record(2018, 8.0, 100.0, 1200.0),
        ]);

        assert!(points.is_empty());
    }

    #[test]
    fn excludes_zero_current_sales() {
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 8.0, 0.0, 1200.0),
        ]);

        assert!(points.is_empty());
    }

    #[test]
    fn excludes_zero_previous_sales() {
        let points = points_for(vec![
            record(2017, 5.0, 0.0, 1000.0),
            record(2018, 8.0, 100.0, 1200.0),
        ]);

        assert!(points.is_empty());
    }

    #[test]
    fn excludes_non_finite_ratio() {
        // All guards pass, but the growth ratio overflows to infinity.
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1e-308),
            record(2018, 8.0, 100.0, 1e308),
        ]);

        assert!(points.is_empty());
    }

    #[test]
    fn exclusion_is_per_transition() {
        let points = points_for(vec![
            record(2017, 5.0, 100.0, 1000.0),
            record(2018, 5.0, 100.0, 1300.0),
            record(2019, 9.0, 100.0, 1500.0),
        ]);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].years.label(), "2018-2019");
    }

    #[test]
    fn negative_metrics_are_kept() {
        // Profitability falls while market value rises; m is negative but
        // perfectly valid.
        let points = points_for(vec![
            record(2017, 8.0, 100.0, 1000.0),
            record(2018, 5.0, 100.0, 1200.0),
        ]);

        assert_eq!(points.len(), 1);
        assert!(points[0].n < 0.0);
        assert!(points[0].m < 0.0);
    }
}
