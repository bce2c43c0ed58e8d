use std::collections::HashSet;

use crate::domain::YearPair;
use crate::grouping::FirmSeries;

/// Whether the series holds both years of at least one window transition.
///
/// Adjacency is against the fixed 2017-2021 sequence. A firm with records
/// for 2017 and 2021 alone spans the window but has no valid transition,
/// and is not analyzable.
pub fn has_adjacent_coverage(series: &FirmSeries) -> bool {
    let years: HashSet<i32> = series.records().iter().map(|record| record.year).collect();

    YearPair::ALL
        .iter()
        .any(|pair| years.contains(&pair.prev()) && years.contains(&pair.curr()))
}
