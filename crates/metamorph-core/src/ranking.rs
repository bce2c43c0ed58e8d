use serde::{Deserialize, Serialize};

use crate::coverage::has_adjacent_coverage;
use crate::domain::FirmName;
use crate::grouping::FirmIndex;

/// Upper bound on the ranking list. A fixed truncation policy, not a knob.
pub const MAX_RANK_ENTRIES: usize = 50;

/// Summary row of the market-value ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub name: FirmName,
    pub latest_year: i32,
    pub market_value: f64,
}

/// Rank analyzable firms by most recent market value, descending, truncated
/// to [`MAX_RANK_ENTRIES`].
///
/// Firms without adjacent-year coverage never appear, whatever their size.
/// Ties keep catalog order.
pub fn rank_by_market_value(index: &FirmIndex) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = index
        .iter()
        .filter(|(_, series)| has_adjacent_coverage(series))
        .filter_map(|(name, series)| {
            series.latest_record().map(|latest| RankEntry {
                name: name.clone(),
                latest_year: latest.year,
                market_value: latest.market_value,
            })
        })
        .collect();

    entries.sort_by(|left, right| right.market_value.total_cmp(&left.market_value));
    entries.truncate(MAX_RANK_ENTRIES);
    entries
}
