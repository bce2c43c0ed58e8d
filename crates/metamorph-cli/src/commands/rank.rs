use metamorph_core::{rank_by_market_value, FirmIndex, FirmName};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RankResponseData {
    entry_count: usize,
    entries: Vec<RankedRow>,
}

/// Rank entry with its 1-based position attached for display.
#[derive(Debug, Serialize)]
struct RankedRow {
    rank: usize,
    name: FirmName,
    latest_year: i32,
    market_value: f64,
}

pub fn run(index: &FirmIndex) -> Result<CommandResult, CliError> {
    let entries: Vec<RankedRow> = rank_by_market_value(index)
        .into_iter()
        .enumerate()
        .map(|(position, entry)| RankedRow {
            rank: position + 1,
            name: entry.name,
            latest_year: entry.latest_year,
            market_value: entry.market_value,
        })
        .collect();

    let data = serde_json::to_value(RankResponseData {
        entry_count: entries.len(),
        entries,
    })?;

    Ok(CommandResult::ok(data))
}
