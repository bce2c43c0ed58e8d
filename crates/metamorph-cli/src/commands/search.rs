use metamorph_core::{search_firm_names, FirmIndex, FirmName};
use serde::Serialize;

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    match_count: usize,
    matches: Vec<FirmName>,
}

pub fn run(args: &SearchArgs, index: &FirmIndex) -> Result<CommandResult, CliError> {
    let matches: Vec<FirmName> = search_firm_names(index, &args.query)
        .into_iter()
        .cloned()
        .collect();

    let data = serde_json::to_value(SearchResponseData {
        query: args.query.clone(),
        match_count: matches.len(),
        matches,
    })?;

    Ok(CommandResult::ok(data))
}
