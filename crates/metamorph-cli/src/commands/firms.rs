use metamorph_core::{FirmIndex, FirmName};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct FirmsResponseData {
    firm_count: usize,
    firms: Vec<FirmName>,
}

pub fn run(index: &FirmIndex) -> Result<CommandResult, CliError> {
    let firms: Vec<FirmName> = index.firm_names().cloned().collect();

    let data = serde_json::to_value(FirmsResponseData {
        firm_count: firms.len(),
        firms,
    })?;

    Ok(CommandResult::ok(data))
}
