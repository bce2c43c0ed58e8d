use metamorph_core::{
    analyze_firm, EnvelopeError, FirmIndex, FirmName, MetricPoint, FIRST_YEAR, LAST_YEAR,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct AnalyzeResponseData {
    firm: FirmName,
    point_count: usize,
    points: Vec<MetricPoint>,
    compute_time_ms: f64,
}

pub fn run(args: &AnalyzeArgs, index: &FirmIndex) -> Result<CommandResult, CliError> {
    let Some(analysis) = analyze_firm(index, &args.firm) else {
        let error = EnvelopeError::new(
            "analysis.unknown_firm",
            format!("firm '{}' is not present in the dataset", args.firm),
        )?;
        return Ok(CommandResult::ok(Value::Null).with_error(error));
    };

    let compute_time_ms = analysis.elapsed_ms();
    let point_count = analysis.points.len();
    let insufficient_warning = analysis.points.is_empty().then(|| {
        format!(
            "firm '{}' has no consecutive-year records in the {FIRST_YEAR}-{LAST_YEAR} window",
            analysis.name
        )
    });

    let data = serde_json::to_value(AnalyzeResponseData {
        firm: analysis.name,
        point_count,
        points: analysis.points,
        compute_time_ms,
    })?;

    let result = CommandResult::ok(data);
    match insufficient_warning {
        Some(warning) => Ok(result.with_warning(warning)),
        None => Ok(result),
    }
}
