mod analyze;
mod firms;
mod rank;
mod search;

use std::time::Instant;

use metamorph_core::{Envelope, EnvelopeMeta, FirmIndex};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::ingest;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<metamorph_core::EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: metamorph_core::EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let data_path = ingest::resolve_data_path(cli.data.as_deref())?;
    let records = ingest::load_records(&data_path)?;
    let index = FirmIndex::build(&records);

    let result = match &cli.command {
        Command::Firms => firms::run(&index)?,
        Command::Analyze(args) => analyze::run(args, &index)?,
        Command::Rank => rank::run(&index)?,
        Command::Search(args) => search::run(args, &index)?,
    };

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), "v1.0.0", elapsed_ms(started))?;

    if records.is_empty() {
        meta.push_warning("no records loaded from dataset");
    }

    for warning in result.warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, result.data, result.errors).map_err(CliError::from)
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}
