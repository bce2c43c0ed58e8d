//! Core contracts for metamorph.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Firm grouping over the fixed 2017-2021 analysis window
//! - Coverage checks and N/M metric derivation
//! - Market-value ranking and firm-name lookup
//! - Response envelope and structured errors

pub mod analysis;
pub mod coverage;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod grouping;
pub mod lookup;
pub mod metrics;
pub mod ranking;

pub use analysis::{analyze_firm, FirmAnalysis};
pub use coverage::has_adjacent_coverage;
pub use domain::{
    in_window, FinancialRecord, FirmName, UtcDateTime, YearPair, FIRST_YEAR, LAST_YEAR,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use grouping::{FirmIndex, FirmSeries};
pub use lookup::{search_firm_names, MAX_LOOKUP_RESULTS};
pub use metrics::{derive_metric_points, MetricPoint};
pub use ranking::{rank_by_market_value, RankEntry, MAX_RANK_ENTRIES};
