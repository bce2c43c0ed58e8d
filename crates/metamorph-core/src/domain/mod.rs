//! Canonical domain types for the metamorphosis engine.
//!
//! All types validate their invariants at construction time; everything
//! downstream of this module can assume finite numbers and non-blank names.

mod firm;
mod record;
mod timestamp;
mod window;

pub use firm::FirmName;
pub use record::FinancialRecord;
pub use timestamp::UtcDateTime;
pub use window::{in_window, YearPair, FIRST_YEAR, LAST_YEAR};
