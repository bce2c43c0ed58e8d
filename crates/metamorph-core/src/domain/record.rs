use serde::{Deserialize, Serialize};

use crate::domain::FirmName;
use crate::ValidationError;

/// One firm-year observation from the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub name: FirmName,
    pub year: i32,
    pub profit: f64,
    pub sales: f64,
    pub market_value: f64,
}

impl FinancialRecord {
    /// Ingestion-boundary constructor. Numeric fields must be finite; sign
    /// is unconstrained (negative profit is meaningful data, and zero sales
    /// is degenerate input the metric guards exclude downstream).
    pub fn new(
        name: FirmName,
        year: i32,
        profit: f64,
        sales: f64,
        market_value: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("profit", profit)?;
        validate_finite("sales", sales)?;
        validate_finite("market_value", market_value)?;

        Ok(Self {
            name,
            year,
            profit,
            sales,
            market_value,
        })
    }

    /// Profitability rate `profit / sales` for this firm-year.
    pub fn profitability(&self) -> f64 {
        self.profit / self.sales
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }

    Ok(())
}
