use std::collections::BTreeMap;

use crate::domain::{in_window, FinancialRecord, FirmName};

/// Records of a single firm restricted to the analysis window, kept in
/// encounter order.
///
/// The dataset is expected to hold one record per firm-year. When it does
/// not, the later record wins wherever a single record per year is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmSeries {
    name: FirmName,
    records: Vec<FinancialRecord>,
}

impl FirmSeries {
    fn new(name: FirmName) -> Self {
        Self {
            name,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &FirmName {
        &self.name
    }

    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    /// Record for one calendar year; on duplicates the last encountered wins.
    pub fn record_for_year(&self, year: i32) -> Option<&FinancialRecord> {
        self.records.iter().rev().find(|record| record.year == year)
    }

    /// Record with the maximum year; on duplicate years the last encountered
    /// maximal record wins.
    pub fn latest_record(&self) -> Option<&FinancialRecord> {
        self.records.iter().max_by_key(|record| record.year)
    }

    fn push(&mut self, record: FinancialRecord) {
        self.records.push(record);
    }
}

/// Firm catalog derived from one dataset snapshot.
///
/// Rebuilding from a new snapshot replaces the whole index; nothing is
/// patched incrementally. Iteration order is the catalog order: firm names
/// sorted ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FirmIndex {
    series: BTreeMap<FirmName, FirmSeries>,
}

impl FirmIndex {
    /// Group a record snapshot by exact firm name, keeping only years inside
    /// the 2017-2021 window. Out-of-window records are dropped silently.
    pub fn build(records: &[FinancialRecord]) -> Self {
        let mut series: BTreeMap<FirmName, FirmSeries> = BTreeMap::new();

        for record in records {
            if !in_window(record.year) {
                continue;
            }

            series
                .entry(record.name.clone())
                .or_insert_with(|| FirmSeries::new(record.name.clone()))
                .push(record.clone());
        }

        Self { series }
    }

    pub fn series(&self, name: &str) -> Option<&FirmSeries> {
        self.series.get(name)
    }

    pub fn firm_names(&self) -> impl Iterator<Item = &FirmName> {
        self.series.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FirmName, &FirmSeries)> {
        self.series.iter()
    }

    pub fn firm_count(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
