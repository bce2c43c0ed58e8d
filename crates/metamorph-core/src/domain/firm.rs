use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Firm identifier as it appears in the source data.
///
/// Identity is the exact string: names differing only in case are distinct
/// firms. Lookup matching is the one place case is ignored, via
/// [`FirmName::search_key`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FirmName(String);

impl FirmName {
    /// Accept any non-blank name verbatim. The value is never trimmed or
    /// case-folded; grouping identity must match the dataset byte for byte.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::BlankFirmName);
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive lookup matching.
    pub fn search_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Display for FirmName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Ord and Hash agree with `str`, so keyed collections can look firms up
// by borrowed string slices.
impl Borrow<str> for FirmName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FirmName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for FirmName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<FirmName> for String {
    fn from(value: FirmName) -> Self {
        value.0
    }
}
