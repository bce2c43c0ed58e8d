use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// First year of the fixed analysis window (inclusive).
pub const FIRST_YEAR: i32 = 2017;
/// Last year of the fixed analysis window (inclusive).
pub const LAST_YEAR: i32 = 2021;

/// Whether a record year falls inside the analysis window.
pub const fn in_window(year: i32) -> bool {
    year >= FIRST_YEAR && year <= LAST_YEAR
}

/// One adjacent year transition inside the analysis window.
///
/// Only the four transitions of the 2017-2021 sequence exist; anything else
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearPair {
    prev: i32,
    curr: i32,
}

impl YearPair {
    /// All window transitions in chronological order.
    pub const ALL: [Self; 4] = [
        Self { prev: 2017, curr: 2018 },
        Self { prev: 2018, curr: 2019 },
        Self { prev: 2019, curr: 2020 },
        Self { prev: 2020, curr: 2021 },
    ];

    pub const fn prev(self) -> i32 {
        self.prev
    }

    pub const fn curr(self) -> i32 {
        self.curr
    }

    /// Canonical label for the transition, e.g. "2017-2018".
    pub fn label(self) -> String {
        format!("{}-{}", self.prev, self.curr)
    }
}

impl Display for YearPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.prev, self.curr)
    }
}

impl FromStr for YearPair {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidYearPair {
            value: value.to_owned(),
        };

        let (prev, curr) = value.trim().split_once('-').ok_or_else(invalid)?;
        let prev = prev.parse::<i32>().map_err(|_| invalid())?;
        let curr = curr.parse::<i32>().map_err(|_| invalid())?;

        Self::ALL
            .into_iter()
            .find(|pair| pair.prev == prev && pair.curr == curr)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearPair {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for YearPair {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearPair> for String {
    fn from(value: YearPair) -> Self {
        value.label()
    }
}
