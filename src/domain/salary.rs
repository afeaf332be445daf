use std::fmt;

use serde::Serialize;

/// One row of the published salary table.
///
/// Every field is optional: header rows and malformed rows are still rows,
/// they just carry nothing useful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryRow {
    /// Player name, `Last, First`.
    pub name: Option<String>,
    /// Raw salary text, e.g. `$1,234,567`.
    pub salary: Option<String>,
    /// Contract year.
    pub year: Option<String>,
    /// Competition level, e.g. `MLB`.
    pub level: Option<String>,
}

impl SalaryRow {
    /// Creates a row carrying only salary text.
    #[must_use]
    pub fn with_salary(salary: impl Into<String>) -> Self {
        Self {
            salary: Some(salary.into()),
            ..Self::default()
        }
    }
}

/// A whole-dollar salary extracted from a [`SalaryRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SalaryRecord(u64);

impl SalaryRecord {
    /// Wraps a dollar amount.
    #[must_use]
    pub const fn new(dollars: u64) -> Self {
        Self(dollars)
    }

    /// Returns the amount in whole dollars.
    #[must_use]
    pub const fn dollars(self) -> u64 {
        self.0
    }

    /// Returns the amount as a float for averaging and plotting.
    ///
    /// Amounts above 2^53 dollars lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl From<u64> for SalaryRecord {
    fn from(dollars: u64) -> Self {
        Self(dollars)
    }
}

impl fmt::Display for SalaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${}", super::format_dollars(self.as_f64(), 0))
    }
}

/// Extracts the salary from a table row.
///
/// Every decimal digit in the salary text is kept, in order, and the result
/// is parsed as a whole-dollar amount. Currency symbols, separators and any
/// other characters are ignored.
///
/// Returns `None` when the row has no salary cell, the cell contains no
/// digits, or the digits do not fit in a `u64`.
#[must_use]
pub fn extract_salary(row: &SalaryRow) -> Option<SalaryRecord> {
    let text = row.salary.as_deref()?;
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok().map(SalaryRecord)
}
