//! Domain models for the salary report and the palindrome checker.
//!
//! This module contains the pure computations: salary extraction, top-N
//! selection, the descriptive statistics behind the figures, and the
//! palindrome predicate.

/// Whitespace- and case-insensitive palindrome predicate.
pub mod palindrome;
pub use palindrome::is_palindrome;

/// Salary rows as scraped from the table and the records extracted from them.
pub mod salary;
pub use salary::{SalaryRecord, SalaryRow, extract_salary};

mod ranking;
pub use ranking::{
    DEFAULT_TOP_N, QualifyingOffer, RankedSalaryList, SummaryError, select_and_summarize,
};

pub mod stats;

pub mod money;
pub use money::format_dollars;
