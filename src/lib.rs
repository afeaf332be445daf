//! Baseball qualifying-offer report and a palindrome checker.
//!
//! The qualifying offer is the mean salary of the highest-paid players in a
//! published salary table.

pub mod domain;
pub use domain::{
    QualifyingOffer, RankedSalaryList, SalaryRecord, SalaryRow, SummaryError, extract_salary,
    is_palindrome, select_and_summarize,
};

/// Retrieval and parsing of the published salary table.
pub mod source;
pub use source::{Fetch, FetchError, HttpFetcher};

pub mod config;
pub use config::ReportConfig;

/// PNG rendering of the salary figures.
pub mod render;

pub mod report;
pub use report::{OutputFormat, Report, ReportError};

/// Command line front ends shared by both binaries.
pub mod cli;
