//! Where salary rows come from.
//!
//! [`fetch`] retrieves the HTML document and [`html`] turns its table into
//! [`SalaryRow`](crate::SalaryRow)s.

/// HTTP retrieval of the salary page.
pub mod fetch;
pub use fetch::{DEFAULT_URL, Fetch, FetchError, FetchErrorKind, HttpFetcher};

/// Table-row parsing.
pub mod html;
pub use html::parse_rows;
