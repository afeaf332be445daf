use std::{fmt, ops::Deref};

use nonempty::NonEmpty;
use serde::Serialize;

use super::SalaryRecord;

/// Number of salaries that contribute to the qualifying offer.
pub const DEFAULT_TOP_N: usize = 125;

/// Error returned when there is nothing to summarize.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SummaryError {
    /// No valid salary survived extraction, or `n` was zero.
    #[error("no valid salaries found; cannot compute a qualifying offer")]
    Empty,
}

/// The top salaries, highest first.
///
/// The list is never empty and is sorted in non-increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSalaryList(NonEmpty<SalaryRecord>);

impl RankedSalaryList {
    /// The highest salary in the list.
    #[must_use]
    pub const fn highest(&self) -> SalaryRecord {
        self.0.head
    }

    /// The lowest salary in the list.
    #[must_use]
    pub fn lowest(&self) -> SalaryRecord {
        *self.0.last()
    }

    /// The number of salaries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; the list holds at least one salary.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The salaries as dollar amounts, highest first.
    pub fn dollars(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().map(SalaryRecord::as_f64)
    }

    /// The salaries as dollar amounts, lowest first.
    #[must_use]
    pub fn ascending(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.dollars().collect();
        values.reverse();
        values
    }

    /// Arithmetic mean of the list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.dollars().sum::<f64>() / self.len() as f64
    }
}

impl Deref for RankedSalaryList {
    type Target = NonEmpty<SalaryRecord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Mean salary of a [`RankedSalaryList`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct QualifyingOffer(f64);

impl QualifyingOffer {
    /// The offer in dollars.
    #[must_use]
    pub const fn dollars(self) -> f64 {
        self.0
    }
}

impl fmt::Display for QualifyingOffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${}", super::format_dollars(self.0, 2))
    }
}

/// Ranks the extracted salaries and computes the qualifying offer.
///
/// Rows without a salary (`None`) are dropped. The remaining salaries are
/// sorted highest first and truncated to `n`. If there are fewer than `n`,
/// all of them are kept. The offer is the mean of the truncated list only.
///
/// A salary of exactly zero is a valid record and is kept.
///
/// # Errors
///
/// Returns [`SummaryError::Empty`] if no salary remains, or if `n` is zero.
pub fn select_and_summarize<I>(
    records: I,
    n: usize,
) -> Result<(RankedSalaryList, QualifyingOffer), SummaryError>
where
    I: IntoIterator<Item = Option<SalaryRecord>>,
{
    let mut salaries: Vec<SalaryRecord> = records.into_iter().flatten().collect();
    salaries.sort_unstable_by(|a, b| b.cmp(a));
    salaries.truncate(n);

    let ranked = NonEmpty::from_vec(salaries)
        .map(RankedSalaryList)
        .ok_or(SummaryError::Empty)?;
    let offer = QualifyingOffer(ranked.mean());

    tracing::debug!(count = ranked.len(), offer = offer.0, "ranked salaries");

    Ok((ranked, offer))
}
