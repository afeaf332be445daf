//! Descriptive statistics behind the salary figures.
//!
//! Everything here is computed from a [`RankedSalaryList`], so inputs are
//! never empty.

use serde::Serialize;

use super::{QualifyingOffer, RankedSalaryList, format_dollars};

/// Number of bins in the salary histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Returns the `p`th percentile of `sorted`, which must be in ascending
/// order and non-empty.
///
/// Uses linear interpolation between the two closest ranks: the rank is
/// `p / 100 * (len - 1)` and the result is interpolated between the values
/// either side of it. `p` is clamped to `0..=100`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    (sorted[upper] - sorted[lower]).mul_add(fraction, sorted[lower])
}

/// The percentiles marked on the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentiles {
    /// 25th percentile.
    pub p25: f64,
    /// 75th percentile.
    pub p75: f64,
    /// 90th percentile.
    pub p90: f64,
}

impl Percentiles {
    /// Computes the 25th, 75th and 90th percentiles of the list.
    #[must_use]
    pub fn from_ranked(ranked: &RankedSalaryList) -> Self {
        let sorted = ranked.ascending();
        Self {
            p25: percentile(&sorted, 25.0),
            p75: percentile(&sorted, 75.0),
            p90: percentile(&sorted, 90.0),
        }
    }
}

/// Five-number summary plus whiskers, as drawn by a box-and-whisker plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// Smallest value.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Largest value.
    pub max: f64,
    /// Lowest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Highest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Whisker reach as a multiple of the interquartile range.
    pub const WHISKER_REACH: f64 = 1.5;

    /// Summarizes the list.
    #[must_use]
    pub fn from_ranked(ranked: &RankedSalaryList) -> Self {
        Self::from_sorted(&ranked.ascending())
    }

    fn from_sorted(sorted: &[f64]) -> Self {
        let q1 = percentile(sorted, 25.0);
        let median = percentile(sorted, 50.0);
        let q3 = percentile(sorted, 75.0);
        let reach = Self::WHISKER_REACH * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = || sorted.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Self {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        }
    }
}

/// Equal-width histogram of salaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins.
    pub edges: Vec<f64>,
    /// Number of values in each bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins the list into `bins` equal-width bins spanning its range.
    ///
    /// Every bin is half-open except the last, which also includes the
    /// maximum. When all salaries are equal the range is widened by half a
    /// dollar either side.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_ranked(ranked: &RankedSalaryList, bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut low, mut high) = (ranked.lowest().as_f64(), ranked.highest().as_f64());
        if ranked.lowest() == ranked.highest() {
            low -= 0.5;
            high += 0.5;
        }

        let width = (high - low) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| width.mul_add(i as f64, low)).collect();

        let mut counts = vec![0; bins];
        for value in ranked.dollars() {
            let index = (((value - low) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Self { edges, counts }
    }

    /// Iterates over `(start, end, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }

    /// The largest bin count.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// A labelled vertical marker on the histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    /// Legend text, e.g. `90th Percentile= $25,000,000`.
    pub label: String,
    /// Position on the salary axis.
    pub value: f64,
}

impl ReferenceLine {
    fn new(name: &str, value: f64) -> Self {
        Self {
            label: format!("{name}= ${}", format_dollars(value, 0)),
            value,
        }
    }

    /// The qualifying offer and the 90th, 75th and 25th percentiles, in that
    /// order.
    #[must_use]
    pub fn for_histogram(offer: QualifyingOffer, percentiles: &Percentiles) -> [Self; 4] {
        [
            Self::new("Qualifying Offer", offer.dollars()),
            Self::new("90th Percentile", percentiles.p90),
            Self::new("75th Percentile", percentiles.p75),
            Self::new("25th Percentile", percentiles.p25),
        ]
    }
}
