//! The qualifying-offer report.
//!
//! A run is all-or-nothing: the table is fetched, every row is reduced to an
//! optional salary, and the offer is computed before anything is written.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use serde::Serialize;
use tracing::instrument;

use crate::{
    config::ReportConfig,
    domain::{
        QualifyingOffer, RankedSalaryList, SummaryError, extract_salary, select_and_summarize,
        stats::Percentiles,
    },
    render::{self, RenderError},
    source::{Fetch, FetchError, parse_rows},
};

/// Reasons a report could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The salary table could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// No usable salary was found in the table.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// How the summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `The qualifying offer is $<amount>`
    #[default]
    Text,
    /// A JSON object with the offer and supporting statistics.
    Json,
}

/// The result of one report run.
#[derive(Debug, Clone)]
pub struct Report {
    ranked: RankedSalaryList,
    offer: QualifyingOffer,
    rows: usize,
    valid: usize,
}

impl Report {
    /// Fetches the salary table and computes the qualifying offer.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Fetch`] if the table cannot be retrieved and
    /// [`ReportError::Summary`] if it contains no valid salary.
    #[instrument(level = "debug", skip_all, fields(url = %config.url))]
    pub fn generate(fetcher: &impl Fetch, config: &ReportConfig) -> Result<Self, ReportError> {
        let html = fetcher.fetch(&config.url)?;
        Ok(Self::from_html(&html, config.top_n)?)
    }

    /// Computes the qualifying offer from an already retrieved document.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Empty`] if the document contains no valid
    /// salary.
    pub fn from_html(html: &str, top_n: usize) -> Result<Self, SummaryError> {
        let records: Vec<_> = parse_rows(html).iter().map(extract_salary).collect();
        let rows = records.len();
        let valid = records.iter().flatten().count();
        tracing::debug!(rows, valid, dropped = rows - valid, "extracted salaries");

        let (ranked, offer) = select_and_summarize(records, top_n)?;
        tracing::info!(count = ranked.len(), "computed qualifying offer");

        Ok(Self {
            ranked,
            offer,
            rows,
            valid,
        })
    }

    /// The salaries that contribute to the offer, highest first.
    #[must_use]
    pub const fn ranked(&self) -> &RankedSalaryList {
        &self.ranked
    }

    /// The qualifying offer.
    #[must_use]
    pub const fn offer(&self) -> QualifyingOffer {
        self.offer
    }

    /// Number of table rows seen, including rows without a salary.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of rows that yielded a salary.
    #[must_use]
    pub const fn valid_salaries(&self) -> usize {
        self.valid
    }

    /// Writes the summary in the requested format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_summary(&self, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
        match format {
            OutputFormat::Text => writeln!(out, "The qualifying offer is {}", self.offer),
            OutputFormat::Json => {
                let summary = JsonSummary {
                    qualifying_offer: self.offer,
                    count: self.ranked.len(),
                    rows: self.rows,
                    valid_salaries: self.valid,
                    min: self.ranked.lowest().dollars(),
                    max: self.ranked.highest().dollars(),
                    percentiles: Percentiles::from_ranked(&self.ranked),
                };
                serde_json::to_writer_pretty(&mut *out, &summary)?;
                writeln!(out)
            }
        }
    }

    /// Writes the figures requested in `config` and returns their paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a figure cannot be drawn or written.
    pub fn render_figures(&self, config: &ReportConfig) -> Result<Vec<PathBuf>, RenderError> {
        let mut written = Vec::new();

        if config.box_and_whisker {
            let path = config.box_path();
            render::box_plot(&self.ranked, &path)?;
            written.push(path);
        }

        if config.histogram {
            let path = config.histogram_path();
            render::histogram(&self.ranked, self.offer, &path)?;
            written.push(path);
        }

        Ok(written)
    }
}

#[derive(Serialize)]
struct JsonSummary {
    qualifying_offer: QualifyingOffer,
    count: usize,
    rows: usize,
    valid_salaries: usize,
    min: u64,
    max: u64,
    percentiles: Percentiles,
}
