//! End-to-end report runs against an in-memory salary table.

use std::cell::Cell;

use clap::Parser;
use qualifying_offer::{
    Fetch, FetchError, Report, ReportConfig, ReportError, SummaryError,
    cli::ReportCli,
    source::FetchErrorKind,
};

/// Serves a fixed document and remembers which URL was requested.
struct StaticTable {
    html: String,
    requests: Cell<usize>,
}

impl StaticTable {
    fn new(html: String) -> Self {
        Self {
            html,
            requests: Cell::new(0),
        }
    }
}

impl Fetch for StaticTable {
    fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.requests.set(self.requests.get() + 1);
        Ok(self.html.clone())
    }
}

/// Simulates the salary page being unavailable.
struct Unavailable;

impl Fetch for Unavailable {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::new(
            url,
            FetchErrorKind::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE),
        ))
    }
}

fn row(name: &str, salary: &str) -> String {
    format!(
        "<tr>\n  <td class=\"player-name\">{name}</td>\n  <td class=\"player-salary\">{salary}</td>\n  \
         <td class=\"player-year\">2016</td>\n  <td class=\"player-level\">MLB</td>\n</tr>\n"
    )
}

/// 130 players with distinct salaries from $1,000,000 in $10,000 steps, plus
/// a header and a handful of rows without usable salary data.
fn synthetic_table() -> String {
    let mut rows = String::from("<tr><th>Name</th><th>Salary</th><th>Year</th><th>Level</th></tr>\n");
    for i in 0..130u64 {
        let salary = 1_000_000 + i * 10_000;
        rows.push_str(&row(&format!("Player, {i}"), &format!("${salary}")));
        if i % 40 == 0 {
            rows.push_str(&row("Unknown, Player", "no salary data"));
            rows.push_str(&row("Missing, Player", ""));
        }
    }
    format!("<html><body><table id=\"salaries\">{rows}</table></body></html>")
}

fn cli(args: &[&str]) -> ReportCli {
    ReportCli::try_parse_from(std::iter::once("qualifying-offer").chain(args.iter().copied()))
        .unwrap()
}

#[test]
fn top_125_excludes_the_five_lowest() {
    let fetcher = StaticTable::new(synthetic_table());
    let report = Report::generate(&fetcher, &ReportConfig::default()).unwrap();

    assert_eq!(fetcher.requests.get(), 1);
    assert_eq!(report.valid_salaries(), 130);
    assert_eq!(report.ranked().len(), 125);
    assert_eq!(report.ranked().highest().dollars(), 2_290_000);
    assert_eq!(report.ranked().lowest().dollars(), 1_050_000);

    let expected = (5..130u64).map(|i| 1_000_000 + i * 10_000).sum::<u64>() as f64 / 125.0;
    assert!((report.offer().dollars() - expected).abs() < 1e-6);
    assert!((expected - 1_670_000.0).abs() < 1e-6);
}

#[test]
fn ranked_list_is_non_increasing() {
    let report = Report::generate(&StaticTable::new(synthetic_table()), &ReportConfig::default()).unwrap();
    let values: Vec<u64> = report.ranked().iter().map(|r| r.dollars()).collect();
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn prints_one_summary_line() {
    let fetcher = StaticTable::new(synthetic_table());
    let cli = cli(&[]);
    let config = cli.config().unwrap();

    let mut out = Vec::new();
    cli.run_with(&fetcher, &config, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The qualifying offer is $1,670,000.00\n"
    );
}

#[test]
fn smaller_top_n_changes_the_offer() {
    let fetcher = StaticTable::new(synthetic_table());
    let cli = cli(&["--top", "2"]);
    let config = cli.config().unwrap();

    let mut out = Vec::new();
    cli.run_with(&fetcher, &config, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "The qualifying offer is $2,285,000.00\n"
    );
}

#[test]
fn fetch_failure_aborts_without_output() {
    let cli = cli(&["-b", "--hist", "--url", "https://salaries.example/data.html"]);
    let config = cli.config().unwrap();

    let mut out = Vec::new();
    let err = cli.run_with(&Unavailable, &config, &mut out).unwrap_err();

    assert!(out.is_empty());
    let message = format!("{err:#}");
    assert!(message.contains("could not retrieve salary data from https://salaries.example/data.html"));
    assert!(message.contains("503"));
}

#[test]
fn fetch_failure_is_a_fetch_error() {
    let err = Report::generate(&Unavailable, &ReportConfig::default()).unwrap_err();
    match err {
        ReportError::Fetch(fetch) => assert_eq!(fetch.url(), qualifying_offer::source::DEFAULT_URL),
        other => panic!("expected a fetch error, got {other:?}"),
    }
}

#[test]
fn table_without_salaries_is_reported() {
    let html = format!("<table>{}{}</table>", row("A, B", "N/A"), row("C, D", ""));
    let cli = cli(&[]);
    let config = cli.config().unwrap();

    let mut out = Vec::new();
    let err = cli
        .run_with(&StaticTable::new(html), &config, &mut out)
        .unwrap_err();

    assert!(out.is_empty());
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::Summary(SummaryError::Empty))
    ));
}
