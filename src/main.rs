//! Prints the qualifying offer: the mean of the top 125 player salaries.

use std::process::ExitCode;

use clap::Parser;
use qualifying_offer::cli::{ReportCli, report_error};

fn main() -> ExitCode {
    match ReportCli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
