//! Prints `True` if the given string is a palindrome, otherwise `False`.

use std::process::ExitCode;

use clap::Parser;
use qualifying_offer::cli::{PalindromeCli, report_error};

fn main() -> ExitCode {
    match PalindromeCli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
