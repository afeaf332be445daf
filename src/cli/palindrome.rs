use clap::{ArgAction, Parser};
use tracing::instrument;

use crate::is_palindrome;

/// Check whether a string is a palindrome.
///
/// The check ignores case and whitespace. Punctuation is compared as-is.
#[derive(Debug, Parser)]
#[command(name = "palindrome", version, about)]
pub struct PalindromeCli {
    /// The string to test for palindrome.
    #[arg(short, long)]
    string: String,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl PalindromeCli {
    /// Runs the check and prints `True` or `False`.
    ///
    /// # Errors
    ///
    /// This command cannot fail once its arguments have been parsed; the
    /// `Result` keeps the entry points uniform.
    pub fn run(self) -> anyhow::Result<()> {
        super::setup_logging(self.verbose);
        println!("{}", self.check());
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(len = self.string.len()))]
    fn check(&self) -> &'static str {
        if is_palindrome(&self.string) {
            "True"
        } else {
            "False"
        }
    }
}
