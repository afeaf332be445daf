use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::instrument;

use super::terminal::Colorize;
use crate::{
    config::ReportConfig,
    report::{OutputFormat, Report},
    source::{Fetch, HttpFetcher},
};

/// Compute the qualifying offer: the mean of the top player salaries.
#[derive(Debug, Parser)]
#[command(name = "qualifying-offer", version, about)]
pub struct ReportCli {
    /// Create a box and whisker plot and save it in the figures directory.
    #[arg(short, long)]
    box_and_whisker: bool,

    /// Create a histogram and save it in the figures directory.
    #[arg(long, visible_alias = "hist")]
    histogram: bool,

    /// Read settings from a TOML file.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config_file: Option<PathBuf>,

    /// Page containing the salary table.
    #[arg(long)]
    url: Option<String>,

    /// Number of top salaries to average.
    #[arg(short = 'n', long = "top", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    top_n: Option<u16>,

    /// Directory the figures are written to. It must already exist.
    #[arg(long, value_name = "DIR")]
    figures_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl ReportCli {
    /// Runs the report against the configured URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the table cannot be
    /// fetched, it holds no valid salary, or a figure cannot be written.
    pub fn run(self) -> anyhow::Result<()> {
        super::setup_logging(self.verbose);

        let config = self.config()?;
        let fetcher = HttpFetcher::new(config.timeout()).context("failed to create HTTP client")?;
        self.run_with(&fetcher, &config, &mut std::io::stdout().lock())
    }

    /// Builds the run configuration from the optional file and the flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = match &self.config_file {
            Some(path) => ReportConfig::load(path)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid configuration {}", path.display()))?,
            None => ReportConfig::default(),
        };

        if let Some(url) = &self.url {
            config.url.clone_from(url);
        }
        if let Some(top_n) = self.top_n {
            config.top_n = usize::from(top_n);
        }
        if let Some(dir) = &self.figures_dir {
            config.figures_dir.clone_from(dir);
        }
        config.box_and_whisker = self.box_and_whisker;
        config.histogram = self.histogram;

        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Generates the report with `fetcher`, writes the summary to `out`, then
    /// renders any requested figures.
    ///
    /// Nothing is written to `out` unless the offer was computed.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be generated, the summary cannot
    /// be written, or a figure cannot be rendered.
    #[instrument(level = "debug", skip_all)]
    pub fn run_with(
        &self,
        fetcher: &impl Fetch,
        config: &ReportConfig,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let report = Report::generate(fetcher, config)?;
        report.write_summary(self.output, out)?;
        out.flush()?;

        for path in report.render_figures(config)? {
            eprintln!("{}", format!("Wrote {}", path.display()).success());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> ReportCli {
        ReportCli::try_parse_from(std::iter::once("qualifying-offer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        ReportCli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_figures() {
        let config = parse(&[]).config().unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn figure_flags() {
        let config = parse(&["-b", "--hist"]).config().unwrap();
        assert!(config.box_and_whisker);
        assert!(config.histogram);

        let config = parse(&["--histogram"]).config().unwrap();
        assert!(!config.box_and_whisker);
        assert!(config.histogram);
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--url",
            "http://127.0.0.1:1/data.html",
            "-n",
            "10",
            "--figures-dir",
            "out",
        ])
        .config()
        .unwrap();
        assert_eq!(config.url, "http://127.0.0.1:1/data.html");
        assert_eq!(config.top_n, 10);
        assert_eq!(config.figures_dir, PathBuf::from("out"));
    }

    #[test]
    fn zero_top_is_rejected_by_parser() {
        assert!(ReportCli::try_parse_from(["qualifying-offer", "--top", "0"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        std::fs::write(&path, "top_n = 50\nurl = \"http://example.invalid/\"\n").unwrap();

        let config = parse(&["-c", path.to_str().unwrap(), "-n", "7"])
            .config()
            .unwrap();
        assert_eq!(config.top_n, 7);
        assert_eq!(config.url, "http://example.invalid/");
    }

    #[test]
    fn bad_config_file_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("report.toml");
        std::fs::write(&path, "top_n = \"many\"\n").unwrap();

        let err = parse(&["--config", path.to_str().unwrap()])
            .config()
            .unwrap_err();
        assert!(format!("{err:#}").contains("report.toml"));
    }
}
