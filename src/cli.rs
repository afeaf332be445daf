/// Argument parsing for the `palindrome` binary.
pub mod palindrome;
pub use palindrome::PalindromeCli;

/// Argument parsing for the `qualifying-offer` binary.
pub mod report;
pub use report::ReportCli;

pub mod terminal;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so that stdout carries only the command's output.
/// `verbosity` is the number of `-v` flags; `RUST_LOG` directives are
/// honoured as well.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Prints `error` with its cause chain to stderr.
pub fn report_error(error: &anyhow::Error) {
    use terminal::Colorize;

    eprintln!("{} {error:#}", "Error:".warning());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_logging_installs_the_global_subscriber() {
        setup_logging(2);
        assert!(tracing::dispatcher::has_been_set());
        tracing::debug!("subscriber installed");
    }
}
