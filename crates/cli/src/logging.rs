//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for command output (and for
//! `--json` consumers).

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the computed filter.
pub const LOG_ENV_VAR: &str = "BRANDKIT_LOG";

/// Filter directive for the given verbosity flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "brandkit=error,brandkit_core=error";
    }
    match verbose {
        0 => "brandkit=info,brandkit_core=info",
        1 => "brandkit=debug,brandkit_core=debug",
        _ => "brandkit=trace,brandkit_core=trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let fmt_layer = fmt::layer()
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(io::stderr);

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        for (verbose, quiet) in [(0, false), (1, false), (2, false), (0, true)] {
            assert!(EnvFilter::try_new(default_directive(verbose, quiet)).is_ok());
        }
    }
}
