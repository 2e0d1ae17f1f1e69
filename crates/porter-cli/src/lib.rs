// porter-cli: shared utilities for CLI tools.

use std::process;

use porter_stem::handle::{NonAsciiPolicy, StemHandle, StemOptions};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`PORTER_LOG=debug`).
pub const LOG_ENV: &str = "PORTER_LOG";

/// Install the stderr log subscriber.
///
/// The filter comes from `PORTER_LOG` and defaults to `warn`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Help text for the options understood by [`parse_stem_options`].
pub const STEM_OPTIONS_HELP: &str = "\
  --keep-case             Keep the case pattern of each word in its stem
  --non-ascii POLICY      reject | skip | stem (default: reject)
  --min-length N          Minimum word length for stemming (default: 3)";

/// Parse the stemming options shared by all tools.
///
/// Recognized options are removed; everything else is returned in order.
/// Returns `(options, remaining_args)`.
pub fn parse_stem_options(args: &[String]) -> Result<(StemOptions, Vec<String>), String> {
    let mut options = StemOptions::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--keep-case" {
            options.keep_case = true;
        } else if let Some(val) = arg.strip_prefix("--non-ascii=") {
            options.non_ascii = parse_policy(val)?;
        } else if arg == "--non-ascii" {
            let val = iter.next().ok_or("--non-ascii requires a value")?;
            options.non_ascii = parse_policy(val)?;
        } else if let Some(val) = arg.strip_prefix("--min-length=") {
            options.min_word_length = parse_number("--min-length", val)?;
        } else if arg == "--min-length" {
            let val = iter.next().ok_or("--min-length requires a value")?;
            options.min_word_length = parse_number("--min-length", val)?;
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((options, remaining))
}

fn parse_policy(val: &str) -> Result<NonAsciiPolicy, String> {
    val.parse().map_err(|e| format!("{e}"))
}

/// Parse a non-negative integer option value.
pub fn parse_number(flag: &str, val: &str) -> Result<usize, String> {
    val.parse()
        .map_err(|_| format!("invalid number for {flag}: {val}"))
}

/// Create a handle from parsed options.
pub fn build_handle(options: StemOptions) -> StemHandle {
    tracing::debug!(?options, "creating stem handle");
    StemHandle::with_options(options)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
