//! Shared utilities for argument processing.

use crate::args::Args;
use crate::pages::categories;
use crate::settings::Settings;
use crate::sources::DataSource;

/// What: Determine the log level based on command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `--log-level`, which overrides `settings.conf`.
pub fn determine_log_level(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level
            .clone()
            .unwrap_or_else(|| settings.log_level.clone())
    }
}

/// Data file base from `--data-base` or settings.
pub fn data_base(args: &Args, settings: &Settings) -> String {
    args.data_base
        .clone()
        .unwrap_or_else(|| settings.data_base.clone())
}

/// What: Decide which data file to browse.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - `Ok(DataSource)` or a user-facing message when no usable source was given.
///
/// # Errors
/// - Neither `--data` nor `--category` given, or the category is unknown.
///
/// Details:
/// - `--data` takes precedence over `--category`.
pub fn resolve_data_source(args: &Args, settings: &Settings) -> Result<DataSource, String> {
    if let Some(data) = &args.data {
        return Ok(DataSource::parse(data));
    }
    let Some(slug) = &args.category else {
        return Err("no data to browse: pass --data <PATH|URL> or --category <SLUG>".to_string());
    };
    let Some(category) = categories::find(slug) else {
        return Err(format!(
            "unknown category {slug:?}; run with --list-categories to see the known ones"
        ));
    };
    Ok(DataSource::for_category(
        &data_base(args, settings),
        category.slug,
    ))
}
