//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::settings::Settings;
use crate::state::Letter;

/// Output format of the headless `--print` mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// The widget markup used on category pages.
    Html,
}

/// pkgshelf - category pages and package browser for documentation sites
#[derive(Parser, Debug)]
#[command(name = "pkgshelf")]
#[command(version)]
#[command(about = "Generate category pages and browse category package lists", long_about = None)]
pub struct Args {
    /// Write one .qmd page per category into DIR (default: pages_dir from settings.conf)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub generate: Option<Option<PathBuf>>,

    /// Directory or URL prefix of the category data files
    #[arg(long, value_name = "PATH|URL")]
    pub data_base: Option<String>,

    /// Browse the data file of this category (see --list-categories)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Browse this data file instead of a category's file
    #[arg(short, long, value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Print the filtered view once and exit instead of starting the browser
    #[arg(short, long)]
    pub print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Initial search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Initial first-letter filter (A-Z)
    #[arg(short, long)]
    pub letter: Option<Letter>,

    /// List known categories and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory holding settings.conf (default: ~/.config/pkgshelf)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Whether the arguments select a mode that exits without the terminal browser.
    pub const fn is_headless(&self) -> bool {
        self.print || self.list_categories || self.generate.is_some()
    }
}

/// What: Process all command-line arguments and run early-exit modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`
///
/// Output:
/// - `Some(exit_code)` when a headless mode ran; `None` to continue with the
///   interactive browser.
///
/// Details:
/// - `--list-categories` wins over `--generate`, which wins over `--print`.
pub async fn process_args(args: &Args, settings: &Settings) -> Option<i32> {
    use crate::args::{categories, generate, print, utils};

    let data_base = utils::data_base(args, settings);

    if args.list_categories {
        return Some(categories::handle_list_categories(&data_base));
    }

    if let Some(dir) = &args.generate {
        let out_dir = dir.clone().unwrap_or_else(|| settings.pages_dir.clone());
        return Some(generate::handle_generate(&out_dir, &data_base));
    }

    if args.print {
        let source = match utils::resolve_data_source(args, settings) {
            Ok(source) => source,
            Err(msg) => {
                eprintln!("{msg}");
                return Some(2);
            }
        };
        return Some(
            print::handle_print(source, args.query.as_deref(), args.letter, args.format).await,
        );
    }

    None
}
