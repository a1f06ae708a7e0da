//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for folio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio page interactivity, driven from the terminal")]
#[command(long_about = r#"
Folio runs the interactive layer of a portfolio page without a browser.

Each console command is one page event: focusing and typing into the
contact form, submitting it, opening the mobile menu, following anchors,
scrolling and pressing skill or project tiles. Feedback, the simulated
send and every animation run on real timers.

Configuration files are loaded from (in priority order):
1. FOLIO_* environment variables
2. --config <path>     Explicit config file
3. ./folio.toml        Project-level config
4. ~/.config/folio/config.toml   Global config

Example:
  folio
  folio --script demo.txt
  folio --config site.toml -vv
"#)]
pub struct Cli {
    /// Replay console commands from a file in virtual time, then exit
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
