use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PresetLevel;
pub use crate::output::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThresholdPreset {
    /// Tighter targets for competitive queries
    Strict,
    /// Recommended targets (default)
    Balanced,
    /// Looser targets for small or legacy sites
    Lenient,
}

impl From<ThresholdPreset> for PresetLevel {
    fn from(preset: ThresholdPreset) -> Self {
        match preset {
            ThresholdPreset::Strict => PresetLevel::Strict,
            ThresholdPreset::Balanced => PresetLevel::Balanced,
            ThresholdPreset::Lenient => PresetLevel::Lenient,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "seoaudit")]
#[command(about = "Score, categorize and prioritize SEO issues for parsed web pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that runs audits.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct AuditArgs {
    /// Signals JSON file (backlinks, competitor keywords, Core Web Vitals)
    #[arg(long)]
    pub signals: Option<PathBuf>,

    /// Target keyword to check placement for (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Include checks that need deep signals such as Core Web Vitals
    #[arg(long)]
    pub deep: bool,

    /// Minimum word count before the page counts as thin content
    #[arg(long = "min-word-count")]
    pub min_word_count: Option<u64>,

    /// Threshold preset (strict, balanced, lenient)
    #[arg(long = "threshold-preset", value_enum)]
    pub threshold_preset: Option<ThresholdPreset>,

    /// Configuration file (defaults to the nearest .seoaudit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit one page from its parsed facts
    Audit {
        /// PageFacts JSON file
        facts: PathBuf,

        #[command(flatten)]
        audit: AuditArgs,

        /// Competitor URL for keyword gap analysis
        #[arg(long = "compare-url")]
        compare_url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and emoji
        #[arg(long, env = "SEOAUDIT_PLAIN")]
        plain: bool,

        /// Exit with status 2 when the score is below this value
        #[arg(long = "fail-under", value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_under: Option<u8>,

        /// Increase log verbosity (-v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Audit several pages in parallel and print one line per page
    Batch {
        /// PageFacts JSON files
        #[arg(required = true)]
        facts: Vec<PathBuf>,

        #[command(flatten)]
        audit: AuditArgs,

        /// Emit a JSON array of results instead of summary lines
        #[arg(long)]
        json: bool,

        /// Exit with status 2 when any page scores below this value
        #[arg(long = "fail-under", value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_under: Option<u8>,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Audit a page and a competitor page side by side
    Compare {
        /// PageFacts JSON for your page
        facts: PathBuf,

        /// PageFacts JSON for the competitor page
        competitor: PathBuf,

        /// Signals JSON for the competitor page
        #[arg(long = "competitor-signals")]
        competitor_signals: Option<PathBuf>,

        #[command(flatten)]
        audit: AuditArgs,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, env = "SEOAUDIT_PLAIN")]
        plain: bool,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the rule catalog
    Rules {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Audit { verbosity, .. }
            | Commands::Batch { verbosity, .. }
            | Commands::Compare { verbosity, .. } => *verbosity,
            Commands::Rules { .. } | Commands::Init { .. } => 0,
        }
    }
}
