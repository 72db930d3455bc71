//! Command line argument parsing for the lemmatag CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::resolve::{FuzzyPolicy, ResolverConfig};

/// lemmatag - annotate words with lemmas from a lexicon
#[derive(Parser, Debug, Clone)]
#[command(name = "lemmatag")]
#[command(about = "Annotate words with normalized lemmas, with fuzzy fallback")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LemmatagArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEMMATAG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Lexicon file (JSON); the built-in lexicon is used when omitted
    #[arg(short, long, value_name = "LEXICON_FILE", global = true)]
    pub lexicon: Option<PathBuf>,

    /// Vocabulary word list, one word per line
    #[arg(long, value_name = "WORDS_FILE", global = true)]
    pub vocabulary: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LemmatagArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the edit distance between two words
    Distance(DistanceArgs),

    /// List lemma candidates for a word
    Resolve(ResolveArgs),

    /// Annotate a word in a text and print the edited text
    Tag(TagArgs),

    /// Show the loaded lexicon
    Lexicon(LexiconArgs),
}

/// Arguments for computing a distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "A")]
    pub a: String,

    /// Second word
    #[arg(value_name = "B")]
    pub b: String,
}

/// Overrides applied on top of the configured resolver settings
#[derive(Args, Debug, Clone, Default)]
pub struct ResolverOverrides {
    /// Fuzzy fallback policy
    #[arg(short, long)]
    pub policy: Option<PolicyArg>,

    /// Maximum accepted edit distance for the nearest policy
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Maximum number of ranked suggestions
    #[arg(long)]
    pub limit: Option<usize>,
}

impl ResolverOverrides {
    /// Apply the overrides to a resolver configuration.
    pub fn apply(&self, mut config: ResolverConfig) -> ResolverConfig {
        if let Some(policy) = self.policy {
            config.policy = policy.into();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(limit) = self.limit {
            config.max_suggestions = limit;
        }
        config
    }
}

/// Arguments for resolving a word
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Word to resolve
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub resolver: ResolverOverrides,
}

/// Arguments for tagging a word in a text
#[derive(Parser, Debug, Clone)]
pub struct TagArgs {
    /// Text containing the word
    #[arg(value_name = "TEXT", required_unless_present = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Cursor position, in characters
    #[arg(long, value_name = "N", conflicts_with = "selection")]
    pub cursor: Option<usize>,

    /// Selection as START:END, in characters
    #[arg(short, long, value_name = "START:END")]
    pub selection: Option<String>,

    /// Pick option N (1-based) instead of asking; 0 declines
    #[arg(long, value_name = "N")]
    pub pick: Option<usize>,

    /// Lemma to use when the manual option is picked non-interactively
    #[arg(long, value_name = "LEMMA", requires = "pick")]
    pub manual: Option<String>,

    #[command(flatten)]
    pub resolver: ResolverOverrides,
}

/// Arguments for showing the lexicon
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Also list the vocabulary words
    #[arg(long)]
    pub words: bool,
}

/// Fuzzy policies available in CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PolicyArg {
    /// Top suggestions ranked by edit distance
    Ranked,
    /// Single nearest match within the threshold
    Nearest,
}

impl From<PolicyArg> for FuzzyPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Ranked => FuzzyPolicy::Ranked,
            PolicyArg::Nearest => FuzzyPolicy::Nearest,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
