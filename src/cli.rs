use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use neutral::{AgreementScope, Category};

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

/// Grammatical category to rewrite on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// he/she
    Subject,
    /// him/her
    Object,
    /// his/her + noun
    Determiner,
    /// his/hers
    Possessive,
    /// himself/herself
    Reflexive,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Subject => Category::NominativeSubject,
            CategoryArg::Object => Category::ObliqueObject,
            CategoryArg::Determiner => Category::PossessiveDeterminer,
            CategoryArg::Possessive => Category::PossessivePronoun,
            CategoryArg::Reflexive => Category::Reflexive,
        }
    }
}

/// How many verb agreement fixes to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgreementArg {
    /// Correct every "<subject> was/is"
    All,
    /// Correct only the first of each
    First,
}

impl From<AgreementArg> for AgreementScope {
    fn from(arg: AgreementArg) -> Self {
        match arg {
            AgreementArg::All => AgreementScope::All,
            AgreementArg::First => AgreementScope::First,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "neutral",
    about = "Rewrite gendered pronouns into a gender-neutral pronoun set",
    version,
    after_help = "Logs are written to: ~/.local/share/neutral/logs/neutral.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to neutral.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite text (from arguments, a file, or stdin)
    Rewrite {
        /// Text to rewrite (reads stdin if neither text nor --file is given)
        text: Vec<String>,

        /// Read text from a file
        #[arg(long, short = 'f', conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Pronoun set to use (defaults to config, then "they")
        #[arg(long, short = 's')]
        set: Option<String>,

        /// Rewrite only one grammatical category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Fail on unknown pronoun sets instead of falling back to "they"
        #[arg(long)]
        strict: bool,

        /// Verb agreement scope
        #[arg(long, value_enum)]
        agreement: Option<AgreementArg>,

        /// Write the result to a file instead of stdout
        #[arg(long, short = 'O')]
        output: Option<PathBuf>,
    },

    /// List available pronoun sets
    Sets {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show one pronoun set
    Show {
        /// Pronoun set name
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// New value
        value: String,
    },
}
