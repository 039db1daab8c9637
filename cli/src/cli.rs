use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "errnorm")]
#[command(
    author,
    version,
    about = "Turn raw API error payloads into field messages and notification text"
)]
pub struct Cli {
    /// Configuration file path (used when it exists)
    #[clap(short, long, global = true, default_value = "errnorm.toml")]
    pub config: String,

    /// Enable verbose output with diagnostic logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract field messages from an error payload (no status handling)
    Extract {
        #[clap(flatten)]
        input: InputArgs,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Normalize a failure value, including network and status handling
    Handle {
        #[clap(flatten)]
        input: InputArgs,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the single notification message for a failure value
    Toast {
        #[clap(flatten)]
        input: InputArgs,
    },

    /// Send one HTTP request and normalize the failure, if any
    Probe {
        /// URL to request
        url: String,

        /// HTTP method
        #[clap(short, long, default_value = "GET")]
        method: String,

        /// JSON request body
        #[clap(short, long)]
        body: Option<String>,

        /// Request timeout in seconds
        #[clap(short, long, default_value_t = 30)]
        timeout_seconds: u64,

        /// Fallback message when nothing better can be derived
        #[clap(long, default_value = "")]
        fallback: String,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate a default configuration file
    Init {
        /// Overwrite an existing file without asking
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

/// Where to read the payload from
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// File containing the payload (reads stdin when omitted)
    #[clap(short, long)]
    pub input: Option<String>,

    /// Fallback message when nothing better can be derived
    #[clap(long, default_value = "")]
    pub fallback: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Field/message table
    Table,

    /// Pretty-printed JSON object
    Json,
}
