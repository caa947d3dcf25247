use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rqd")]
#[command(
    author,
    version,
    about = "Send API requests with session token handling and readable failures"
)]
pub struct Cli {
    /// Configuration file
    #[clap(short, long, global = true, default_value = "dispatch.toml")]
    pub config: String,

    /// Session storage file (defaults to the user config directory)
    #[clap(long, global = true)]
    pub store: Option<String>,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one request to a path under the configured base path
    Send {
        /// Target path, appended to base_path
        path: String,

        /// HTTP method
        #[clap(short = 'X', long, default_value = "GET")]
        method: String,

        /// JSON payload
        #[clap(short, long)]
        data: Option<String>,
    },

    /// Inspect or edit the stored session token
    Token {
        #[clap(subcommand)]
        action: TokenAction,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Print the stored token
    Show,

    /// Store a token
    Set {
        /// Token value
        value: String,
    },

    /// Wipe the whole session store
    Clear {
        /// Skip the confirmation prompt
        #[clap(short, long, default_value_t = false)]
        yes: bool,
    },
}
