use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
pub struct PostdeckArgs {
    /// Load configuration from a custom location. Defaults to: $XDG_CONFIG/postdeck/config.yml
    #[arg(short, long = "config", value_name = "FILE", global = true)]
    pub config_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print the posts once and exit
    List,
    /// Create a post
    Create {
        #[arg(short, long)]
        title: String,
        /// Post body. Short form is `-b` because `-c` selects the config file
        #[arg(short = 'b', long)]
        content: String,
    },
    /// Replace the title and content of a post
    Update {
        id: i64,
        #[arg(short, long)]
        title: String,
        /// Post body. Short form is `-b` because `-c` selects the config file
        #[arg(short = 'b', long)]
        content: String,
    },
    /// Delete a post
    Delete { id: i64 },
    /// Store the session token and author identity used for requests
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        author_id: i64,
        #[arg(long)]
        author_name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// Print a config template
    ConfigTemplate,
    /// Create a config file at --config, or $XDG_CONFIG/postdeck/config.yml
    ConfigInit,
}

/// Without a subcommand, opens the interactive posts screen.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub args: PostdeckArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}
