//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio content query CLI. Every subcommand prints JSON to stdout.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Paginated published posts, newest first
    Posts {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Published craft items, newest first
    Crafts,

    /// All projects, latest start date first
    Projects,

    /// Published posts grouped by year, newest year first
    Archive,

    /// Tag counts, or the posts and projects carrying one tag
    Tags {
        /// Tag to list entries for
        tag: Option<String>,
    },

    /// A post with its neighbors, authors, subposts and table of contents
    Post {
        /// Post id, e.g. `series` or `series/part-1`
        id: String,
    },

    /// A craft item with its neighbors and reading time
    Craft { id: String },

    /// A project with its neighbors and table of contents
    Project { id: String },

    /// An author profile and their posts
    Author { id: String },

    /// Featured posts and crafts, recent projects
    Home,

    /// Site metadata, navigation, social links and tech stack
    Site,
}

impl Cli {
    /// Commands that look up a single entry by id.
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self.command,
            Commands::Post { .. }
                | Commands::Craft { .. }
                | Commands::Project { .. }
                | Commands::Author { .. }
        )
    }
}
