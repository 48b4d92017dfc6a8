//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::application::Pattern;

/// Run textbook design-pattern demonstrations: composite trees, flyweight glyphs and more
#[derive(Parser, Debug)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .patternbook.toml
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the patterns in the catalog
    List,

    /// Run one pattern demo
    Run {
        /// Pattern to run
        #[arg(value_enum)]
        pattern: Pattern,
    },

    /// Run every pattern demo in catalog order
    All,

    /// Show the composite demo tree
    Tree {
        /// Rendering style
        #[arg(short, long, value_enum, default_value_t = TreeStyle::Dashes)]
        style: TreeStyle,
    },

    /// Render a document through the flyweight glyph factory
    Glyphs {
        /// Text to render (default: configured document)
        document: Option<String>,
        /// Point size of the first character
        #[arg(short, long)]
        point_size: Option<u32>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// How `tree` draws the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeStyle {
    /// Depth marks before each name
    Dashes,
    /// Box-drawing branches
    Box,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file path
    Path,
}
