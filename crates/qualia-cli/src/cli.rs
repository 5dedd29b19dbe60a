//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Qualia - Toggle qualified blocks in config files
///
/// Reads lines from stdin (or the given files) and comments or uncomments
/// every block of the form
///
///   # BEGIN quality
///   ...
///   # END quality
///
/// depending on whether `quality` is one of the active QUALITIES.
///
/// Examples:
///   qualia work < ~/.bashrc.in > ~/.bashrc
///   qualia -i -f ~/.gitconfig home     # Rewrite a file in place
///   qualia --check -f app.conf prod    # Exit non-zero on drift
#[derive(Parser, Debug)]
#[command(name = "qualia")]
#[command(author, version, about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Active qualities; blocks with these tags are uncommented
    pub qualities: Vec<String>,

    /// Config file with additional qualities (.toml, .json, .yaml)
    #[arg(short, long, env = "QUALIA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Process these files instead of stdin
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Rewrite the files in place instead of printing them
    #[arg(short, long, requires = "files", conflicts_with_all = ["check", "list"])]
    pub in_place: bool,

    /// Show what would change and exit non-zero if anything would
    #[arg(long, conflicts_with = "list")]
    pub check: bool,

    /// List qualified blocks instead of transforming
    #[arg(long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The action selected by the flags.
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if self.check {
            Mode::Check
        } else if self.in_place {
            Mode::InPlace
        } else {
            Mode::Print
        }
    }
}

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write the qualified text to stdout
    Print,
    /// Rewrite changed files atomically
    InPlace,
    /// Print a diff for each changed input and fail if any changed
    Check,
    /// Print the qualified blocks found
    List,
}
