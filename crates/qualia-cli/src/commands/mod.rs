//! Command implementations for qualia-cli

pub mod list;
pub mod qualify;

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;

pub use list::run_list;
pub use qualify::{run_check, run_in_place, run_print};

/// Where a piece of input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Sources for the given file list, or stdin when it is empty.
    pub fn from_files(files: &[PathBuf]) -> Vec<Source> {
        if files.is_empty() {
            vec![Source::Stdin]
        } else {
            files.iter().cloned().map(Source::File).collect()
        }
    }

    /// Read the whole source as text.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin().lock().read_to_string(&mut text)?;
                Ok(text)
            }
            Source::File(path) => Ok(qualia_fs::io::read_text(path)?),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
