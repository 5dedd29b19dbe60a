//! Qualify command implementations
//!
//! Streams stdin to stdout, prints qualified files, rewrites them in place,
//! or checks them for drift.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use qualia_blocks::Qualifier;

use super::Source;
use crate::error::{CliError, Result};

/// Lines of a reader, terminators included.
///
/// Stops at the first read error and keeps it for the caller, so the
/// qualifier only ever sees well-formed lines.
struct Lines<R> {
    reader: R,
    error: Option<io::Error>,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

/// Stream `reader` through the qualifier into `writer`, line by line.
///
/// Only the block currently being scanned is buffered. A read error ends
/// the stream after everything produced so far has been written.
pub fn run_stream<R: BufRead, W: Write>(qualifier: &Qualifier, reader: R, mut writer: W) -> Result<()> {
    let mut lines = Lines {
        reader,
        error: None,
    };
    for line in qualifier.qualify(&mut lines) {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    match lines.error {
        Some(e) => Err(CliError::Io(e)),
        None => Ok(()),
    }
}

/// Print the qualified text of every source to `out`.
pub fn run_print<W: Write>(qualifier: &Qualifier, sources: &[Source], out: &mut W) -> Result<()> {
    for source in sources {
        match source {
            Source::Stdin => run_stream(qualifier, io::stdin().lock(), &mut *out)?,
            Source::File(_) => {
                let text = source.read()?;
                out.write_all(qualifier.qualify_str(&text).as_bytes())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Rewrite each file whose qualified text differs from its content.
///
/// Returns the files that were changed.
pub fn run_in_place(qualifier: &Qualifier, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut changed = Vec::new();
    for path in files {
        let text = qualia_fs::io::read_text(path)?;
        let qualified = qualifier.qualify_str(&text);
        if qualified == text {
            tracing::debug!(path = %path.display(), "Already qualified");
            continue;
        }
        qualia_fs::io::write_text(path, &qualified)?;
        tracing::info!(path = %path.display(), "Rewrote file");
        changed.push(path.clone());
    }
    Ok(changed)
}

/// Print a diff for every source that qualifying would change.
///
/// Fails with a user error naming the number of changed inputs, so the
/// process exits non-zero on drift.
pub fn run_check<W: Write>(qualifier: &Qualifier, sources: &[Source], out: &mut W) -> Result<()> {
    let mut drifted = 0;
    for source in sources {
        let text = source.read()?;
        let qualified = qualifier.qualify_str(&text);
        if qualified != text {
            drifted += 1;
            write!(out, "{}", render_diff(&source.to_string(), &text, &qualified))?;
        }
    }
    out.flush()?;

    if drifted == 0 {
        Ok(())
    } else {
        Err(CliError::user(format!("{drifted} input(s) would change")))
    }
}

/// Render a unified diff between the original and qualified text.
pub fn render_diff(label: &str, old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut rendered = String::new();
    rendered.push_str(&format!("{}\n", format!("--- {label}").red().bold()));
    rendered.push_str(&format!("{}\n", format!("+++ {label}").green().bold()));

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        rendered.push_str(&format!("{}\n", hunk.header().to_string().cyan()));
        for change in hunk.iter_changes() {
            let text = change.value().trim_end_matches('\n');
            let line = match change.tag() {
                ChangeTag::Delete => format!("-{text}").red(),
                ChangeTag::Insert => format!("+{text}").green(),
                ChangeTag::Equal => format!(" {text}").normal(),
            };
            rendered.push_str(&format!("{line}\n"));
        }
    }
    rendered
}
