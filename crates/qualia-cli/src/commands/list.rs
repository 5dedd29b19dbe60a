//! List command implementation

use std::io::Write;

use colored::Colorize;

use qualia_blocks::{Block, Qualifier, parse_blocks};

use super::Source;
use crate::error::Result;

/// Print every closed qualified block in the sources.
///
/// One line per block: location, marker, whether its quality is active, and
/// whether its body is currently commented. Blocks whose state disagrees
/// with the qualities are flagged with `*`.
pub fn run_list<W: Write>(qualifier: &Qualifier, sources: &[Source], out: &mut W) -> Result<()> {
    for source in sources {
        let text = source.read()?;
        for block in parse_blocks(&text) {
            writeln!(out, "{}", format_block(&source.to_string(), &block, qualifier))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn format_block(label: &str, block: &Block, qualifier: &Qualifier) -> String {
    let active = qualifier.is_active(&block.marker.tag);
    // Active blocks should be live, inactive ones commented. An empty body
    // counts as commented but is left alone either way.
    let drifted = if active {
        block.commented && block.body_len() > 0
    } else {
        !block.commented
    };
    let drift = if drifted { "*" } else { " " };
    let activity = if active {
        "active".green()
    } else {
        "inactive".yellow()
    };
    let state = if block.commented { "commented" } else { "live" };

    format!(
        "{drift} {label}:{}-{}\t{}\t{activity}\t{state}",
        block.start_line,
        block.end_line,
        block.marker.to_string().bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualia_blocks::BlockMarker;

    fn block(commented: bool) -> Block {
        Block {
            marker: BlockMarker::new("#", "work"),
            start_line: 3,
            end_line: 5,
            commented,
        }
    }

    #[test]
    fn test_format_block_in_sync() {
        let line = format_block("rc", &block(false), &Qualifier::new(["work"]));
        assert!(line.starts_with("  rc:3-5\t"));
        assert!(line.contains("active"));
        assert!(line.ends_with("live"));
    }

    #[test]
    fn test_format_block_flags_drift() {
        let line = format_block("rc", &block(true), &Qualifier::new(["work"]));
        assert!(line.starts_with("* rc:3-5"));
        let line = format_block("rc", &block(false), &Qualifier::default());
        assert!(line.starts_with("* rc:3-5"));
        assert!(line.contains("inactive"));
    }

    #[test]
    fn test_format_empty_active_block_is_in_sync() {
        let blocks = parse_blocks("# BEGIN work\n# END work\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body_len(), 0);

        let qualifier = Qualifier::new(["work"]);
        let line = format_block("rc", &blocks[0], &qualifier);
        assert!(line.starts_with("  rc:1-2\t"));
        let line = format_block("rc", &blocks[0], &Qualifier::default());
        assert!(line.starts_with("  rc:1-2\t"));
    }
}
