//! Read-only listing of qualified blocks.
//!
//! Uses the same scanning rules as [`crate::Qualifier`]: blocks do not nest,
//! and a block without its `END` line is not a block at all.

use crate::comment::CommentPrefix;
use crate::marker::{BlockMarker, EndMatcher};

/// A closed qualified block found in some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The prefix and tag of the block.
    pub marker: BlockMarker,
    /// The 1-based line number of the `BEGIN` line.
    pub start_line: usize,
    /// The 1-based line number of the `END` line.
    pub end_line: usize,
    /// Whether the body is currently fully commented out.
    pub commented: bool,
}

impl Block {
    /// Number of body lines between the markers.
    pub fn body_len(&self) -> usize {
        self.end_line - self.start_line - 1
    }
}

/// Parses all closed blocks from the given content, in order of appearance.
///
/// # Example
/// ```
/// use qualia_blocks::parser::parse_blocks;
///
/// let content = "alias ls='ls -G'\n# BEGIN linux\n#alias ls='ls --color'\n# END linux\n";
/// let blocks = parse_blocks(content);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].marker.tag, "linux");
/// assert_eq!((blocks[0].start_line, blocks[0].end_line), (2, 4));
/// assert!(blocks[0].commented);
/// ```
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<(BlockMarker, EndMatcher, usize, Vec<&str>)> = None;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let line_number = idx + 1;
        match open.take() {
            None => {
                open = BlockMarker::parse_begin(line).map(|marker| {
                    let end = marker.end_matcher();
                    (marker, end, line_number, Vec::new())
                });
            }
            Some((marker, end, start_line, mut body)) => {
                if end.is_match(line) {
                    let commented = CommentPrefix::new(marker.prefix.as_str()).is_commented(&body);
                    blocks.push(Block {
                        marker,
                        start_line,
                        end_line: line_number,
                        commented,
                    });
                } else {
                    body.push(line);
                    open = Some((marker, end, start_line, body));
                }
            }
        }
    }

    blocks
}

/// Finds all closed blocks tagged with `tag`.
pub fn find_blocks(content: &str, tag: &str) -> Vec<Block> {
    parse_blocks(content)
        .into_iter()
        .filter(|block| block.marker.tag == tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks_empty() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("No blocks here\n").is_empty());
    }

    #[test]
    fn test_unterminated_block_not_reported() {
        assert!(parse_blocks("# BEGIN spam\n#spam\n").is_empty());
    }

    #[test]
    fn test_live_block_not_commented() {
        let blocks = parse_blocks("# BEGIN spam\nspam\n# END spam\n");
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].commented);
        assert_eq!(blocks[0].body_len(), 1);
    }

    #[test]
    fn test_find_blocks_by_tag() {
        let content = "# BEGIN a\n# END a\n# BEGIN b\n#x\n# END b\n# BEGIN a\n#y\n# END a\n";
        let found = find_blocks(content, "a");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].start_line, 6);
        assert!(find_blocks(content, "c").is_empty());
    }
}
