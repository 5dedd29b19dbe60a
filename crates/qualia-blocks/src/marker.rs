//! Recognition of qualified block markers.
//!
//! A qualified block looks like:
//! ```text
//! # BEGIN work
//! #export http_proxy=http://proxy.example:3128
//! # END work
//! ```
//!
//! The token before `BEGIN` is the comment prefix used for the block body,
//! and the token after it is the quality tag. The closing line must repeat
//! both tokens exactly.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching opening block markers.
static BEGIN_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<prefix>\S+)\s+BEGIN\s+(?P<tag>\S+)")
        .expect("Invalid begin marker regex")
});

/// The prefix and tag of an open qualified block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockMarker {
    /// Comment prefix preceding the `BEGIN`/`END` keyword, e.g. `#`.
    pub prefix: String,
    /// Quality tag naming the block.
    pub tag: String,
}

impl BlockMarker {
    pub fn new(prefix: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            tag: tag.into(),
        }
    }

    /// Parses a `BEGIN` line, returning its marker if the line is one.
    ///
    /// # Example
    /// ```
    /// use qualia_blocks::BlockMarker;
    ///
    /// let marker = BlockMarker::parse_begin("  ; BEGIN laptop\n").unwrap();
    /// assert_eq!(marker.prefix, ";");
    /// assert_eq!(marker.tag, "laptop");
    /// assert!(BlockMarker::parse_begin("BEGIN laptop\n").is_none());
    /// ```
    pub fn parse_begin(line: &str) -> Option<Self> {
        let caps = BEGIN_MARKER_REGEX.captures(line)?;
        Some(Self::new(&caps["prefix"], &caps["tag"]))
    }

    /// Builds the matcher for this marker's `END` line.
    ///
    /// Prefix and tag are matched literally, and the tag must not run on into
    /// further non-whitespace characters.
    pub fn end_matcher(&self) -> EndMatcher {
        EndMatcher {
            prefix: self.prefix.clone(),
            tag: self.tag.clone(),
        }
    }
}

impl std::fmt::Display for BlockMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.tag)
    }
}

/// Matches the `END` line of one specific [`BlockMarker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndMatcher {
    prefix: String,
    tag: String,
}

impl EndMatcher {
    pub fn is_match(&self, line: &str) -> bool {
        let Some(rest) = line.trim_start().strip_prefix(self.prefix.as_str()) else {
            return false;
        };
        let Some(rest) = skip_separator(rest).and_then(|r| r.strip_prefix("END")) else {
            return false;
        };
        let Some(rest) = skip_separator(rest).and_then(|r| r.strip_prefix(self.tag.as_str()))
        else {
            return false;
        };
        rest.chars().next().is_none_or(char::is_whitespace)
    }
}

/// Strips a run of at least one whitespace character.
fn skip_separator(text: &str) -> Option<&str> {
    let rest = text.trim_start();
    (rest.len() < text.len()).then_some(rest)
}
