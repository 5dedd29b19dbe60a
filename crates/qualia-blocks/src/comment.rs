//! Commenting and uncommenting groups of lines.
//!
//! Both transforms are idempotent: commenting an already commented group or
//! uncommenting a group that is not fully commented returns it unchanged.

use crate::indent::{common_indent, leading_indent};

/// Comments and uncomments lines using a single prefix token.
///
/// # Example
/// ```
/// use qualia_blocks::CommentPrefix;
///
/// let prefix = CommentPrefix::new("#");
/// assert_eq!(
///     prefix.uncomment(vec!["#export EDITOR=vi\n".to_string()]),
///     vec!["export EDITOR=vi\n"]
/// );
/// assert_eq!(
///     prefix.comment(vec!["export EDITOR=vi\n".to_string()]),
///     vec!["#export EDITOR=vi\n"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentPrefix {
    prefix: String,
}

impl CommentPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix token this instance inserts and strips.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if every line starts with the prefix after its indentation.
    ///
    /// An empty group is vacuously commented.
    pub fn is_commented<S: AsRef<str>>(&self, lines: &[S]) -> bool {
        lines.iter().all(|line| self.strip_once(line.as_ref()).is_some())
    }

    /// Uncomments a group of lines.
    ///
    /// Only a fully commented group is touched. One layer of prefix is removed
    /// per pass, and passes repeat while the group is still fully commented,
    /// so `##foo` and `#foo` both end up as `foo`. To keep a level of
    /// commenting, include a line that carries only one layer:
    ///
    /// ```
    /// use qualia_blocks::CommentPrefix;
    ///
    /// let prefix = CommentPrefix::new("#");
    /// let lines = vec!["##foo\n".to_string(), "#\n".to_string()];
    /// assert_eq!(prefix.uncomment(lines), vec!["#foo\n", "\n"]);
    /// ```
    pub fn uncomment(&self, mut lines: Vec<String>) -> Vec<String> {
        if lines.is_empty() || self.prefix.is_empty() {
            return lines;
        }
        while self.is_commented(&lines) {
            lines = lines
                .iter()
                .map(|line| self.strip_once(line).unwrap_or_else(|| line.clone()))
                .collect();
        }
        lines
    }

    /// Comments a group of lines.
    ///
    /// The prefix is inserted once per line, right after the indentation all
    /// lines share. Any further indentation stays after the prefix.
    pub fn comment(&self, lines: Vec<String>) -> Vec<String> {
        if self.is_commented(&lines) {
            return lines;
        }
        let indent = common_indent(&lines).to_string();
        lines
            .iter()
            .map(|line| format!("{indent}{}{}", self.prefix, &line[indent.len()..]))
            .collect()
    }

    /// Removes one `<indent><prefix>` occurrence, keeping the indent.
    fn strip_once(&self, line: &str) -> Option<String> {
        let indent = leading_indent(line);
        line[indent.len()..]
            .strip_prefix(self.prefix.as_str())
            .map(|rest| format!("{indent}{rest}"))
    }
}

impl std::fmt::Display for CommentPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}
