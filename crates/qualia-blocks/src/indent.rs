//! Indentation helpers shared by the comment transforms.

/// Returns the leading indentation of a line.
///
/// Indentation is any run of whitespace at the start of the line, excluding
/// line terminators, so a blank line (`"\n"`) has no indentation.
pub fn leading_indent(line: &str) -> &str {
    let end = line
        .find(|c: char| !is_indent_char(c))
        .unwrap_or(line.len());
    &line[..end]
}

/// Finds the longest indentation shared by every line.
///
/// Returns an empty string for an empty list, or when any two lines disagree
/// on their first indentation character.
///
/// # Example
/// ```
/// use qualia_blocks::indent::common_indent;
///
/// assert_eq!(common_indent(&["  foo", "   bar"]), "  ");
/// assert_eq!(common_indent(&["\tfoo", "  bar"]), "");
/// ```
pub fn common_indent<S: AsRef<str>>(lines: &[S]) -> &str {
    let Some((first, rest)) = lines.split_first() else {
        return "";
    };

    let mut common = leading_indent(first.as_ref());
    for line in rest {
        let indent = leading_indent(line.as_ref());
        let shared = common
            .char_indices()
            .zip(indent.chars())
            .find(|((_, a), b)| a != b)
            .map(|((idx, _), _)| idx)
            .unwrap_or_else(|| common.len().min(indent.len()));
        common = &common[..shared];
        if common.is_empty() {
            break;
        }
    }
    common
}

fn is_indent_char(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_indent_empty() {
        let lines: [&str; 0] = [];
        assert_eq!(common_indent(&lines), "");
    }

    #[test]
    fn test_common_indent_no_indent() {
        assert_eq!(common_indent(&["abc", "abc"]), "");
    }

    #[test]
    fn test_common_indent_shared() {
        assert_eq!(common_indent(&[" abc", " abc"]), " ");
    }

    #[test]
    fn test_common_indent_one_line_no_indent() {
        assert_eq!(common_indent(&["spam"]), "");
    }

    #[test]
    fn test_common_indent_one_line() {
        assert_eq!(common_indent(&["  spam"]), "  ");
    }

    #[test]
    fn test_common_indent_mixed_tabs_and_spaces() {
        assert_eq!(common_indent(&["\t  a", "\t b", "\t\tc"]), "\t");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        assert_eq!(leading_indent("\n"), "");
        assert_eq!(leading_indent("  \r\n"), "  ");
        assert_eq!(common_indent(&["  foo\n", "\n"]), "");
    }
}
