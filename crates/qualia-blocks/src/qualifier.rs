//! Qualifying lines of text.
//!
//! A [`Qualifier`] walks a stream of lines looking for qualified blocks and
//! comments or uncomments each block body depending on whether the block's
//! tag is one of its active qualities:
//!
//! ```text
//! # BEGIN quality_name
//! lines in block
//! # END quality_name
//! ```
//!
//! Processing is lazy. Only the body of the block currently being scanned is
//! held in memory, so arbitrarily long input can be streamed through
//! [`Qualifier::qualify`].

use std::collections::{BTreeSet, VecDeque};

use crate::comment::CommentPrefix;
use crate::marker::{BlockMarker, EndMatcher};

/// Comments or uncomments qualified blocks according to a set of qualities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifier {
    qualities: BTreeSet<String>,
}

impl Qualifier {
    /// Creates a qualifier with the given active qualities.
    pub fn new<I, S>(qualities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            qualities: qualities.into_iter().map(Into::into).collect(),
        }
    }

    /// The active qualities.
    pub fn qualities(&self) -> &BTreeSet<String> {
        &self.qualities
    }

    /// Returns `true` if blocks tagged with `tag` should be live.
    pub fn is_active(&self, tag: &str) -> bool {
        self.qualities.contains(tag)
    }

    /// Lazily qualifies a sequence of lines.
    ///
    /// Lines should keep their terminators; they are passed through
    /// byte-for-byte except inside closed blocks.
    pub fn qualify<I>(&self, lines: I) -> Qualify<'_, I::IntoIter>
    where
        I: IntoIterator<Item = String>,
    {
        Qualify {
            qualifier: self,
            lines: lines.into_iter(),
            state: State::Normal,
            output: VecDeque::new(),
        }
    }

    /// Qualifies a whole text, preserving its line endings.
    ///
    /// # Example
    /// ```
    /// use qualia_blocks::Qualifier;
    ///
    /// let text = "# BEGIN spam\n#spam\n# END spam\n";
    /// assert_eq!(
    ///     Qualifier::new(["spam"]).qualify_str(text),
    ///     "# BEGIN spam\nspam\n# END spam\n"
    /// );
    /// ```
    pub fn qualify_str(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for line in self.qualify(text.split_inclusive('\n').map(str::to_string)) {
            result.push_str(&line);
        }
        result
    }

    /// Applies the closing decision to a finished block body.
    fn close_block(&self, marker: &BlockMarker, body: Vec<String>) -> Vec<String> {
        let prefix = CommentPrefix::new(marker.prefix.as_str());
        if self.is_active(&marker.tag) {
            tracing::debug!(tag = %marker.tag, lines = body.len(), "Activating block");
            prefix.uncomment(body)
        } else {
            tracing::debug!(tag = %marker.tag, lines = body.len(), "Deactivating block");
            prefix.comment(body)
        }
    }
}

/// Scanner state between two pulled lines.
#[derive(Debug)]
enum State {
    /// Outside any block; lines pass through.
    Normal,
    /// Inside an open block; lines are buffered until its `END` line.
    InBlock {
        marker: BlockMarker,
        end: EndMatcher,
        body: Vec<String>,
    },
    /// Input exhausted and flushed.
    Done,
}

/// Iterator returned by [`Qualifier::qualify`].
#[derive(Debug)]
pub struct Qualify<'q, I> {
    qualifier: &'q Qualifier,
    lines: I,
    state: State,
    output: VecDeque<String>,
}

impl<I> Qualify<'_, I>
where
    I: Iterator<Item = String>,
{
    /// Advances the state machine by one input line, queueing any output.
    fn step(&mut self) {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Normal => {
                let Some(line) = self.lines.next() else {
                    return;
                };
                if let Some(marker) = BlockMarker::parse_begin(&line) {
                    tracing::trace!(%marker, "Opened block");
                    self.state = State::InBlock {
                        end: marker.end_matcher(),
                        marker,
                        body: Vec::new(),
                    };
                } else {
                    self.state = State::Normal;
                }
                self.output.push_back(line);
            }
            State::InBlock {
                marker,
                end,
                mut body,
            } => match self.lines.next() {
                None => {
                    tracing::debug!(%marker, lines = body.len(), "Unterminated block left as is");
                    self.output.extend(body);
                }
                Some(line) if end.is_match(&line) => {
                    self.output
                        .extend(self.qualifier.close_block(&marker, body));
                    self.output.push_back(line);
                    self.state = State::Normal;
                }
                Some(line) => {
                    body.push(line);
                    self.state = State::InBlock { marker, end, body };
                }
            },
            State::Done => {}
        }
    }
}

impl<I> Iterator for Qualify<'_, I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.output.pop_front() {
                return Some(line);
            }
            if matches!(self.state, State::Done) {
                return None;
            }
            self.step();
        }
    }
}
