//! Qualified block handling for qualia.
//!
//! This crate toggles marked regions of a text between live and commented
//! out, based on a set of active "qualities":
//!
//! ```text
//! # BEGIN work
//! export http_proxy=http://proxy.example:3128
//! # END work
//! ```
//!
//! With `work` active the block body is uncommented; otherwise it is
//! commented with the prefix given before `BEGIN` (`#` here). The marker
//! lines themselves are never touched.
//!
//! - [`comment`] holds the idempotent, indentation-preserving transforms.
//! - [`marker`] recognizes `BEGIN`/`END` lines.
//! - [`qualifier`] is the streaming scanner that ties the two together.
//! - [`parser`] lists blocks without changing anything.

pub mod comment;
pub mod indent;
pub mod marker;
pub mod parser;
pub mod qualifier;

pub use comment::CommentPrefix;
pub use marker::{BlockMarker, EndMatcher};
pub use parser::{Block, find_blocks, parse_blocks};
pub use qualifier::{Qualifier, Qualify};
