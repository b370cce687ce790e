//! Jumptag is a tag-based jump navigation engine for text editors.
//!
//! When the user triggers a jump, the engine scans the visible text for
//! occurrences of a query (a literal character, word starts, line marks, or
//! an externally supplied pattern), assigns every occurrence a short
//! prefix-free label, and resolves the label the user subsequently types
//! into a caret jump. The host editor stays in charge of rendering and caret
//! movement; the engine owns the tag assignment and the incremental query
//! state.
//!
//! # Examples
//!
//! ```
//! use jumptag::prelude::*;
//! use std::ops::Range;
//! use std::sync::Arc;
//!
//! struct Buffer {
//!     text: Arc<str>,
//!     version: u64,
//!     caret: usize,
//! }
//!
//! impl EditorView for Buffer {
//!     fn text(&self) -> Arc<str> {
//!         self.text.clone()
//!     }
//!     fn content_version(&self) -> u64 {
//!         self.version
//!     }
//!     fn caret_offset(&self) -> usize {
//!         self.caret
//!     }
//!     fn visible_range(&self) -> Range<usize> {
//!         0..self.text.len()
//!     }
//! }
//!
//! let options = JumpOptionsBuilder::default()
//!     .case(CaseMatching::Ignore)
//!     .build()
//!     .unwrap();
//! let mut controller = SessionController::new(options);
//!
//! let view = Buffer {
//!     text: "let total = extent * 2;".into(),
//!     version: 0,
//!     caret: 0,
//! };
//! controller.start_scoped(&view, SearchMode::Char, Scope::Screen);
//!
//! // "x" occurs once, so it is tagged with the first alphabet character.
//! let shown = controller.feed_key(&view, Key::Char('x'));
//! assert!(matches!(shown, FeedOutcome::ShowTags));
//! match controller.feed_key(&view, Key::Char('a')) {
//!     FeedOutcome::Jump(jump) => assert_eq!(jump.offset, 13),
//!     outcome => panic!("expected a jump, got {outcome:?}"),
//! }
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

use thiserror::Error;

pub mod alphabet;
pub mod boundary;
mod engine;
pub mod options;
pub mod prelude;
pub mod query;
pub mod session;
pub mod tagger;

pub use crate::alphabet::Alphabet;
pub use crate::boundary::{Boundary, Scope, scope_boundary};
pub use crate::options::{JumpOptions, JumpOptionsBuilder};
pub use crate::query::{Popped, QueryState, QueryStatus};
pub use crate::session::{
    EditorView, FeedOutcome, Jump, JumpEffect, JumpMode, Key, Session, SessionController,
};
pub use crate::tagger::TagMap;

//------------------------------------------------------------------------------
/// Case sensitivity mode for literal queries
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum CaseMatching {
    /// Case-sensitive matching
    Respect,
    /// Case-insensitive matching
    Ignore,
    /// Smart case: case-insensitive unless the query contains uppercase
    #[default]
    Smart,
}

//------------------------------------------------------------------------------
/// What a session scans for.
///
/// The mode fixes the expected query length upfront; once that many query
/// characters have been typed, all further input selects a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// A single literal character, typed after the session starts.
    Char,
    /// A two-character literal sequence; the first character already narrows
    /// the field visibly before the tag set is finalized.
    Bigram,
    /// The start offset of every word in the boundary.
    Word,
    /// One mark per line, at the first non-whitespace character.
    Line,
    /// Non-overlapping matches of an externally supplied regular expression.
    Pattern(String),
}

impl SearchMode {
    /// Number of query characters expected before input becomes tag selection.
    pub fn query_len(&self) -> usize {
        match self {
            SearchMode::Char => 1,
            SearchMode::Bigram => 2,
            SearchMode::Word | SearchMode::Line | SearchMode::Pattern(_) => 0,
        }
    }
}

//------------------------------------------------------------------------------
/// One match start position inside a boundary region.
///
/// Occurrences are produced fresh by every scan and never mutated. They are
/// ordered by offset ascending; since boundary regions are disjoint and
/// sorted, that order agrees with the region order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occurrence {
    /// Byte offset of the match start in the document text.
    pub offset: usize,
    /// Index of the boundary range the match falls in.
    pub region: usize,
}

//==============================================================================
// A scan engine executes one search mode over the boundary

/// A scanning engine produces the occurrences of one query over a boundary.
pub trait ScanEngine: Display {
    /// Scans `text`, clipped to `boundary`, returning occurrences in
    /// ascending offset order with duplicate offsets removed. A match must
    /// start and end inside a single boundary region.
    fn scan(&self, text: &str, boundary: &Boundary) -> Vec<Occurrence>;
}

//------------------------------------------------------------------------------
/// Failure modes of the engine.
///
/// Every variant is recoverable: exhaustion truncates the tag set, invalid
/// boundaries scan as empty, staleness cancels the session. The worst
/// user-visible outcome is "no match, try again".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JumpError {
    /// A scan produced no occurrences inside the boundary.
    #[error("no occurrences found")]
    NoOccurrencesFound,
    /// More occurrences than the alphabet can label; the excess is dropped.
    #[error("alphabet exhausted: labeled {labeled} of {total} occurrences")]
    AlphabetExhausted {
        /// Occurrences that received a label.
        labeled: usize,
        /// Occurrences the scan produced.
        total: usize,
    },
    /// Boundary ranges overlap or are out of order.
    #[error("invalid boundary: ranges overlap at offset {offset}")]
    InvalidBoundary {
        /// Offset at which the overlap was detected.
        offset: usize,
    },
    /// A key event arrived after the document changed under the session.
    #[error("stale session: snapshot version {expected}, document version {actual}")]
    StaleSession {
        /// Content version captured when the session started.
        expected: u64,
        /// Content version reported by the editor view now.
        actual: u64,
    },
}
