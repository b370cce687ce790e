//! Convenience re-exports for embedding the engine.

pub use crate::alphabet::Alphabet;
pub use crate::boundary::{Boundary, Scope, scope_boundary};
pub use crate::options::{JumpOptions, JumpOptionsBuilder};
pub use crate::query::{Popped, QueryState, QueryStatus};
pub use crate::session::{
    EditorView, FeedOutcome, Jump, JumpEffect, JumpMode, Key, Session, SessionController,
};
pub use crate::tagger::TagMap;
pub use crate::{CaseMatching, JumpError, Occurrence, ScanEngine, SearchMode};
