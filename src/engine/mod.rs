//! Occurrence scanning engines, one per search mode.

mod line;
mod literal;
mod regexp;
mod util;
mod word;

pub use line::LineMarkEngine;
pub use literal::LiteralEngine;
pub use regexp::PatternEngine;
pub use word::WordStartEngine;

use crate::{CaseMatching, ScanEngine, SearchMode};

/// Creates the scan engine for a mode and the query text typed so far.
pub fn engine_for(mode: &SearchMode, search_text: &str, case: CaseMatching) -> Box<dyn ScanEngine> {
    match mode {
        SearchMode::Char | SearchMode::Bigram => Box::new(LiteralEngine::new(search_text, case)),
        SearchMode::Word => Box::new(WordStartEngine::new()),
        SearchMode::Line => Box::new(LineMarkEngine::new()),
        SearchMode::Pattern(pattern) => Box::new(PatternEngine::new(pattern)),
    }
}
