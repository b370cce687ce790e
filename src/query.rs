//! The incremental query state machine.
//!
//! Input characters first build the search text (how many is fixed by the
//! search mode), then select a tag. After every character the machine is in
//! exactly one of four states; because labels are prefix-free, an exact
//! label match can never be extended into another candidate's label, so
//! resolution is unambiguous.

use crate::{Occurrence, SearchMode, TagMap};

/// Where the session stands after a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// The query text is still being composed.
    Searching,
    /// Tags are on screen; label input may still be pending.
    AwaitingLabel,
    /// Exactly one candidate's label equals the typed suffix in full.
    Resolved(Occurrence),
    /// No candidate is consistent with the input.
    NoMatch,
}

/// Which buffer a backspace removed a character from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Popped {
    /// A label character; the candidate set re-widens.
    Label,
    /// A query character; occurrences must be rescanned.
    Query,
    /// Both buffers were already empty.
    Nothing,
}

/// The evolving user input of one session.
#[derive(Clone, Debug)]
pub struct QueryState {
    mode: SearchMode,
    search_text: String,
    label_input: String,
}

impl QueryState {
    /// Fresh input state for a session in `mode`.
    pub fn new(mode: SearchMode) -> Self {
        QueryState {
            mode,
            search_text: String::new(),
            label_input: String::new(),
        }
    }

    /// The session's search mode.
    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    /// The query text typed so far.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The label suffix typed so far.
    pub fn label_input(&self) -> &str {
        &self.label_input
    }

    /// True once the mode's expected query length has been typed; every
    /// further character selects a tag.
    pub fn query_complete(&self) -> bool {
        self.search_text.chars().count() >= self.mode.query_len()
    }

    /// Routes one character into the buffer it currently belongs to.
    ///
    /// Label input is folded to lowercase; the caller keeps track of the
    /// keystroke's case (an uppercase selection extends the selection).
    pub fn push_char(&mut self, ch: char) {
        if self.query_complete() {
            self.label_input.extend(ch.to_lowercase());
        } else {
            self.search_text.push(ch);
        }
    }

    /// Undoes the last keystroke, label input first.
    pub fn pop_char(&mut self) -> Popped {
        if self.label_input.pop().is_some() {
            Popped::Label
        } else if self.search_text.pop().is_some() {
            Popped::Query
        } else {
            Popped::Nothing
        }
    }

    /// Computes the machine's state against the current tag map.
    pub fn status(&self, tags: &TagMap) -> QueryStatus {
        if !self.query_complete() {
            return QueryStatus::Searching;
        }
        if tags.is_empty() {
            return QueryStatus::NoMatch;
        }
        if self.label_input.is_empty() {
            return QueryStatus::AwaitingLabel;
        }
        if let Some(occurrence) = tags.get(&self.label_input) {
            return QueryStatus::Resolved(occurrence);
        }
        if tags.candidates(&self.label_input).next().is_some() {
            QueryStatus::AwaitingLabel
        } else {
            QueryStatus::NoMatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;

    fn tags_for(offsets: &[usize], alphabet: &str) -> TagMap {
        let occurrences: Vec<Occurrence> = offsets
            .iter()
            .map(|&offset| Occurrence { offset, region: 0 })
            .collect();
        // A text of blanks: no adjacency collisions, labels in offset order.
        let text = " ".repeat(offsets.iter().max().map_or(0, |m| m + 2));
        TagMap::assign(&occurrences, &text, &Alphabet::new(alphabet), 0, 1, 1)
    }

    #[test]
    fn test_searching_until_query_complete() {
        let mut query = QueryState::new(SearchMode::Bigram);
        let tags = tags_for(&[0, 4], "ab");
        assert_eq!(query.status(&tags), QueryStatus::Searching);
        query.push_char('f');
        assert_eq!(query.status(&tags), QueryStatus::Searching);
        query.push_char('o');
        assert_eq!(query.status(&tags), QueryStatus::AwaitingLabel);
        assert_eq!(query.search_text(), "fo");
        assert!(query.label_input().is_empty());
    }

    #[test]
    fn test_resolution_on_exact_label() {
        let mut query = QueryState::new(SearchMode::Char);
        query.push_char('e');
        let tags = tags_for(&[0, 2, 4, 6, 8], "abc");
        query.push_char('c');
        assert_eq!(query.status(&tags), QueryStatus::AwaitingLabel);
        query.push_char('b');
        assert_eq!(
            query.status(&tags),
            QueryStatus::Resolved(Occurrence { offset: 6, region: 0 })
        );
    }

    #[test]
    fn test_no_match_on_dead_label() {
        let mut query = QueryState::new(SearchMode::Char);
        query.push_char('e');
        let tags = tags_for(&[0, 2], "ab");
        query.push_char('z');
        assert_eq!(query.status(&tags), QueryStatus::NoMatch);
    }

    #[test]
    fn test_no_match_on_empty_tags() {
        let mut query = QueryState::new(SearchMode::Char);
        query.push_char('q');
        assert_eq!(query.status(&TagMap::default()), QueryStatus::NoMatch);
    }

    #[test]
    fn test_word_mode_labels_upfront() {
        let query = QueryState::new(SearchMode::Word);
        assert!(query.query_complete());
        let tags = tags_for(&[0, 4], "ab");
        assert_eq!(query.status(&tags), QueryStatus::AwaitingLabel);
    }

    #[test]
    fn test_label_input_is_folded() {
        let mut query = QueryState::new(SearchMode::Word);
        query.push_char('A');
        assert_eq!(query.label_input(), "a");
    }

    #[test]
    fn test_pop_label_before_query() {
        let mut query = QueryState::new(SearchMode::Char);
        query.push_char('e');
        query.push_char('c');
        assert_eq!(query.pop_char(), Popped::Label);
        assert_eq!(query.pop_char(), Popped::Query);
        assert_eq!(query.pop_char(), Popped::Nothing);
    }
}
