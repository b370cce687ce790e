//! Configuration options for the engine.

use derive_builder::Builder;

use crate::{Alphabet, CaseMatching};

/// Options controlling scanning and tag assignment.
///
/// Build with [`JumpOptionsBuilder`]; unset fields fall back to the
/// defaults below.
#[derive(Builder, Clone, Debug)]
#[builder(default)]
pub struct JumpOptions {
    /// Characters usable as tag labels, most convenient first.
    ///
    /// Label input is matched after lowercase folding, so keep the alphabet
    /// lowercase: typing the final label character in uppercase still
    /// selects the tag, and extends the selection from the caret to the
    /// target instead of just moving there.
    pub alphabet: Alphabet,

    /// Case policy for literal queries. Defaults to smart case.
    pub case: CaseMatching,

    /// How many document characters after the matched query text a label's
    /// first character must not duplicate.
    ///
    /// A label colliding inside this window looks like a continuation of
    /// the search query; it is passed over while another label is free.
    /// Zero disables the rule.
    #[builder(default = "1")]
    pub avoid_lookahead: usize,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            case: CaseMatching::default(),
            avoid_lookahead: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = JumpOptionsBuilder::default().build().unwrap();
        assert_eq!(options.alphabet, Alphabet::default());
        assert_eq!(options.case, CaseMatching::Smart);
        assert_eq!(options.avoid_lookahead, 1);
    }

    #[test]
    fn test_builder_overrides() {
        let options = JumpOptionsBuilder::default()
            .alphabet(Alphabet::new("jkl"))
            .case(CaseMatching::Respect)
            .avoid_lookahead(0)
            .build()
            .unwrap();
        assert_eq!(options.alphabet.chars(), &['j', 'k', 'l']);
        assert_eq!(options.case, CaseMatching::Respect);
        assert_eq!(options.avoid_lookahead, 0);
    }
}
