use std::fmt::{Display, Error, Formatter};

use regex::Regex;

use crate::{Boundary, Occurrence, ScanEngine};

//------------------------------------------------------------------------------
// Word engine: the start of every word in the boundary

/// Scans for the start offset of every maximal run of word characters
/// (alphanumerics and underscore), one occurrence per word.
#[derive(Debug)]
pub struct WordStartEngine {
    words: Regex,
}

impl WordStartEngine {
    pub fn new() -> Self {
        WordStartEngine {
            words: Regex::new(r"\w+").unwrap(),
        }
    }
}

impl Default for WordStartEngine {
    fn default() -> Self {
        WordStartEngine::new()
    }
}

impl ScanEngine for WordStartEngine {
    fn scan(&self, text: &str, boundary: &Boundary) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        for (region, range) in boundary.ranges().iter().enumerate() {
            let Some(hay) = text.get(range.clone()) else {
                debug!("region {range:?} splits a char boundary, skipping");
                continue;
            };
            for word in self.words.find_iter(hay) {
                occurrences.push(Occurrence {
                    offset: range.start + word.start(),
                    region,
                });
            }
        }
        occurrences
    }
}

impl Display for WordStartEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Words)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(text: &str) -> Vec<usize> {
        WordStartEngine::new()
            .scan(text, &Boundary::whole(text.len()))
            .iter()
            .map(|o| o.offset)
            .collect()
    }

    #[test]
    fn test_one_match_per_word() {
        assert_eq!(offsets("foo bar foo"), vec![0, 4, 8]);
    }

    #[test]
    fn test_underscores_and_digits_extend_words() {
        assert_eq!(offsets("my_var2 = f(x1)"), vec![0, 10, 12]);
    }

    #[test]
    fn test_punctuation_only() {
        assert!(offsets("-- ++ ::").is_empty());
    }

    #[test]
    fn test_region_cut_restarts_word() {
        // A word straddling the region edge counts from where the region sees it.
        let engine = WordStartEngine::new();
        let boundary = Boundary::new(vec![2..11]).unwrap();
        let found = engine.scan("foo bar foo", &boundary);
        let offsets: Vec<usize> = found.iter().map(|o| o.offset).collect();
        assert_eq!(offsets, vec![2, 4, 8]);
    }
}
