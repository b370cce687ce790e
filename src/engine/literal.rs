use std::fmt::{Display, Error, Formatter};

use memchr::{memchr2_iter, memchr_iter};

use crate::engine::util::{chars_eq, contains_upper, dedup_offsets};
use crate::{Boundary, CaseMatching, Occurrence, ScanEngine};

//------------------------------------------------------------------------------
// Literal engine: one- and two-character queries

/// Scans for a short literal query (one character, or two for bigram mode).
#[derive(Debug)]
pub struct LiteralEngine {
    query: Vec<char>,
    case_sensitive: bool,
}

impl LiteralEngine {
    pub fn new(query: &str, case: CaseMatching) -> Self {
        let case_sensitive = match case {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => contains_upper(query),
        };

        LiteralEngine {
            query: query.chars().collect(),
            case_sensitive,
        }
    }

    /// True if the query matches at the start of `slice`. The slice ends at
    /// the region boundary, so a match that would run past it fails here.
    fn matches_at(&self, slice: &str) -> bool {
        let mut chars = slice.chars();
        for &query_char in &self.query {
            match chars.next() {
                Some(ch) if chars_eq(ch, query_char, self.case_sensitive) => {}
                _ => return false,
            }
        }
        true
    }
}

impl ScanEngine for LiteralEngine {
    fn scan(&self, text: &str, boundary: &Boundary) -> Vec<Occurrence> {
        let Some(&first) = self.query.first() else {
            return Vec::new();
        };

        let mut occurrences = Vec::new();
        for (region, range) in boundary.ranges().iter().enumerate() {
            let Some(hay) = text.get(range.clone()) else {
                debug!("region {range:?} splits a char boundary, skipping");
                continue;
            };

            if first.is_ascii() {
                // An ASCII byte never occurs inside a UTF-8 continuation
                // sequence, so every hit is a valid char position.
                let byte = first as u8;
                if self.case_sensitive {
                    for pos in memchr_iter(byte, hay.as_bytes()) {
                        if self.matches_at(&hay[pos..]) {
                            occurrences.push(Occurrence {
                                offset: range.start + pos,
                                region,
                            });
                        }
                    }
                } else {
                    let lower = byte.to_ascii_lowercase();
                    let upper = byte.to_ascii_uppercase();
                    for pos in memchr2_iter(lower, upper, hay.as_bytes()) {
                        if self.matches_at(&hay[pos..]) {
                            occurrences.push(Occurrence {
                                offset: range.start + pos,
                                region,
                            });
                        }
                    }
                }
            } else {
                for (pos, _) in hay.char_indices() {
                    if self.matches_at(&hay[pos..]) {
                        occurrences.push(Occurrence {
                            offset: range.start + pos,
                            region,
                        });
                    }
                }
            }
        }
        dedup_offsets(occurrences)
    }
}

impl Display for LiteralEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Literal: {})", self.query.iter().collect::<String>())
    }
}
