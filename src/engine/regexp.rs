use std::fmt::{Display, Error, Formatter};

use regex::Regex;

use crate::engine::util::dedup_offsets;
use crate::{Boundary, Occurrence, ScanEngine};

//------------------------------------------------------------------------------
// Pattern engine: externally supplied regular expressions

/// Scans for the non-overlapping match starts of an external pattern.
#[derive(Debug)]
pub struct PatternEngine {
    query_regex: Option<Regex>,
}

impl PatternEngine {
    pub fn new(pattern: &str) -> Self {
        let query_regex = Regex::new(pattern).ok();
        if query_regex.is_none() {
            warn!("pattern {pattern:?} does not compile, scanning nothing");
        }
        PatternEngine { query_regex }
    }
}

impl ScanEngine for PatternEngine {
    fn scan(&self, text: &str, boundary: &Boundary) -> Vec<Occurrence> {
        let Some(regex) = &self.query_regex else {
            return Vec::new();
        };

        let mut occurrences = Vec::new();
        for (region, range) in boundary.ranges().iter().enumerate() {
            let Some(hay) = text.get(range.clone()) else {
                debug!("region {range:?} splits a char boundary, skipping");
                continue;
            };
            for found in regex.find_iter(hay) {
                occurrences.push(Occurrence {
                    offset: range.start + found.start(),
                    region,
                });
            }
        }
        dedup_offsets(occurrences)
    }
}

impl Display for PatternEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(Pattern: {})",
            self.query_regex.as_ref().map_or("", |re| re.as_str())
        )
    }
}
