use std::fmt::{Display, Error, Formatter};

use memchr::memchr_iter;

use crate::{Boundary, Occurrence, ScanEngine};

//------------------------------------------------------------------------------
// Line engine: one mark per line

/// Scans for one mark per line: the first non-whitespace character, or the
/// line start when the line is blank.
///
/// Lines are taken from the full document so that a boundary starting
/// mid-line cannot invent a bogus line start; marks outside the boundary are
/// dropped.
#[derive(Debug, Default)]
pub struct LineMarkEngine;

impl LineMarkEngine {
    pub fn new() -> Self {
        LineMarkEngine
    }
}

impl ScanEngine for LineMarkEngine {
    fn scan(&self, text: &str, boundary: &Boundary) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        let mut line_start = 0;
        let line_ends = memchr_iter(b'\n', text.as_bytes()).chain(std::iter::once(text.len()));
        for line_end in line_ends {
            if line_start > text.len() {
                break;
            }
            let line = &text[line_start..line_end.min(text.len())];
            let mark = line_start
                + line
                    .char_indices()
                    .find(|(_, ch)| !ch.is_whitespace())
                    .map(|(pos, _)| pos)
                    .unwrap_or(0);
            if let Some(region) = boundary.region_of(mark) {
                occurrences.push(Occurrence {
                    offset: mark,
                    region,
                });
            }
            line_start = line_end + 1;
        }
        occurrences
    }
}

impl Display for LineMarkEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(LineMarks)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(text: &str) -> Vec<usize> {
        LineMarkEngine::new()
            .scan(text, &Boundary::whole(text.len()))
            .iter()
            .map(|o| o.offset)
            .collect()
    }

    #[test]
    fn test_first_non_whitespace() {
        //               0123456 789012 34567
        assert_eq!(offsets("alpha\n  beta\ngamma"), vec![0, 8, 13]);
    }

    #[test]
    fn test_blank_lines_marked_at_start() {
        assert_eq!(offsets("a\n\n  \nb"), vec![0, 2, 3, 6]);
    }

    #[test]
    fn test_no_trailing_phantom_line() {
        assert_eq!(offsets("a\nb\n"), vec![0, 2]);
    }

    #[test]
    fn test_clipped_to_boundary() {
        let boundary = Boundary::new(vec![6..12]).unwrap();
        let found = LineMarkEngine::new().scan("alpha\n  beta\ngamma", &boundary);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, 8);
    }
}
