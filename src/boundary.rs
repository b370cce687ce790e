//! Search boundaries: the document ranges a scan is restricted to.
//!
//! A boundary is a set of disjoint byte ranges, sorted ascending. Hosts
//! usually derive one from the viewport with [`scope_boundary`] and pass it
//! to the session controller; engines clip every match to it.

use std::ops::Range;

use crate::JumpError;

/// A set of disjoint offset ranges, sorted by start offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Boundary {
    ranges: Vec<Range<usize>>,
}

impl Boundary {
    /// Builds a boundary from arbitrary ranges.
    ///
    /// Empty ranges are dropped and the rest are sorted. Overlapping ranges
    /// are rejected rather than merged, since a merge would make region
    /// indices ambiguous for the caller that supplied them.
    pub fn new(mut ranges: Vec<Range<usize>>) -> Result<Self, JumpError> {
        ranges.retain(|r| r.start < r.end);
        ranges.sort_by_key(|r| (r.start, r.end));
        for pair in ranges.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(JumpError::InvalidBoundary {
                    offset: pair[1].start,
                });
            }
        }
        Ok(Boundary { ranges })
    }

    /// The whole document as a single region.
    pub fn whole(len: usize) -> Self {
        Boundary::from_range(0..len)
    }

    /// A boundary with no regions; every scan over it is empty.
    pub fn empty() -> Self {
        Boundary::default()
    }

    fn from_range(range: Range<usize>) -> Self {
        let ranges = if range.start < range.end {
            vec![range]
        } else {
            Vec::new()
        };
        Boundary { ranges }
    }

    /// The regions, disjoint and ascending.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// True if the boundary has no regions.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Index of the region containing `offset`, if any.
    pub fn region_of(&self, offset: usize) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(&offset))
    }

    /// True if `offset` falls inside one of the regions.
    pub fn contains(&self, offset: usize) -> bool {
        self.region_of(offset).is_some()
    }

    /// Clamps every region to a document of `len` bytes, dropping regions
    /// that fall entirely outside.
    pub fn clip(&self, len: usize) -> Boundary {
        let ranges = self
            .ranges
            .iter()
            .map(|r| r.start.min(len)..r.end.min(len))
            .filter(|r| r.start < r.end)
            .collect();
        Boundary { ranges }
    }
}

//------------------------------------------------------------------------------
/// Caret-relative scopes a host can turn into a concrete boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Everything currently on screen.
    Screen,
    /// From the top of the screen to the caret.
    BeforeCaret,
    /// From the caret to the bottom of the screen.
    AfterCaret,
    /// The entire file, including off-screen text.
    File,
}

/// Computes the boundary for a scope.
///
/// Pure function of the viewport: `visible` is the on-screen byte range,
/// `caret` the current caret offset, `len` the document length. Inputs are
/// clamped, so a caret outside the viewport yields an empty caret-relative
/// boundary instead of an inverted range.
pub fn scope_boundary(scope: Scope, visible: Range<usize>, caret: usize, len: usize) -> Boundary {
    let visible = visible.start.min(len)..visible.end.min(len);
    let caret = caret.clamp(visible.start, visible.end);
    let range = match scope {
        Scope::Screen => visible,
        Scope::BeforeCaret => visible.start..caret,
        Scope::AfterCaret => caret..visible.end,
        Scope::File => 0..len,
    };
    Boundary::from_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_and_drops_empty() {
        let boundary = Boundary::new(vec![10..20, 5..5, 0..4]).unwrap();
        assert_eq!(boundary.ranges(), &[0..4, 10..20]);
    }

    #[test]
    fn test_new_rejects_overlap() {
        let err = Boundary::new(vec![0..10, 5..15]).unwrap_err();
        assert_eq!(err, JumpError::InvalidBoundary { offset: 5 });
    }

    #[test]
    fn test_region_of() {
        let boundary = Boundary::new(vec![0..4, 10..20]).unwrap();
        assert_eq!(boundary.region_of(2), Some(0));
        assert_eq!(boundary.region_of(10), Some(1));
        assert_eq!(boundary.region_of(4), None);
        assert!(!boundary.contains(25));
    }

    #[test]
    fn test_clip() {
        let boundary = Boundary::new(vec![0..4, 10..20]).unwrap();
        let clipped = boundary.clip(12);
        assert_eq!(clipped.ranges(), &[0..4, 10..12]);
        assert!(boundary.clip(0).is_empty());
    }

    #[test]
    fn test_scope_boundary() {
        assert_eq!(
            scope_boundary(Scope::Screen, 10..50, 30, 100).ranges(),
            &[10..50]
        );
        assert_eq!(
            scope_boundary(Scope::BeforeCaret, 10..50, 30, 100).ranges(),
            &[10..30]
        );
        assert_eq!(
            scope_boundary(Scope::AfterCaret, 10..50, 30, 100).ranges(),
            &[30..50]
        );
        assert_eq!(
            scope_boundary(Scope::File, 10..50, 30, 100).ranges(),
            &[0..100]
        );
    }

    #[test]
    fn test_scope_boundary_clamps() {
        // caret below the viewport: nothing after it is visible
        assert!(scope_boundary(Scope::AfterCaret, 10..50, 80, 100).is_empty());
        // viewport beyond the document
        assert_eq!(scope_boundary(Scope::Screen, 10..500, 30, 40).ranges(), &[10..40]);
    }
}
