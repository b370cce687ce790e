//! Tag assignment: pairing scanned occurrences with allocated labels.

use indexmap::IndexMap;

use crate::{Alphabet, JumpError, Occurrence};

/// The session's core artifact: a label → occurrence mapping.
///
/// Labels are unique and prefix-free; iteration follows document order. The
/// map is rebuilt whenever the occurrence set changes and is read-only to
/// the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMap {
    tags: IndexMap<String, Occurrence>,
}

impl TagMap {
    /// Assigns labels to `occurrences` (ascending by offset, as produced by
    /// a scan engine).
    ///
    /// Occurrences closest to `caret` get the shortest labels and survive
    /// alphabet exhaustion; ties go to the smaller offset. A candidate label
    /// whose first character duplicates one of the `avoid_lookahead`
    /// document characters right after the matched query text (`query_len`
    /// characters from the occurrence) is passed over — it would look like a
    /// continuation of the query — unless every free label collides, in
    /// which case coverage wins and the label is assigned anyway.
    ///
    /// Deterministic: identical inputs produce an identical map.
    pub fn assign(
        occurrences: &[Occurrence],
        text: &str,
        alphabet: &Alphabet,
        caret: usize,
        query_len: usize,
        avoid_lookahead: usize,
    ) -> TagMap {
        if occurrences.is_empty() {
            return TagMap::default();
        }

        let mut priority: Vec<usize> = (0..occurrences.len()).collect();
        priority.sort_by_key(|&i| (occurrences[i].offset.abs_diff(caret), occurrences[i].offset));

        // Allocate the whole single-char alphabet even for a handful of
        // occurrences, so the adjacency rule below has spare labels to swap
        // to instead of falling back immediately.
        let labels = alphabet.allocate(occurrences.len().max(alphabet.len()));
        if labels.len() < occurrences.len() {
            warn!(
                "{}",
                JumpError::AlphabetExhausted {
                    labeled: labels.len(),
                    total: occurrences.len(),
                }
            );
        }

        let mut assigned: Vec<Option<String>> = vec![None; occurrences.len()];
        let mut used = vec![false; labels.len()];
        for &occ in priority.iter().take(labels.len()) {
            let forbidden = trailing_chars(text, occurrences[occ].offset, query_len, avoid_lookahead);
            let clean = (0..labels.len())
                .filter(|&i| !used[i])
                .find(|&i| !collides(&labels[i], &forbidden));
            let pick = clean.or_else(|| (0..labels.len()).find(|&i| !used[i]));
            if let Some(i) = pick {
                used[i] = true;
                assigned[occ] = Some(labels[i].clone());
            }
        }

        let mut tags = IndexMap::new();
        for (i, &occurrence) in occurrences.iter().enumerate() {
            if let Some(label) = assigned[i].take() {
                tags.insert(label, occurrence);
            }
        }
        let map = TagMap { tags };
        debug_assert!(map.is_prefix_free());
        map
    }

    /// Number of labeled occurrences.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True if nothing was labeled.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The occurrence for an exact label.
    pub fn get(&self, label: &str) -> Option<Occurrence> {
        self.tags.get(label).copied()
    }

    /// All tags, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Occurrence)> {
        self.tags.iter().map(|(label, &occ)| (label.as_str(), occ))
    }

    /// The tags whose label starts with `typed`, in document order.
    pub fn candidates<'a>(&'a self, typed: &'a str) -> impl Iterator<Item = (&'a str, Occurrence)> {
        self.iter().filter(move |(label, _)| label.starts_with(typed))
    }

    /// True if no label is a proper prefix of another. Holds for every map
    /// this module produces; resolution relies on it.
    pub fn is_prefix_free(&self) -> bool {
        self.tags.keys().all(|a| {
            self.tags
                .keys()
                .all(|b| a == b || !b.starts_with(a.as_str()))
        })
    }
}

/// The document characters a label's first character must steer clear of:
/// the `window` characters right after the matched query text.
fn trailing_chars(text: &str, offset: usize, query_len: usize, window: usize) -> Vec<char> {
    if window == 0 {
        return Vec::new();
    }
    let skip = query_len.max(1);
    text.get(offset..)
        .map(|tail| tail.chars().skip(skip).take(window).collect())
        .unwrap_or_default()
}

fn collides(label: &str, forbidden: &[char]) -> bool {
    match label.chars().next() {
        Some(first) => forbidden
            .iter()
            .any(|f| f.to_lowercase().eq(first.to_lowercase())),
        None => false,
    }
}
