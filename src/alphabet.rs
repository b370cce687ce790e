//! Label alphabet and prefix-free label allocation.

/// Keys a hand reaches without looking, most convenient first.
pub const DEFAULT_ALPHABET: &str = "asdfghjklqwertyuiopzxcvbnm";

/// An ordered set of characters usable as tag labels.
///
/// Order is priority: earlier characters are handed out first, so the most
/// convenient keys end up on the occurrences closest to the caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(DEFAULT_ALPHABET)
    }
}

impl Alphabet {
    /// Builds an alphabet from `chars`, keeping the first occurrence of each
    /// character and preserving order.
    pub fn new(chars: &str) -> Self {
        let mut seen = Vec::new();
        for ch in chars.chars() {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        Alphabet { chars: seen }
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the alphabet has no characters; it can label nothing.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in priority order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Allocates up to `count` unique, prefix-free labels in priority order.
    ///
    /// While `count` fits, every label is a single character. Beyond that,
    /// the minimal number of trailing alphabet characters are withdrawn from
    /// single-char duty and become two-character group prefixes; a character
    /// acting as a group prefix is never simultaneously a standalone label,
    /// which keeps the whole set prefix-free. Returns fewer than `count`
    /// labels when even the two-character space is exhausted.
    ///
    /// Pure and deterministic for a given alphabet order.
    pub fn allocate(&self, count: usize) -> Vec<String> {
        let k = self.chars.len();
        if count == 0 || k == 0 {
            return Vec::new();
        }
        if count <= k {
            return self.chars[..count].iter().map(|c| c.to_string()).collect();
        }
        if k == 1 {
            // A one-character alphabet cannot stay prefix-free past one label.
            return vec![self.chars[0].to_string()];
        }

        // Minimal number of group prefixes: each prefix trades one single-char
        // label for k two-char labels, a net gain of k - 1 slots.
        let groups = (count - k).div_ceil(k - 1).min(k);
        let singles = k - groups;

        let mut labels: Vec<String> = self.chars[..singles].iter().map(|c| c.to_string()).collect();
        'groups: for &prefix in &self.chars[singles..] {
            for &second in &self.chars {
                if labels.len() == count {
                    break 'groups;
                }
                labels.push([prefix, second].iter().collect());
            }
        }
        labels
    }
}
