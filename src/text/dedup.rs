//! Line deduplication
//!
//! Collects normalized lines, keeping one copy of each exact string. The
//! output order never depends on hash iteration order.

use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};

/// Order in which unique lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineOrder {
    /// Lexicographic byte order
    #[default]
    Sorted,
    /// Order of first occurrence in the corpus
    FirstSeen,
}

#[derive(Debug, Clone)]
enum Lines {
    Sorted(BTreeSet<String>),
    FirstSeen {
        seen: HashSet<String>,
        lines: Vec<String>,
    },
}

/// Set of unique normalized lines
#[derive(Debug, Clone)]
pub struct LineSet {
    lines: Lines,
    duplicates: usize,
}

impl Default for LineSet {
    fn default() -> Self {
        Self::new(LineOrder::default())
    }
}

impl LineSet {
    /// Create an empty set with the given output order
    pub fn new(order: LineOrder) -> Self {
        let lines = match order {
            LineOrder::Sorted => Lines::Sorted(BTreeSet::new()),
            LineOrder::FirstSeen => Lines::FirstSeen {
                seen: HashSet::new(),
                lines: Vec::new(),
            },
        };
        Self {
            lines,
            duplicates: 0,
        }
    }

    /// Insert a line. Returns false if an equal line was already present.
    pub fn insert(&mut self, line: String) -> bool {
        let inserted = match &mut self.lines {
            Lines::Sorted(set) => set.insert(line),
            Lines::FirstSeen { seen, lines } => {
                if seen.contains(&line) {
                    false
                } else {
                    seen.insert(line.clone());
                    lines.push(line);
                    true
                }
            }
        };
        if !inserted {
            self.duplicates += 1;
        }
        inserted
    }

    /// Number of unique lines
    pub fn len(&self) -> usize {
        match &self.lines {
            Lines::Sorted(set) => set.len(),
            Lines::FirstSeen { lines, .. } => lines.len(),
        }
    }

    /// Whether no line has been inserted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rejected inserts
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Iterate lines in output order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match &self.lines {
            Lines::Sorted(set) => Box::new(set.iter().map(String::as_str)),
            Lines::FirstSeen { lines, .. } => Box::new(lines.iter().map(String::as_str)),
        }
    }

    /// Consume the set, returning lines in output order
    pub fn into_lines(self) -> Vec<String> {
        match self.lines {
            Lines::Sorted(set) => set.into_iter().collect(),
            Lines::FirstSeen { lines, .. } => lines,
        }
    }
}

impl Extend<String> for LineSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for line in iter {
            self.insert(line);
        }
    }
}
