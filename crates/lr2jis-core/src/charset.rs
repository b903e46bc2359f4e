//! Character collection from the character source text.
//!
//! Every distinct character of the source (except carriage return) becomes
//! one table entry. Entries are paired with glyph records by position, so the
//! order of the list is as significant as its contents.

use std::collections::{BTreeSet, HashSet};

/// Characters that never enter the list.
const EXCLUDED: char = '\r';

/// Characters placed at the front of a [`OrderingPolicy::FileOrder`] list.
const FILE_ORDER_SEED: [char; 2] = [' ', '\n'];

/// How the character list (and, in turn, the glyph records) are ordered
/// before they are paired by position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Characters sorted by code point; glyph records sorted by
    /// `(texture, row, column, glyph id)`.
    #[default]
    Sorted,
    /// Space and newline first, then characters in first-seen order; glyph
    /// records kept in file order.
    FileOrder,
}

impl OrderingPolicy {
    /// Returns the command-line spelling of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingPolicy::Sorted => "sorted",
            OrderingPolicy::FileOrder => "file-order",
        }
    }
}

/// An ordered list of distinct characters, tagged with the policy that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharList {
    chars: Vec<char>,
    policy: OrderingPolicy,
}

impl CharList {
    /// Collect the distinct characters of `text` according to `policy`.
    pub fn collect(text: &str, policy: OrderingPolicy) -> Self {
        let chars = match policy {
            OrderingPolicy::Sorted => collect_sorted(text),
            OrderingPolicy::FileOrder => collect_file_order(text),
        };
        Self { chars, policy }
    }

    /// The ordered characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The policy that ordered this list.
    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the list holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

fn collect_sorted(text: &str) -> Vec<char> {
    text.chars()
        .filter(|&ch| ch != EXCLUDED)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

fn collect_file_order(text: &str) -> Vec<char> {
    let mut chars = Vec::from(FILE_ORDER_SEED);
    let mut seen: HashSet<char> = FILE_ORDER_SEED.into_iter().collect();

    for ch in text.chars() {
        if ch != EXCLUDED && seen.insert(ch) {
            chars.push(ch);
        }
    }

    chars
}
