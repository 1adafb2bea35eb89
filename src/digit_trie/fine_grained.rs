//! Fine-grained digit trie with one initialize-once cell per slot.
//!
//! A slot moves from empty to occupied exactly once. The first thread to find
//! it empty builds the child while racing threads on the same slot block on
//! that cell only, then all of them observe the same published child. Reads
//! of an occupied slot are a single acquire load, so `contains` never locks.

use std::fmt;

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use super::{
    common::{slot, ARITY, TERMINAL_DEPTH},
    PhoneNumberSet,
};
use crate::phone_number::PhoneNumber;

/// Node in the fine-grained trie
#[derive(Default)]
struct Node {
    /// Children indexed by the digit consumed at this level
    links: [OnceCell<Box<Node>>; ARITY],
}

impl Node {
    /// Return the child for `digit`, publishing a fresh node if the slot is empty.
    #[inline]
    fn child_or_create(&self, digit: u8, depth: usize) -> &Node {
        self.links[slot(digit)].get_or_init(|| {
            trace!(depth = depth + 1, digit, "Publishing trie node");
            Box::default()
        })
    }

    #[inline]
    fn child(&self, digit: u8) -> Option<&Node> {
        self.links[slot(digit)].get().map(Box::as_ref)
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.links.iter().filter_map(OnceCell::get).map(Box::as_ref)
    }

    /// Count root-to-terminal paths below this node.
    ///
    /// Occupied slots never revert, so the children seen here are a subset of
    /// the final children and the sum is exact once writers have finished.
    fn count_paths(&self, depth: usize) -> usize {
        if depth == TERMINAL_DEPTH {
            return 1;
        }
        self.children()
            .map(|child| child.count_paths(depth + 1))
            .sum()
    }

    fn has_path(&self, depth: usize) -> bool {
        depth == TERMINAL_DEPTH || self.children().any(|child| child.has_path(depth + 1))
    }

    #[cfg(test)]
    fn count_nodes(&self) -> usize {
        1 + self.children().map(Node::count_nodes).sum::<usize>()
    }
}

/// Phone number set backed by a trie with per-slot exactly-once publication.
#[derive(Default)]
pub struct ConcurrentDigitTrie {
    root: Node,
}

impl ConcurrentDigitTrie {
    pub fn new() -> Self {
        debug!("Creating fine-grained digit trie");
        Self::default()
    }

    pub fn insert(&self, number: &PhoneNumber) {
        let mut node = &self.root;
        for (depth, &digit) in number.digits().iter().enumerate() {
            node = node.child_or_create(digit, depth);
        }
    }

    pub fn contains(&self, number: &PhoneNumber) -> bool {
        let mut node = &self.root;
        for &digit in number.digits() {
            match node.child(digit) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        let size = self.root.count_paths(0);
        debug!(size, "Counted fine-grained digit trie");
        size
    }

    pub fn is_empty(&self) -> bool {
        !self.root.has_path(0)
    }
}

impl PhoneNumberSet for ConcurrentDigitTrie {
    fn add(&self, number: &PhoneNumber) {
        self.insert(number);
    }

    fn contains(&self, number: &PhoneNumber) -> bool {
        ConcurrentDigitTrie::contains(self, number)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        ConcurrentDigitTrie::is_empty(self)
    }

    fn name(&self) -> &'static str {
        "fine_grained"
    }
}

impl fmt::Debug for ConcurrentDigitTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentDigitTrie")
            .field("size", &self.len())
            .finish()
    }
}

impl FromIterator<PhoneNumber> for ConcurrentDigitTrie {
    fn from_iter<I: IntoIterator<Item = PhoneNumber>>(iter: I) -> Self {
        let trie = Self::new();
        for number in iter {
            trie.insert(&number);
        }
        trie
    }
}

impl Extend<PhoneNumber> for ConcurrentDigitTrie {
    fn extend<I: IntoIterator<Item = PhoneNumber>>(&mut self, iter: I) {
        for number in iter {
            self.insert(&number);
        }
    }
}

impl<'a> Extend<&'a PhoneNumber> for ConcurrentDigitTrie {
    fn extend<I: IntoIterator<Item = &'a PhoneNumber>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}
