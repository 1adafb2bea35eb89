//! Coarse-grained digit trie with a single lock per node.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::{
    common::{slot, ARITY, TERMINAL_DEPTH},
    PhoneNumberSet,
};
use crate::phone_number::PhoneNumber;

type NodeRef = Arc<Node>;

/// Node in the coarse-grained trie
#[derive(Default)]
struct Node {
    /// All ten children behind one lock
    links: RwLock<[Option<NodeRef>; ARITY]>,
}

impl Node {
    fn child_or_create(&self, digit: u8, depth: usize) -> NodeRef {
        let idx = slot(digit);

        if let Some(child) = &self.links.read()[idx] {
            return Arc::clone(child);
        }

        // Slot looked empty: re-check under the write lock before creating
        let mut links = self.links.write();
        Arc::clone(links[idx].get_or_insert_with(|| {
            trace!(depth = depth + 1, digit, "Publishing trie node");
            Arc::default()
        }))
    }

    fn child(&self, digit: u8) -> Option<NodeRef> {
        self.links.read()[slot(digit)].clone()
    }

    /// Clone the occupied slots so the lock is released before recursing.
    fn snapshot(&self) -> Vec<NodeRef> {
        self.links.read().iter().flatten().cloned().collect()
    }

    fn count_paths(&self, depth: usize) -> usize {
        if depth == TERMINAL_DEPTH {
            return 1;
        }
        self.snapshot()
            .iter()
            .map(|child| child.count_paths(depth + 1))
            .sum()
    }

    fn has_path(&self, depth: usize) -> bool {
        depth == TERMINAL_DEPTH
            || self
                .snapshot()
                .iter()
                .any(|child| child.has_path(depth + 1))
    }

    #[cfg(test)]
    fn count_nodes(&self) -> usize {
        1 + self
            .snapshot()
            .iter()
            .map(|child| child.count_nodes())
            .sum::<usize>()
    }
}

/// Phone number set backed by a trie with one `RwLock` per node.
///
/// Simpler than [`ConcurrentDigitTrie`](super::ConcurrentDigitTrie) at the
/// cost of more contention when many writers fan out from the same node.
#[derive(Default)]
pub struct LockedDigitTrie {
    root: NodeRef,
}

impl LockedDigitTrie {
    pub fn new() -> Self {
        debug!("Creating coarse-grained digit trie");
        Self::default()
    }

    pub fn insert(&self, number: &PhoneNumber) {
        let mut node = Arc::clone(&self.root);
        for (depth, &digit) in number.digits().iter().enumerate() {
            node = node.child_or_create(digit, depth);
        }
    }

    pub fn contains(&self, number: &PhoneNumber) -> bool {
        let mut node = Arc::clone(&self.root);
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
        debug!(size, "Counted coarse-grained digit trie");
        size
    }

    pub fn is_empty(&self) -> bool {
        !self.root.has_path(0)
    }
}

impl PhoneNumberSet for LockedDigitTrie {
    fn add(&self, number: &PhoneNumber) {
        self.insert(number);
    }

    fn contains(&self, number: &PhoneNumber) -> bool {
        LockedDigitTrie::contains(self, number)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        LockedDigitTrie::is_empty(self)
    }

    fn name(&self) -> &'static str {
        "coarse_grained"
    }
}

impl fmt::Debug for LockedDigitTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedDigitTrie")
            .field("size", &self.len())
            .finish()
    }
}

impl FromIterator<PhoneNumber> for LockedDigitTrie {
    fn from_iter<I: IntoIterator<Item = PhoneNumber>>(iter: I) -> Self {
        let trie = Self::new();
        for number in iter {
            trie.insert(&number);
        }
        trie
    }
}

impl Extend<PhoneNumber> for LockedDigitTrie {
    fn extend<I: IntoIterator<Item = PhoneNumber>>(&mut self, iter: I) {
        for number in iter {
            self.insert(&number);
        }
    }
}

impl<'a> Extend<&'a PhoneNumber> for LockedDigitTrie {
    fn extend<I: IntoIterator<Item = &'a PhoneNumber>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Barrier},
        thread,
    };

    use super::*;
    use crate::phone_number::PHONE_NUMBER_LENGTH;

    fn number(raw: &str) -> PhoneNumber {
        PhoneNumber::new(raw).unwrap()
    }

    #[test]
    fn test_basic_insert_contains() {
        let trie = LockedDigitTrie::new();
        assert!(trie.is_empty());

        trie.insert(&number("123456789"));
        trie.insert(&number("123456780"));

        assert_eq!(trie.len(), 2);
        assert!(trie.contains(&number("123456789")));
        assert!(!trie.contains(&number("123456781")));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let trie = LockedDigitTrie::new();
        let n = number("000000001");

        trie.insert(&n);
        trie.insert(&n);

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.root.count_nodes(), PHONE_NUMBER_LENGTH + 1);
    }

    #[test]
    fn test_partial_path_is_not_counted() {
        let trie = LockedDigitTrie::new();
        let mut node = Arc::clone(&trie.root);
        for (depth, digit) in [9u8, 9, 9].into_iter().enumerate() {
            node = node.child_or_create(digit, depth);
        }

        assert_eq!(trie.len(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_snapshot_only_holds_occupied_slots() {
        let trie = LockedDigitTrie::new();
        trie.insert(&number("100000000"));
        trie.insert(&number("700000000"));

        assert_eq!(trie.root.snapshot().len(), 2);
    }

    #[test]
    fn test_concurrent_same_number_creates_single_path() {
        let trie = Arc::new(LockedDigitTrie::new());
        let barrier = Arc::new(Barrier::new(16));
        let n = number("314159265");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let trie = Arc::clone(&trie);
                let barrier = Arc::clone(&barrier);
                let n = n.clone();
                thread::spawn(move || {
                    barrier.wait();
                    trie.insert(&n);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.root.count_nodes(), PHONE_NUMBER_LENGTH + 1);
    }

    #[test]
    fn test_concurrent_insert_and_size() {
        let trie = Arc::new(LockedDigitTrie::new());
        let mut handles = vec![];

        for i in 0..4u32 {
            let trie = Arc::clone(&trie);
            handles.push(thread::spawn(move || {
                for j in 0..1_000u32 {
                    trie.insert(&number(&format!("{:09}", j * 100 + i)));
                }
            }));
        }

        for _ in 0..2 {
            let trie = Arc::clone(&trie);
            handles.push(thread::spawn(move || {
                for _ in 0..20 {
                    assert!(trie.len() <= 4_000);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.len(), 4_000);
    }

    #[test]
    fn test_set_trait() {
        let set: Arc<dyn PhoneNumberSet> = Arc::new(LockedDigitTrie::new());
        set.add(&number("222333444"));
        set.add(&number("222333444"));
        assert!(set.contains(&number("222333444")));
        assert_eq!(set.size(), 1);
        assert_eq!(set.name(), "coarse_grained");
    }
}
