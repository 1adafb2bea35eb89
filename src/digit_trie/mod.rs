//! Concurrent digit tries backing the phone number set.
//!
//! Every phone number is stored as a root-to-leaf path of fixed depth
//! [`PHONE_NUMBER_LENGTH`](crate::phone_number::PHONE_NUMBER_LENGTH), one level
//! per digit, each node fanning out to at most [`ARITY`] children. Two
//! synchronization strategies are available:
//!
//! - [`ConcurrentDigitTrie`]: an initialize-once cell per slot, lock-free reads
//! - [`LockedDigitTrie`]: a single `RwLock` per node guarding all slots
//!
//! Both implementations support:
//! - Concurrent `add`/`contains`/`size` through `&self`
//! - Exactly-once node creation under contention
//! - Per-node synchronization, so disjoint subtrees never contend

mod coarse_grained;
mod common;
mod factory;
mod fine_grained;

pub use coarse_grained::LockedDigitTrie;
pub use common::ARITY;
pub use factory::TrieFactory;
pub use fine_grained::ConcurrentDigitTrie;

use crate::phone_number::PhoneNumber;

/// Set of phone numbers that can be shared between threads.
///
/// All operations take `&self`; callers never need an outer lock.
pub trait PhoneNumberSet: Send + Sync {
    /// Ensure the number is a member. Adding a present number is a no-op.
    fn add(&self, number: &PhoneNumber);

    /// Whether a completed `add` of this number is visible.
    fn contains(&self, number: &PhoneNumber) -> bool;

    /// Number of distinct members at some instant during the call.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Strategy name, as accepted by [`TrieFactory::create_by_name`].
    fn name(&self) -> &'static str;
}
