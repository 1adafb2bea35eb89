//! Thread-safe in-memory set of fixed-length phone numbers.
//!
//! Numbers are validated once into a [`PhoneNumber`] and then stored in a
//! concurrent digit trie that any number of threads can add to and query
//! through a shared reference.
//!
//! ```
//! use phone_set::{ConcurrentDigitTrie, PhoneNumber, PhoneNumberSet};
//!
//! let set = ConcurrentDigitTrie::new();
//! set.add(&PhoneNumber::new("123456789")?);
//! set.add(&PhoneNumber::new("123456780")?);
//!
//! assert_eq!(set.size(), 2);
//! assert!(set.contains(&"123456789".parse()?));
//! assert!(!set.contains(&"123456781".parse()?));
//! assert!(PhoneNumber::new("12345678a").is_err());
//! # Ok::<(), phone_set::PhoneNumberError>(())
//! ```

pub mod config;
pub mod digit_trie;
pub mod loader;
pub mod observability;
pub mod phone_number;

pub use digit_trie::{ConcurrentDigitTrie, LockedDigitTrie, PhoneNumberSet, TrieFactory};
pub use phone_number::{PhoneNumber, PhoneNumberError, PHONE_NUMBER_LENGTH};
