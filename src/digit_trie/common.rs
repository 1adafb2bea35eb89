//! Constants and helpers shared between the trie implementations.

use crate::phone_number::PHONE_NUMBER_LENGTH;

/// Children per node, one slot per decimal digit.
pub const ARITY: usize = 10;

/// Depth at which a path denotes a stored number.
pub(crate) const TERMINAL_DEPTH: usize = PHONE_NUMBER_LENGTH;

/// Slot index for a digit.
///
/// Digits come from a validated `PhoneNumber`, so anything outside 0..=9 is a
/// programming error and the slice index below panics on it.
#[inline(always)]
pub(crate) fn slot(digit: u8) -> usize {
    debug_assert!((digit as usize) < ARITY, "digit out of range: {digit}");
    digit as usize
}
