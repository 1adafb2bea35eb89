//! Shared helpers for phone number set integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use phone_set::{config::TrieStrategy, PhoneNumber, PhoneNumberSet, TrieFactory};
use rand::Rng;

pub const MAX_NUMERIC_VALUE: u32 = 999_999_999;

pub const ALL_STRATEGIES: [TrieStrategy; 2] =
    [TrieStrategy::FineGrained, TrieStrategy::CoarseGrained];

pub fn number(raw: &str) -> PhoneNumber {
    PhoneNumber::new(raw).unwrap()
}

pub fn number_from_value(value: u32) -> PhoneNumber {
    number(&format!("{:09}", value))
}

pub fn random_number() -> PhoneNumber {
    number_from_value(rand::rng().random_range(0..=MAX_NUMERIC_VALUE))
}

pub fn random_numbers(count: usize) -> Vec<PhoneNumber> {
    (0..count).map(|_| random_number()).collect()
}

/// Random population with roughly 10% duplicated entries appended.
pub fn random_numbers_with_duplicates(count: usize) -> Vec<PhoneNumber> {
    let mut rng = rand::rng();
    let mut numbers = random_numbers(count);
    for _ in 0..count / 10 {
        let idx = rng.random_range(0..count);
        numbers.push(numbers[idx].clone());
    }
    numbers
}

pub fn distinct(numbers: &[PhoneNumber]) -> Vec<PhoneNumber> {
    let mut seen = HashSet::new();
    numbers
        .iter()
        .filter(|n| seen.insert(*n))
        .cloned()
        .collect()
}

/// Numerically next phone number, wrapping past the largest value.
pub fn next(number: &PhoneNumber) -> PhoneNumber {
    let value: u32 = number.to_string().parse().unwrap();
    let next = if value >= MAX_NUMERIC_VALUE { 0 } else { value + 1 };
    number_from_value(next)
}

pub fn new_set(strategy: TrieStrategy) -> std::sync::Arc<dyn PhoneNumberSet> {
    TrieFactory::create(strategy)
}
