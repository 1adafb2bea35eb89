//! Bulk loading of phone numbers into a shared set.

use std::{
    io::BufRead,
    thread,
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    digit_trie::PhoneNumberSet,
    phone_number::{PhoneNumber, PhoneNumberError},
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: PhoneNumberError,
    },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a bulk load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Numbers handed to the set, duplicates included
    pub submitted: usize,
    /// Set size once every worker has joined
    pub distinct: usize,
    pub workers: usize,
    pub elapsed: Duration,
}

/// Parse one phone number per line.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comments are
/// skipped. The first invalid line aborts parsing.
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<PhoneNumber>, LoadError> {
    let mut numbers = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let number = PhoneNumber::new(raw).map_err(|source| LoadError::InvalidLine {
            line: idx + 1,
            source,
        })?;
        numbers.push(number);
    }
    debug!(count = numbers.len(), "Parsed phone numbers");
    Ok(numbers)
}

/// Insert `numbers` into `set` from up to `workers` scoped threads.
///
/// Each thread owns a contiguous chunk of the input. A worker count of zero
/// is treated as one.
pub fn load_concurrently(
    set: &dyn PhoneNumberSet,
    numbers: &[PhoneNumber],
    workers: usize,
) -> LoadReport {
    let start = Instant::now();
    let workers = workers.max(1).min(numbers.len().max(1));

    if !numbers.is_empty() {
        let chunk_size = numbers.len().div_ceil(workers);
        thread::scope(|scope| {
            for chunk in numbers.chunks(chunk_size) {
                scope.spawn(move || {
                    for number in chunk {
                        set.add(number);
                    }
                });
            }
        });
    }

    let report = LoadReport {
        submitted: numbers.len(),
        distinct: set.size(),
        workers,
        elapsed: start.elapsed(),
    };
    info!(
        strategy = set.name(),
        submitted = report.submitted,
        distinct = report.distinct,
        workers = report.workers,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Loaded phone numbers"
    );
    report
}
