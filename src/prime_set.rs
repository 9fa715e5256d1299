use std::ops::Range;

use crate::constants::SEED_PRIMES;

/// Every prime discovered so far, strictly ascending.
///
/// New primes always come from a window that starts above every known prime, so appending keeps
/// the vector sorted and duplicate-free without a merge or dedup pass.
#[derive(Debug, Clone)]
pub struct PrimeSet {
    primes: Vec<u64>,
}

impl Default for PrimeSet {
    fn default() -> PrimeSet {
        PrimeSet {
            primes: SEED_PRIMES.to_vec(),
        }
    }
}

impl PrimeSet {
    pub fn new() -> PrimeSet {
        PrimeSet::default()
    }

    /// Append primes found above the current greatest one, returning how many were added.
    pub fn extend<I>(&mut self, new_primes: I) -> usize
    where
        I: IntoIterator<Item = u64>,
    {
        let before = self.primes.len();
        for p in new_primes {
            debug_assert!(
                self.primes.last().map_or(true, |&last| last < p),
                "prime {} out of order",
                p
            );
            self.primes.push(p);
        }
        self.primes.len() - before
    }

    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }

    /// Known primes within [low, high].
    pub fn range(&self, low: u64, high: u64) -> &[u64] {
        &self.primes[self.index_range(low, high)]
    }

    fn index_range(&self, low: u64, high: u64) -> Range<usize> {
        let start = self.primes.partition_point(|&p| p < low);
        let end = self.primes.partition_point(|&p| p <= high);
        start..end.max(start)
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.primes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.primes.len()
    }
}
