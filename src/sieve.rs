use std::cmp;
use std::fmt;

use tracing::{debug, trace};

use crate::config::SieveConfig;
use crate::constants::{ceil_sqrt, SEED_PRIMES};
use crate::error::Result;
use crate::prime_set::PrimeSet;
use crate::progress::BaseProgress;
use crate::window::Window;

/// Incremental sieve of Eratosthenes that remembers its work between queries
///
/// A one-shot sieve answers "primes up to n" by striking multiples from a fresh array every time.
/// Asking again with a slightly larger n repeats all of that work. This sieve instead keeps three
/// pieces of state:
/// - every prime found so far,
/// - a high-water mark below which every integer has been classified,
/// - for each odd base b, the largest multiple of b already struck.
///
/// Extending to a new bound only builds a window over the odd numbers above the high-water mark,
/// and each base resumes striking from its saved cursor. A sequence of growing bounds
/// n_1 < n_2 < ... < n_k therefore costs about as much as a single sieve up to n_k.
///
/// Large extensions are split into windows of `segment_length` integers (see [`SieveConfig`]), so
/// the candidate bitmap never outgrows cache no matter how far a single query reaches.
///
/// Usage:
///
///     use jprime::IncrementalSieve;
///
///     let mut sieve = IncrementalSieve::new();
///     assert!(sieve.is_prime(97));
///     assert!(!sieve.is_prime(-7));
///     assert_eq!(vec![83, 89, 97], sieve.primes_in_range(80, 100));
///     assert_eq!(vec![2, 3, 5, 7], sieve.primes_below(10));
///
/// The sieve is a plain owned value. Share it across threads behind a `Mutex`: each extension is a
/// multi-step update of all three pieces of state.
pub struct IncrementalSieve {
    primes: PrimeSet,
    progress: BaseProgress,
    checked: u64,
    config: SieveConfig,
}

impl Default for IncrementalSieve {
    fn default() -> IncrementalSieve {
        IncrementalSieve::from_valid_config(SieveConfig::default())
    }
}

impl fmt::Debug for IncrementalSieve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalSieve")
            .field("known_primes", &self.primes.len())
            .field("greatest_checked_value", &self.greatest_checked_value())
            .field("tracked_bases", &self.progress.len())
            .field("config", &self.config)
            .finish()
    }
}

impl IncrementalSieve {
    pub fn new() -> IncrementalSieve {
        IncrementalSieve::default()
    }

    pub fn with_config(config: SieveConfig) -> Result<IncrementalSieve> {
        config.validate()?;
        Ok(IncrementalSieve::from_valid_config(config))
    }

    fn from_valid_config(config: SieveConfig) -> IncrementalSieve {
        IncrementalSieve {
            primes: PrimeSet::new(),
            progress: BaseProgress::new(),
            checked: IncrementalSieve::seed_checked(),
            config,
        }
    }

    fn seed_checked() -> u64 {
        SEED_PRIMES[SEED_PRIMES.len() - 1]
    }

    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Is n prime? Accepts any integer; everything below 2 is composite by convention.
    pub fn is_prime(&mut self, n: i64) -> bool {
        if IncrementalSieve::trivially_composite(n) {
            return false;
        }
        let n = n as u64;
        self.extend_to(n);
        self.primes.contains(n)
    }

    /// Primes p with low <= p <= high, ascending. Empty when high < low.
    pub fn primes_in_range(&mut self, low: i64, high: i64) -> Vec<u64> {
        if high < cmp::max(low, 2) {
            return Vec::new();
        }
        let low = cmp::max(low, 0) as u64;
        let high = high as u64;
        self.extend_to(high);
        self.primes.range(low, high).to_vec()
    }

    /// Primes p with 2 <= p <= high, ascending.
    pub fn primes_below(&mut self, high: i64) -> Vec<u64> {
        self.primes_in_range(2, high)
    }

    /// Zero-based index into the primes: nth_prime(0) is 2.
    pub fn nth_prime(&mut self, index: usize) -> Option<u64> {
        self.iter().nth(index)
    }

    /// Ascending iterator over all primes, sieving further whenever the known ones run out.
    pub fn iter(&mut self) -> Primes<'_> {
        Primes {
            sieve: self,
            index: 0,
        }
    }

    /// Forget everything except the seed primes.
    pub fn reset(&mut self) {
        debug!(
            known_primes = self.primes.len(),
            checked = self.checked,
            "resetting sieve"
        );
        self.primes = PrimeSet::new();
        self.progress = BaseProgress::new();
        self.checked = IncrementalSieve::seed_checked();
    }

    /// Classify every integer up to bound, reusing all earlier work.
    pub fn extend_to(&mut self, bound: u64) {
        if bound <= self.checked {
            return;
        }
        let from = self.checked;
        let known_before = self.primes.len();
        while self.checked < bound {
            let window_end =
                cmp::min(bound, self.checked.saturating_add(self.config.segment_length));
            self.sieve_window(window_end);
        }
        debug!(
            from,
            to = bound,
            found = self.primes.len() - known_before,
            tracked_bases = self.progress.len(),
            "extended sieve"
        );
    }

    /// Push the high-water mark one segment further. False once there is nothing left to classify.
    fn extend_one_segment(&mut self) -> bool {
        if self.checked == u64::MAX {
            return false;
        }
        let bound = self.checked.saturating_add(self.config.segment_length);
        self.extend_to(bound);
        true
    }

    /// Sieve the odd numbers in (checked, window_end] and advance the high-water mark.
    fn sieve_window(&mut self, window_end: u64) {
        // First odd number above checked.
        let window_start = (self.checked + 1) | 1;
        let mut window = Window::new(window_start, window_end);
        if !window.is_empty() {
            let root = ceil_sqrt(window_end);
            for base in (3..=root).step_by(2) {
                let multiple = self.progress.next_multiple(base);
                let next_multiple = window.strike_base(base, multiple);
                self.progress.advance(base, next_multiple);
            }
        }
        let found = self.primes.extend(&mut window);
        trace!(window_start, window_end, found, "sieved window");
        self.checked = window_end;
    }

    pub fn known_primes(&self) -> &[u64] {
        self.primes.as_slice()
    }

    /// Largest odd number classified so far. Every odd number up to it is known prime or composite.
    pub fn greatest_checked_value(&self) -> u64 {
        if self.checked % 2 == 0 {
            self.checked - 1
        } else {
            self.checked
        }
    }

    pub fn tracked_bases(&self) -> usize {
        self.progress.len()
    }

    /// Number of primes known so far. Never below 2: the seed primes are always present.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    fn trivially_composite(n: i64) -> bool {
        n < 2 || (n != 2 && n % 2 == 0)
    }
}

/// Iterator returned by [`IncrementalSieve::iter`].
///
/// Yields known primes first, then extends the sieve by one segment at a time.
pub struct Primes<'a> {
    sieve: &'a mut IncrementalSieve,
    index: usize,
}

impl Iterator for Primes<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.sieve.primes.get(self.index) {
                self.index += 1;
                return Some(p);
            }
            if !self.sieve.extend_one_segment() {
                return None;
            }
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let target = self.index.checked_add(n)?;
        while self.sieve.primes.len() <= target {
            if !self.sieve.extend_one_segment() {
                return None;
            }
        }
        self.index = target;
        self.next()
    }
}
