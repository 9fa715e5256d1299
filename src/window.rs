use crate::bit_vec::BitVec;

/// The odd integers in [start, end] that one extension step still has to classify.
///
/// Evens never get a bit: index i stands for start + 2 * i. Striking every multiple of each odd
/// base up to sqrt(end) leaves exactly the primes of the window set.
pub struct Window {
    sieve: BitVec,
    start: u64,
    end: u64,
}

impl Iterator for Window {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let window_n = self.sieve.next()?;
        Some(self.window_to_n(window_n))
    }
}

impl Window {
    /// Create an unsieved Window over the odd numbers in [start, end].
    ///
    /// start must be odd. An end below start gives an empty window.
    pub fn new(start: u64, end: u64) -> Window {
        debug_assert!(start % 2 == 1, "window start {} is even", start);
        let len = if end < start {
            0
        } else {
            ((end - start) / 2 + 1) as usize
        };

        Window {
            sieve: BitVec::new(len),
            start,
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sieve.len() == 0
    }

    /// Strike odd multiples of base from multiple onwards, returning the first one past end.
    ///
    /// If that next multiple doesn't fit in a u64, the last multiple reached is returned instead.
    /// The cursor then stays on a real multiple of base, and resuming from it only re-strikes a
    /// value that is already behind every later window.
    ///
    /// Multiples below start are skipped rather than treated as errors: a base whose cursor lags
    /// the window simply catches up.
    pub fn strike_base(&mut self, base: u64, multiple: u64) -> u64 {
        let step = 2 * base;
        let mut multiple = multiple;
        while multiple <= self.end {
            if multiple >= self.start {
                self.sieve.unset(self.n_to_window(multiple));
            }
            multiple = match multiple.checked_add(step) {
                Some(next) => next,
                None => return multiple,
            };
        }
        multiple
    }

    #[cfg(test)]
    fn contains(&self, n: u64) -> bool {
        n >= self.start && n <= self.end && n % 2 == 1 && self.sieve.is_set(self.n_to_window(n))
    }

    /// Convert between number space and window space.
    fn n_to_window(&self, n: u64) -> usize {
        ((n - self.start) / 2) as usize
    }
    fn window_to_n(&self, window_n: usize) -> u64 {
        self.start + 2 * window_n as u64
    }
}
