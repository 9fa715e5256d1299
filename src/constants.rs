/// Integers covered by one sieving window when the caller doesn't configure it.
///
/// Only odd numbers occupy bits, so a window of 2^20 integers costs 64 KiB of bitmap. That fits
/// comfortably in L2 on modern CPUs while keeping the per-window base loop overhead negligible.
pub const DEFAULT_SEGMENT_LENGTH: u64 = 1 << 20;

/// Upper limit on a configured window, so that the candidate bitmap stays addressable.
pub const MAX_SEGMENT_LENGTH: u64 = 1 << 36;

/// The sieve starts out knowing these primes, and has classified every integer up to the last.
pub const SEED_PRIMES: [u64; 2] = [2, 3];

pub fn ceil_div(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// Smallest r with r * r >= n.
pub fn ceil_sqrt(n: u64) -> u64 {
    let n = n as u128;
    let mut r = (n as f64).sqrt() as u128;
    // f64 rounding can land one off in either direction for large n.
    while r * r < n {
        r += 1;
    }
    while r > 0 && (r - 1) * (r - 1) >= n {
        r -= 1;
    }
    r as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_div_correct() {
        assert_eq!(0, ceil_div(0, 64));
        assert_eq!(1, ceil_div(1, 64));
        assert_eq!(1, ceil_div(64, 64));
        assert_eq!(2, ceil_div(65, 64));
    }

    #[test]
    fn ceil_sqrt_correct() {
        assert_eq!(0, ceil_sqrt(0));
        assert_eq!(1, ceil_sqrt(1));
        assert_eq!(2, ceil_sqrt(2));
        assert_eq!(2, ceil_sqrt(4));
        assert_eq!(3, ceil_sqrt(5));
        assert_eq!(32, ceil_sqrt(1000));
        assert_eq!(100, ceil_sqrt(10_000));
        assert_eq!(101, ceil_sqrt(10_001));
        assert_eq!(4_294_967_296, ceil_sqrt(u64::MAX));
    }
}
