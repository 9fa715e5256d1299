use std::collections::HashSet;

use jprime::{IncrementalSieve, SieveConfig, SieveError};

fn trial_division(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[test]
fn is_prime_matches_trial_division() {
    let mut sieve = IncrementalSieve::new();
    for n in -10..=10_000 {
        assert_eq!(trial_division(n), sieve.is_prime(n), "n = {}", n);
    }
}

#[test]
fn is_prime_matches_trial_division_descending() {
    let mut sieve = IncrementalSieve::new();
    for n in (-10..=10_000).rev() {
        assert_eq!(trial_division(n), sieve.is_prime(n), "n = {}", n);
    }
}

#[test]
fn primes_below_1000() {
    let mut sieve = IncrementalSieve::new();
    let primes = sieve.primes_in_range(2, 1000);

    assert_eq!(168, primes.len());
    assert_eq!(Some(&2), primes.first());
    assert_eq!(Some(&997), primes.last());
    assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(primes.iter().all(|&p| trial_division(p as i64)));
}

#[test]
fn shrinking_query_keeps_earlier_primes() {
    let mut sieve = IncrementalSieve::new();
    let first = sieve.primes_in_range(2, 100);
    let second = sieve.primes_in_range(2, 50);

    let expected = first.iter().copied().filter(|&p| p <= 50).collect::<Vec<_>>();
    assert_eq!(expected, second);
    assert_eq!(first, sieve.known_primes().to_vec());
}

#[test]
fn stepwise_extension_matches_direct() {
    let mut stepwise = IncrementalSieve::new();
    for &bound in &[100, 500, 1000, 5000] {
        stepwise.primes_in_range(2, bound);
    }

    let mut direct = IncrementalSieve::new();
    assert_eq!(direct.primes_in_range(2, 5000), stepwise.primes_in_range(2, 5000));
}

#[test]
fn known_primes_never_repeat() {
    let mut sieve = IncrementalSieve::new();
    for &bound in &[7, 8, 9, 10, 11, 49, 50, 51, 120, 121, 122, 1_000, 999, 3_000] {
        sieve.extend_to(bound);
        let known = sieve.known_primes();
        let unique = known.iter().collect::<HashSet<_>>();
        assert_eq!(known.len(), unique.len(), "duplicates after extending to {}", bound);
    }
}

#[test]
fn reset_resieves_from_scratch() {
    let mut sieve = IncrementalSieve::new();
    assert!(sieve.is_prime(7_919));
    sieve.reset();

    assert_eq!(3, sieve.greatest_checked_value());
    assert!(sieve.is_prime(997));
    assert_eq!(997, sieve.greatest_checked_value());
    assert_eq!(Some(&997), sieve.known_primes().last());
}

#[test]
fn inverted_range_is_empty() {
    let mut sieve = IncrementalSieve::new();
    assert_eq!(Vec::<u64>::new(), sieve.primes_in_range(50, 10));
    assert_eq!(Vec::<u64>::new(), sieve.primes_in_range(i64::MAX, i64::MIN));
}

#[test]
fn configured_segments() {
    assert_eq!(
        SieveError::ZeroSegmentLength,
        IncrementalSieve::with_config(SieveConfig::with_segment_length(0)).unwrap_err()
    );

    let mut sieve = IncrementalSieve::with_config(SieveConfig::with_segment_length(10)).unwrap();
    assert_eq!(10, sieve.config().segment_length);
    assert_eq!(1_229, sieve.primes_below(10_000).len());
}

#[test]
fn sieve_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<IncrementalSieve>();
}
