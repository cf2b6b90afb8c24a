/// Random prime candidates of the form `30k + i`
pub mod gen;

/// Small primes used as a trial division filter
pub mod sieve;

/// Deterministic primality check by trial division.
///
/// The candidate generator only filters by the sieve primes, so this is how
/// its output can be audited. Runs in O(sqrt(n)).
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
