use num_integer::Roots;
use tracing::trace;

/// Returns the primes needed to trial-divide numbers below `limit`.
///
/// The list starts at `[2, 3, 5]` and grows one odd candidate at a time until
/// its last element reaches `ceil(sqrt(limit))`. So it holds every prime up to
/// that bound, and the last element may be the first prime above it.
pub fn primes_up_to_sqrt(limit: u64) -> Vec<u64> {
    let bound = ceil_sqrt(limit);
    let mut primes = vec![2, 3, 5];

    let mut candidate = 7;
    while primes.last().map_or(false, |&p| p < bound) {
        let composite = primes
            .iter()
            .take_while(|&&p| p <= candidate / p)
            .any(|&p| candidate % p == 0);
        if !composite {
            primes.push(candidate);
        }
        candidate += 2;
    }

    trace!(limit, bound, count = primes.len(), "sieve built");
    primes
}

fn ceil_sqrt(n: u64) -> u64 {
    let s = n.sqrt();
    if s * s < n {
        s + 1
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use crate::prime::is_prime;

    use super::*;

    #[test]
    fn ceil_sqrt_values() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(25), 5);
        assert_eq!(ceil_sqrt(26), 6);
        assert_eq!(ceil_sqrt(1 << 16), 256);
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }

    #[test]
    fn tiny_limits_keep_seed() {
        for limit in [0, 1, 2, 10, 25] {
            assert_eq!(primes_up_to_sqrt(limit), [2, 3, 5]);
        }
    }

    #[test]
    fn reaches_bound() {
        assert_eq!(primes_up_to_sqrt(100), [2, 3, 5, 7, 11]);
        assert_eq!(primes_up_to_sqrt(256), [2, 3, 5, 7, 11, 13, 17]);
        assert_eq!(primes_up_to_sqrt(289), [2, 3, 5, 7, 11, 13, 17]);
    }

    #[test]
    fn strictly_increasing_primes() {
        let primes = primes_up_to_sqrt(1 << 20);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
        assert!(primes.iter().all(|&p| is_prime(p)));
        for (i, a) in primes.iter().enumerate() {
            for b in &primes[i + 1..] {
                assert_ne!(b % a, 0);
            }
        }
        let expected: Vec<u64> = (0..=1024).filter(|&n| is_prime(n)).collect();
        assert_eq!(&primes[..expected.len()], &expected[..]);
        assert_eq!(primes.last(), Some(&1031));
    }
}
