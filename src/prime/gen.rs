use rand::Rng;
use thiserror::Error;
use tracing::trace;

use super::sieve;

/// Residues modulo 30 that are coprime to 30
pub const RESIDUES: [u64; 8] = [1, 7, 11, 13, 17, 19, 23, 29];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("limit {limit} is too small, no candidate of the form 30k + i exists")]
    LimitTooSmall { limit: u64 },

    #[error("no candidate below {limit} passed the sieve after {attempts} attempts")]
    Exhausted { limit: u64, attempts: u64 },
}

/// Samples a likely prime below `limit`.
///
/// Every attempt draws `30k + i` with `k` uniform in `[0, limit / 30)` and
/// `i` from [`RESIDUES`], and keeps it if none of the sieve primes divides it.
/// Passing the sieve is necessary but not sufficient for primality: a
/// composite whose smallest factor is above `sqrt(limit)` gets through.
pub fn new_prime<R: Rng>(mut rng: R, limit: u64, max_attempts: u64) -> Result<u64, GenError> {
    let blocks = limit / 30;
    if blocks == 0 {
        return Err(GenError::LimitTooSmall { limit });
    }
    let primes = sieve::primes_up_to_sqrt(limit);

    for attempt in 1..=max_attempts {
        let k = rng.gen_range(0..blocks);
        let i = RESIDUES[rng.gen_range(0..RESIDUES.len())];
        let c = 30 * k + i;
        if passes_sieve(c, &primes) {
            trace!(limit, attempt, "candidate accepted");
            return Ok(c);
        }
    }
    Err(GenError::Exhausted {
        limit,
        attempts: max_attempts,
    })
}

/// True if `c` is above one and none of `primes` divides it.
pub fn passes_sieve(c: u64, primes: &[u64]) -> bool {
    c > 1 && primes.iter().all(|&p| c % p != 0)
}
