use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    algo::{self, ArithError},
    prime::gen::{self, GenError},
};

/// Smallest supported bit width of `p` and `q`
pub const MIN_BITS: u32 = 8;
/// Largest supported bit width of `p` and `q`. Keeps `n` and the totient
/// below 2^40, so the exponent sieve stays small
pub const MAX_BITS: u32 = 20;
pub const DEFAULT_BITS: u32 = 16;
/// Default cap on sampled candidates per prime
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("value {value} at index {index} is not below the modulus {modulus}")]
    OutOfRange { index: usize, value: u64, modulus: u64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsaGenError {
    #[error("key size is too small")]
    KeyTooSmall,

    #[error("key size is too big")]
    KeyTooBig,

    #[error("p and q must be distinct primes above one")]
    InvalidPrimes,

    #[error("public exponent must satisfy 1 < e < lambda")]
    InvalidExponent,

    #[error("public exponent {e} is not coprime to lambda {lambda}")]
    NotInvertible { e: u64, lambda: u64 },

    #[error("no usable key pair after {attempts} attempts")]
    Exhausted { attempts: u64 },

    #[error(transparent)]
    Prime(#[from] GenError),

    #[error(transparent)]
    Arith(#[from] ArithError),
}

/// Key generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    bits: u32,
    max_attempts: u64,
}

impl Params {
    /// Parameters for primes below `2^bits`
    pub fn new(bits: u32) -> Result<Self, RsaGenError> {
        if bits < MIN_BITS {
            return Err(RsaGenError::KeyTooSmall);
        }
        if bits > MAX_BITS {
            return Err(RsaGenError::KeyTooBig);
        }
        Ok(Self {
            bits,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Caps the sampling loops. Zero makes every generation fail.
    pub fn with_max_attempts(self, max_attempts: u64) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            bits: DEFAULT_BITS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Everything derived for one key: the primes, the modulus, the Carmichael
/// totient and both exponents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    p: u64,
    q: u64,
    n: u64,
    lambda: u64,
    e: u64,
    d: u64,
}

/// Rsa private key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivate {
    d: u64,
    n: u64,
}

/// Rsa public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublic {
    e: u64,
    n: u64,
}

impl KeyPair {
    /// Builds the key pair from chosen primes and public exponent.
    #[allow(clippy::many_single_char_names)]
    pub fn from_parts(p: u64, q: u64, e: u64) -> Result<Self, RsaGenError> {
        if p <= 1 || q <= 1 || p == q {
            return Err(RsaGenError::InvalidPrimes);
        }
        let n = p.checked_mul(q).ok_or(ArithError::Overflow { a: p, b: q })?;
        let lambda = algo::lcm(p - 1, q - 1)?;
        if e <= 1 || e >= lambda {
            return Err(RsaGenError::InvalidExponent);
        }
        Self::with_exponent(p, q, n, lambda, e)
    }

    #[allow(clippy::many_single_char_names)]
    fn with_exponent(p: u64, q: u64, n: u64, lambda: u64, e: u64) -> Result<Self, RsaGenError> {
        let d = match algo::inv_mod(e, lambda) {
            Ok(d) => d,
            Err(ArithError::NoInverse { .. }) => {
                warn!(e, lambda, "public exponent is not invertible");
                return Err(RsaGenError::NotInvertible { e, lambda });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            p,
            q,
            n,
            lambda,
            e,
            d,
        })
    }

    pub fn public(&self) -> RsaPublic {
        RsaPublic {
            e: self.e,
            n: self.n,
        }
    }

    pub fn private(&self) -> RsaPrivate {
        RsaPrivate {
            d: self.d,
            n: self.n,
        }
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    /// The modulus `p * q`
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The Carmichael totient `lcm(p - 1, q - 1)`
    pub fn lambda(&self) -> u64 {
        self.lambda
    }

    pub fn e(&self) -> u64 {
        self.e
    }

    pub fn d(&self) -> u64 {
        self.d
    }
}

impl RsaPrivate {
    pub fn new(d: u64, n: u64) -> Self {
        Self { d, n }
    }

    pub fn decrypt(&self, ciphertext: &[u64]) -> Result<Vec<u64>, RsaError> {
        decrypt(ciphertext, self.d, self.n)
    }

    /// Get the rsa private's n.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Get the rsa private's d.
    pub fn d(&self) -> u64 {
        self.d
    }
}

impl RsaPublic {
    pub fn new(e: u64, n: u64) -> Self {
        Self { e, n }
    }

    pub fn encrypt(&self, message: &[u64]) -> Result<Vec<u64>, RsaError> {
        encrypt(message, self.e, self.n)
    }

    /// Get the rsa public's e.
    pub fn e(&self) -> u64 {
        self.e
    }

    /// Get the rsa public's n.
    pub fn n(&self) -> u64 {
        self.n
    }
}

/// Raises every value to `exponent` modulo `modulus`, keeping order.
///
/// Fails before computing anything if some value is not below the modulus,
/// since such values can't survive a round trip.
pub fn transform(values: &[u64], exponent: u64, modulus: u64) -> Result<Vec<u64>, RsaError> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, &v)| v >= modulus) {
        return Err(RsaError::OutOfRange {
            index,
            value,
            modulus,
        });
    }
    Ok(values
        .iter()
        .map(|&v| algo::mod_pow(v, exponent, modulus))
        .collect())
}

pub fn encrypt(message: &[u64], e: u64, n: u64) -> Result<Vec<u64>, RsaError> {
    transform(message, e, n)
}

pub fn decrypt(ciphertext: &[u64], d: u64, n: u64) -> Result<Vec<u64>, RsaError> {
    transform(ciphertext, d, n)
}

/// Derives one key pair.
///
/// The public exponent comes out of the same sieve-filtered sampler as the
/// primes and nothing forces it to be coprime to lambda. When it is not, this
/// returns [`RsaGenError::NotInvertible`]; [`generate_rsa_pair`] retries.
#[allow(clippy::many_single_char_names)]
pub fn derive_key_pair<R: Rng>(mut rng: R, params: &Params) -> Result<KeyPair, RsaGenError> {
    let limit = 1u64 << params.bits;
    let (p, q) = gen_prime_pair(&mut rng, limit, params.max_attempts)?;
    let n = p * q;
    let lambda = algo::lcm(p - 1, q - 1)?;
    let e = gen::new_prime(&mut rng, lambda, params.max_attempts)?;
    debug!(bits = params.bits, n, lambda, e, "derived rsa parameters");

    KeyPair::with_exponent(p, q, n, lambda, e)
}

/// Generates RSA key pair
pub fn generate_rsa_pair<R: Rng>(
    mut rng: R,
    params: &Params,
) -> Result<(RsaPublic, RsaPrivate), RsaGenError> {
    for _ in 0..params.max_attempts {
        match derive_key_pair(&mut rng, params) {
            Ok(pair) => return Ok((pair.public(), pair.private())),
            Err(RsaGenError::NotInvertible { .. }) => continue,
            Err(err) => return Err(err),
        }
    }
    Err(RsaGenError::Exhausted {
        attempts: params.max_attempts,
    })
}

fn gen_prime_pair<R: Rng>(mut rng: R, limit: u64, max_attempts: u64) -> Result<(u64, u64), GenError> {
    let p = gen::new_prime(&mut rng, limit, max_attempts)?;
    for _ in 0..max_attempts {
        let q = gen::new_prime(&mut rng, limit, max_attempts)?;
        if p != q {
            return Ok((p, q));
        }
    }
    Err(GenError::Exhausted {
        limit,
        attempts: max_attempts,
    })
}
