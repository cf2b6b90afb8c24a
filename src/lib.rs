//! Textbook RSA over native integers.
//!
//! Primes come from a residue-class sampler filtered by trial division, the
//! totient is Carmichael's `lcm(p - 1, q - 1)`, and messages are plain
//! sequences of integers smaller than the modulus. There is no padding and
//! nothing here is constant-time: this is for studying the arithmetic, not for
//! protecting data.
//!
//! # Usage
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tiny_rsa::{rsa::{self, Params}, text};
//!
//! let mut rng = StdRng::seed_from_u64(17);
//! let (public, private) = rsa::generate_rsa_pair(&mut rng, &Params::default()).unwrap();
//!
//! let message = text::to_codepoints("I think RSA is really great");
//! let ciphertext = public.encrypt(&message).unwrap();
//! let decrypted = private.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(text::from_codepoints(&decrypted).unwrap(), "I think RSA is really great");
//! ```

/// Module dedicated to the number theory helpers: gcd, lcm, modular inverse
/// and modular exponentiation
pub mod algo;

/// Module dedicated to the prime candidate generation and verification
pub mod prime;

/// Module dedicated to the rsa key derivation and the encryption transform
pub mod rsa;

/// Conversions between strings and integer sequences
pub mod text;
