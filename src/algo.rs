use num_integer::Integer;
use num_traits::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithError {
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: u64, modulus: u64 },

    #[error("{a} * {b} does not fit into 64 bits")]
    Overflow { a: u64, b: u64 },
}

/// Greatest common divisor, Euclid's remainder loop.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple. Zero if either argument is zero.
pub fn lcm(a: u64, b: u64) -> Result<u64, ArithError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(ArithError::Overflow { a, b })
}

/// Extended Euclidian algorithm. Returns `(g, x, y)` with `a*x + b*y = g`.
#[allow(clippy::many_single_char_names)]
pub fn egcd(a: u64, b: u64) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (i128::from(a), i128::from(b));
    let (mut old_s, mut s) = (1i128, 0i128);
    let (mut old_t, mut t) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }
    (old_r, old_s, old_t)
}

/// Modulo inverse through [`egcd`].
pub fn inv_mod(e: u64, delta: u64) -> Result<u64, ArithError> {
    let no_inverse = ArithError::NoInverse {
        value: e,
        modulus: delta,
    };
    if delta <= 1 {
        return Err(no_inverse);
    }
    let (g, x, _) = egcd(e % delta, delta);
    if g != 1 {
        return Err(no_inverse);
    }
    x.mod_floor(&i128::from(delta)).to_u64().ok_or(no_inverse)
}

/// Modulo inverse by trying every `i` in `[1, delta)`.
///
/// Runs in O(delta), so it is only usable for small moduli. Gives the same
/// answers as [`inv_mod`].
pub fn inv_mod_search(e: u64, delta: u64) -> Result<u64, ArithError> {
    let e_red = if delta == 0 { e } else { e % delta };
    (1..delta)
        .find(|&i| mul_mod(i, e_red, delta) == 1)
        .ok_or(ArithError::NoInverse {
            value: e,
            modulus: delta,
        })
}

/// Computes `base^exponent (mod modulus)` by square-and-multiply.
///
/// # Panic
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut base = base % modulus;
    let mut r = 1;
    while exponent > 0 {
        if exponent.is_odd() {
            r = mul_mod(r, base, modulus);
        }
        exponent >>= 1;
        base = mul_mod(base, base, modulus);
    }
    r
}

/// `a * b (mod m)` with a 128 bit intermediate, so it never wraps.
#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    // the remainder is below m, the cast is lossless
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}
