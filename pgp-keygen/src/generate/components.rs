//!
//! Generate DSA2 domain parameters (FIPS 186-4, Appendix A.1.1.2 and A.2.1)
//!

use crate::generate::{miller_rabin_rounds, to_fixed_be_bytes, two};
use digest::Digest;
use num_bigint::{BigUint, prime::probably_prime};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Freshly generated common components, with the seed and counter that produced them
pub(crate) struct Generated {
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) g: BigUint,
    pub(crate) seed: Vec<u8>,
    pub(crate) counter: u32,
}

/// Probabilistic primality test at the given certainty
#[inline]
pub(crate) fn is_probable_prime(candidate: &BigUint, certainty: u32) -> bool {
    probably_prime(candidate, miller_rabin_rounds(certainty))
}

/// Generate the common components p, q and g
///
/// `l` and `n` are the bit sizes of p and q. The digest `D` drives the prime
/// search; at most `seed_attempts` seeds are drawn from `rng`.
///
/// # Returns
///
/// `None` once every seed has been tried without success
pub(crate) fn common<D, R>(
    rng: &mut R,
    l: u32,
    n: u32,
    certainty: u32,
    seed_attempts: usize,
) -> Option<Generated>
where
    D: Digest,
    R: CryptoRng + RngCore,
{
    let (p, q, seed, counter) = primes::<D, R>(rng, l, n, certainty, seed_attempts)?;
    let g = generator(&p, &q)?;

    Some(Generated {
        p,
        q,
        g,
        seed,
        counter,
    })
}

/// Search for primes p and q with q | p - 1
fn primes<D, R>(
    rng: &mut R,
    l: u32,
    n: u32,
    certainty: u32,
    seed_attempts: usize,
) -> Option<(BigUint, BigUint, Vec<u8>, u32)>
where
    D: Digest,
    R: CryptoRng + RngCore,
{
    let outlen = <D as Digest>::output_size() * 8;
    let l = l as usize;
    let n = n as usize;

    // L - 1 = blocks * outlen + b
    let blocks = (l - 1) / outlen;
    let b = (l - 1) % outlen;

    let seed_len = n / 8;
    let seed_modulus = BigUint::one() << n;
    let q_min = BigUint::one() << (n - 1);
    let p_min = BigUint::one() << (l - 1);
    let tail_modulus = BigUint::one() << b;

    let mut seed = vec![0; seed_len];
    for attempt in 1..=seed_attempts {
        rng.fill_bytes(&mut seed);

        // U = Hash(seed) mod 2^(N-1); q = 2^(N-1) + U + 1 - (U mod 2)
        let u = BigUint::from_bytes_be(&D::digest(&seed)) % &q_min;
        let q = u | &q_min | BigUint::one();

        if !is_probable_prime(&q, certainty) {
            continue;
        }

        let two_q = &q << 1;
        let seed_value = BigUint::from_bytes_be(&seed);
        let mut offset = 1_usize;

        for counter in 0..(4 * l) {
            // W = V_0 + V_1 * 2^outlen + ... + (V_blocks mod 2^b) * 2^(blocks * outlen)
            let mut w = BigUint::zero();
            for j in 0..=blocks {
                let input = (&seed_value + BigUint::from((offset + j) as u64)) % &seed_modulus;
                let mut v = BigUint::from_bytes_be(&D::digest(to_fixed_be_bytes(&input, seed_len)));
                if j == blocks {
                    v %= &tail_modulus;
                }
                w += v << (j * outlen);
            }
            offset += blocks + 1;

            let x = w + &p_min;
            let c = &x % &two_q;
            let p = x - c + BigUint::one();

            if p >= p_min && is_probable_prime(&p, certainty) {
                log::debug!("found {l}-bit p after {attempt} seed(s), counter = {counter}");
                return Some((p, q, seed, counter as u32));
            }
        }

        log::debug!("seed {attempt} exhausted its counter range, drawing a new one");
    }

    None
}

/// Find a generator of the order-q subgroup (unverifiable method, Appendix A.2.1)
fn generator(p: &BigUint, q: &BigUint) -> Option<BigUint> {
    let p_minus_one = p - BigUint::one();
    let e = &p_minus_one / q;

    let mut h = two();
    while h < p_minus_one {
        let g = h.modpow(&e, p);
        if g > BigUint::one() {
            return Some(g);
        }

        h += BigUint::one();
    }

    None
}
