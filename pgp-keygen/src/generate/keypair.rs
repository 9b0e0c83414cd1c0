//!
//! Generate an ElGamal keypair
//!

use crate::{
    elgamal::{Parameters, PrivateKey, PublicKey},
    generate::two,
};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

/// Generate a new keypair
#[inline]
pub(crate) fn elgamal<R>(rng: &mut R, parameters: Parameters) -> PrivateKey
where
    R: CryptoRng + RngCore + ?Sized,
{
    // x is drawn from [2, p - 2]
    let p_minus_one = parameters.p() - BigUint::one();
    let x = rng.gen_biguint_range(&two(), &p_minus_one);
    let y = parameters.g().modpow(&x, parameters.p());

    PrivateKey::from_components(PublicKey::from_components(parameters, y), x)
}
