//!
//! ElGamal domain parameters and keys
//!

use crate::{
    generate::{self, two},
    prime_table,
    size::ElGamalKeySize,
};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Generator paired with every safe prime of the table
pub const GENERATOR: u32 = 2;

/// ElGamal domain parameters (the safe prime p and generator g)
///
/// The modulus always comes from the [prime table](crate::prime_table), so
/// building parameters involves no primality testing and no randomness.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Parameters {
    /// Size of p
    size: ElGamalKeySize,

    /// Safe prime p
    p: BigUint,

    /// Generator g
    g: BigUint,
}

impl Parameters {
    /// Parameters for the given modulus size
    pub fn new(size: ElGamalKeySize) -> Self {
        Self {
            size,
            p: prime_table::safe_prime(size),
            g: BigUint::from(GENERATOR),
        }
    }

    /// Modulus size
    #[must_use]
    pub const fn size(&self) -> ElGamalKeySize {
        self.size
    }

    /// Safe prime p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// Generator g
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Order of the subgroup generated by g, (p - 1) / 2
    #[must_use]
    pub fn subgroup_order(&self) -> BigUint {
        (&self.p - BigUint::one()) >> 1
    }
}

/// Build ElGamal domain parameters for `key_size` bits
///
/// Accepts 1024, 2048, 3072 and 4096; anything else is an
/// [`InvalidParameter`](crate::Error::InvalidParameter) error. A request for
/// 1024 bits yields the 1536-bit RFC 3526 group 5 modulus.
pub fn build_parameters(key_size: u32) -> crate::Result<Parameters> {
    let size = ElGamalKeySize::try_from(key_size)?;
    log::debug!(
        "using the {}-bit MODP group for a {size}-bit request, generator {GENERATOR}",
        size.modulus_bits()
    );

    Ok(Parameters::new(size))
}

/// ElGamal public key
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct PublicKey {
    /// Domain parameters
    parameters: Parameters,

    /// Public component y = g^x mod p
    y: BigUint,
}

opaque_debug::implement!(PublicKey);

impl PublicKey {
    /// Construct a new public key from the domain parameters and the public component
    ///
    /// These values are not getting verified for validity
    pub const fn from_components(parameters: Parameters, y: BigUint) -> Self {
        Self { parameters, y }
    }

    /// Domain parameters
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Public component y
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// Check whether the public key is valid
    ///
    /// y must lie strictly between 1 and p - 1 and inside the subgroup generated by g.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let p = self.parameters.p();
        let one = BigUint::one();

        self.y > one
            && self.y < p - &one
            && self.y.modpow(&self.parameters.subgroup_order(), p) == one
    }
}

/// ElGamal private key, holding its public key
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct PrivateKey {
    /// Public key
    public_key: PublicKey,

    /// Private component x
    x: Zeroizing<BigUint>,
}

opaque_debug::implement!(PrivateKey);

impl PrivateKey {
    /// Construct a new private key from the public key and private component
    ///
    /// These values are not getting verified for validity
    pub fn from_components(public_key: PublicKey, x: BigUint) -> Self {
        Self {
            public_key,
            x: Zeroizing::new(x),
        }
    }

    /// Generate a new ElGamal keypair
    #[inline]
    pub fn generate<R>(rng: &mut R, parameters: Parameters) -> Self
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        generate::elgamal_keypair(rng, parameters)
    }

    /// ElGamal public key
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// ElGamal private component
    ///
    /// If you decide to clone this value, please consider using [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the memory after you're done using the clone
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Check whether the private key is valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if !self.public_key.is_valid() {
            return false;
        }

        let parameters = self.public_key.parameters();
        let p = parameters.p();

        *self.x() >= two()
            && *self.x() < p - BigUint::one()
            && parameters.g().modpow(self.x(), p) == *self.public_key.y()
    }
}

/// Generate an ElGamal keypair over `parameters`
pub fn generate_key_pair<R>(rng: &mut R, parameters: &Parameters) -> PrivateKey
where
    R: CryptoRng + RngCore + ?Sized,
{
    log::info!("generating {}-bit ElGamal keypair", parameters.size());
    PrivateKey::generate(rng, parameters.clone())
}
