//!
//! DSA2 domain parameter selection
//!

use crate::{
    Error, Result,
    algorithm::{HashAlgorithm, PublicKeyAlgorithm},
    generate::{self, is_probable_prime},
    size::Dsa2KeySize,
};
use core::fmt;
use dsa::{Components, SigningKey};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use std::time::Instant;

/// Primality certainty used for p and q (error probability below 2^-80)
pub const CERTAINTY: u32 = 80;

/// Number of seeds tried before the search gives up
pub const SEED_ATTEMPTS: usize = 4096;

/// Inputs of the DSA2 parameter search
///
/// Everything except the prime size is fixed: the subgroup size follows from
/// the prime size, the certainty is [`CERTAINTY`] and the search digest is SHA-256.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct GenerationParameters {
    /// Size of p (L)
    key_size: Dsa2KeySize,

    /// Size of q (N)
    subgroup_bits: u32,

    /// Primality certainty
    certainty: u32,

    /// Digest driving the prime search
    digest: HashAlgorithm,
}

impl GenerationParameters {
    /// Search inputs for the given prime size
    pub const fn new(key_size: Dsa2KeySize) -> Self {
        Self {
            key_size,
            subgroup_bits: key_size.subgroup_bits(),
            certainty: CERTAINTY,
            digest: HashAlgorithm::Sha256,
        }
    }

    /// Requested prime size
    #[must_use]
    pub const fn key_size(&self) -> Dsa2KeySize {
        self.key_size
    }

    /// Bit size of p (L)
    #[must_use]
    pub const fn prime_bits(&self) -> u32 {
        self.key_size.bits()
    }

    /// Bit size of q (N)
    #[must_use]
    pub const fn subgroup_bits(&self) -> u32 {
        self.subgroup_bits
    }

    /// Primality certainty
    #[must_use]
    pub const fn certainty(&self) -> u32 {
        self.certainty
    }

    /// Digest driving the prime search
    #[must_use]
    pub const fn digest(&self) -> HashAlgorithm {
        self.digest
    }

    /// Search for a (p, q, g) triple
    ///
    /// This is by far the slowest step of key generation: expect seconds at
    /// 2048 bits and up to minutes at 3072 bits. The search blocks the calling
    /// thread and cannot be interrupted.
    pub fn generate<R>(&self, rng: &mut R) -> Result<DomainParameters>
    where
        R: CryptoRng + RngCore,
    {
        self.generate_with_budget(rng, SEED_ATTEMPTS)
    }

    pub(crate) fn generate_with_budget<R>(
        &self,
        rng: &mut R,
        seed_attempts: usize,
    ) -> Result<DomainParameters>
    where
        R: CryptoRng + RngCore,
    {
        let bits = self.prime_bits();
        let failed = |reason| Error::GenerationFailed {
            algorithm: PublicKeyAlgorithm::Dsa,
            bits,
            reason,
        };

        log::info!(
            "generating {bits}-bit DSA2 domain parameters (N = {}, certainty = {}, digest = {})",
            self.subgroup_bits,
            self.certainty,
            self.digest
        );
        let started = Instant::now();

        let generated = generate::common_components::<Sha256, R>(
            rng,
            bits,
            self.subgroup_bits,
            self.certainty,
            seed_attempts,
        )
        .ok_or_else(|| {
            log::warn!("no {bits}-bit DSA2 primes found within {seed_attempts} seeds");
            failed("seed budget exhausted before a prime pair was found")
        })?;

        let components = Components::from_components(generated.p, generated.q, generated.g)
            .map_err(|_| failed("generated components were rejected"))?;

        log::info!(
            "generated {bits}-bit DSA2 domain parameters in {:.2?}",
            started.elapsed()
        );

        Ok(DomainParameters {
            generation: *self,
            components,
            validation: ValidationParameters {
                seed: generated.seed,
                counter: generated.counter,
            },
        })
    }
}

/// Seed and counter that reproduce a (p, q) pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationParameters {
    seed: Vec<u8>,
    counter: u32,
}

impl ValidationParameters {
    /// Domain parameter seed (N bits)
    #[must_use]
    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    /// Counter value at which p was found
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }
}

/// Generated DSA2 domain parameters
#[derive(Clone, PartialEq)]
#[must_use]
pub struct DomainParameters {
    generation: GenerationParameters,
    components: Components,
    validation: ValidationParameters,
}

impl DomainParameters {
    /// Inputs the parameters were generated from
    pub const fn generation(&self) -> &GenerationParameters {
        &self.generation
    }

    /// Bit size of p (L)
    #[must_use]
    pub const fn prime_bits(&self) -> u32 {
        self.generation.prime_bits()
    }

    /// Bit size of q (N)
    #[must_use]
    pub const fn subgroup_bits(&self) -> u32 {
        self.generation.subgroup_bits()
    }

    /// Primality certainty used for p and q
    #[must_use]
    pub const fn certainty(&self) -> u32 {
        self.generation.certainty()
    }

    /// Digest that drove the prime search
    #[must_use]
    pub const fn digest(&self) -> HashAlgorithm {
        self.generation.digest()
    }

    /// The common components, ready for key generation
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA prime p
    #[must_use]
    pub fn p(&self) -> &BigUint {
        self.components.p()
    }

    /// DSA quotient q
    #[must_use]
    pub fn q(&self) -> &BigUint {
        self.components.q()
    }

    /// DSA generator g
    #[must_use]
    pub fn g(&self) -> &BigUint {
        self.components.g()
    }

    /// Seed and counter of the search
    #[must_use]
    pub const fn validation(&self) -> &ValidationParameters {
        &self.validation
    }

    /// Unwrap the common components
    pub fn into_components(self) -> Components {
        self.components
    }

    /// Check sizes, the subgroup relation and the primality of p and q
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (p, q, g) = (self.p(), self.q(), self.g());
        let one = BigUint::one();

        p.bits() == self.prime_bits() as usize
            && q.bits() == self.subgroup_bits() as usize
            && ((p - &one) % q).is_zero()
            && *g > one
            && g < p
            && g.modpow(q, p) == one
            && is_probable_prime(q, self.certainty())
            && is_probable_prime(p, self.certainty())
    }
}

impl fmt::Debug for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainParameters")
            .field("generation", &self.generation)
            .field("p", self.p())
            .field("q", self.q())
            .field("g", self.g())
            .field("validation", &self.validation)
            .finish()
    }
}

/// Select and generate DSA2 domain parameters for `key_size` bits
///
/// Accepts 1024, 2048 and 3072. The size is checked before any entropy is
/// drawn from `rng`; anything else is an
/// [`InvalidParameter`](crate::Error::InvalidParameter) error.
pub fn select_parameters<R>(rng: &mut R, key_size: u32) -> Result<DomainParameters>
where
    R: CryptoRng + RngCore,
{
    let size = Dsa2KeySize::try_from(key_size)?;
    GenerationParameters::new(size).generate(rng)
}

/// Generate a DSA2 keypair over `parameters`
pub fn generate_key_pair<R>(rng: &mut R, parameters: &DomainParameters) -> SigningKey
where
    R: CryptoRng + RngCore,
{
    log::info!("generating {}-bit DSA2 keypair", parameters.prime_bits());
    SigningKey::generate(rng, parameters.components().clone())
}
