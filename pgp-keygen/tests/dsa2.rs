//! DSA2 parameter selection and keypair generation.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use pgp_keygen::{
    Dsa2KeySize, Error, HashAlgorithm, PublicKeyAlgorithm,
    dsa2::{self, GenerationParameters},
};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fails the test as soon as any randomness is requested
struct NoEntropy;

impl RngCore for NoEntropy {
    fn next_u32(&mut self) -> u32 {
        panic!("entropy was drawn")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("entropy was drawn")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("entropy was drawn")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        panic!("entropy was drawn")
    }
}

impl CryptoRng for NoEntropy {}

#[test]
fn subgroup_size_follows_prime_size() {
    let cases = [
        (Dsa2KeySize::Dsa1024, 160),
        (Dsa2KeySize::Dsa2048, 256),
        (Dsa2KeySize::Dsa3072, 256),
    ];

    for (size, n) in cases {
        let generation = GenerationParameters::new(size);
        assert_eq!(generation.subgroup_bits(), n, "wrong N for {size}-bit p");
        assert_eq!(generation.certainty(), dsa2::CERTAINTY);
        assert_eq!(generation.digest(), HashAlgorithm::Sha256);
    }
}

#[test]
fn unsupported_sizes_are_rejected_without_entropy() {
    for bits in [0_u32, 512, 1023, 1536, 4096, 8192] {
        let err = dsa2::select_parameters(&mut NoEntropy, bits).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter {
                algorithm: PublicKeyAlgorithm::Dsa,
                requested: i64::from(bits),
                allowed: &[1024, 2048, 3072],
            }
        );
    }
}

#[test]
fn negative_size_is_rejected() {
    let err = Dsa2KeySize::try_from(-1024_i64).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidParameter {
            requested: -1024,
            ..
        }
    ));
}

#[test]
fn dsa2_1024_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(1024);
    let parameters = dsa2::select_parameters(&mut rng, 1024).expect("Failed to generate parameters");

    assert_eq!(parameters.prime_bits(), 1024);
    assert_eq!(parameters.subgroup_bits(), 160);
    assert_eq!(parameters.p().bits(), 1024);
    assert_eq!(parameters.q().bits(), 160);
    assert_eq!(parameters.validation().seed().len(), 20);
    assert!(parameters.is_valid());
}

#[test]
fn dsa2_2048_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(2048);
    let parameters = dsa2::select_parameters(&mut rng, 2048).expect("Failed to generate parameters");

    assert_eq!(parameters.subgroup_bits(), 256);
    assert_eq!(parameters.p().bits(), 2048);
    assert_eq!(parameters.q().bits(), 256);
    assert_eq!(parameters.validation().seed().len(), 32);
    assert!(parameters.is_valid());
}

#[test]
#[ignore = "3072-bit prime search is slow"]
fn dsa2_3072_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(3072);
    let parameters = dsa2::select_parameters(&mut rng, 3072).expect("Failed to generate parameters");

    assert_eq!(parameters.subgroup_bits(), 256);
    assert_eq!(parameters.p().bits(), 3072);
    assert!(parameters.is_valid());
}

#[test]
fn repeated_selection_differs_only_in_randomness() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let first = dsa2::select_parameters(&mut rng, 1024).unwrap();
    let second = dsa2::select_parameters(&mut rng, 1024).unwrap();

    assert_eq!(first.subgroup_bits(), 160);
    assert_eq!(second.subgroup_bits(), 160);
    assert_ne!(first.p(), second.p());
    assert_ne!(first.validation(), second.validation());
}

#[test]
fn same_seed_same_parameters() {
    let first = dsa2::select_parameters(&mut ChaCha8Rng::seed_from_u64(5), 1024).unwrap();
    let second = dsa2::select_parameters(&mut ChaCha8Rng::seed_from_u64(5), 1024).unwrap();

    assert_eq!(first, second);
}

#[test]
fn keypair_over_generated_parameters() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let parameters = dsa2::select_parameters(&mut rng, 1024).unwrap();
    let signing_key = dsa2::generate_key_pair(&mut rng, &parameters);
    let components = signing_key.verifying_key().components();

    assert_eq!(components, parameters.components());
    assert!(
        BigUint::zero() < *signing_key.x() && signing_key.x() < components.q(),
        "Requirement 0<x<q not met"
    );
    assert_eq!(
        *signing_key.verifying_key().y(),
        components.g().modpow(signing_key.x(), components.p()),
        "Requirement y=(g^x)%p not met"
    );
    assert_eq!(
        signing_key.verifying_key().y().modpow(components.q(), components.p()),
        BigUint::one()
    );
}
