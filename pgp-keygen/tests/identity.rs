//! Identity assembly and end-to-end generation.

use pgp_keygen::{
    CompressionAlgorithm, Dsa2KeySize, ElGamalKeySize, HashAlgorithm, IdentityBundle,
    IdentityOptions, SymmetricAlgorithm, dsa2, elgamal, generate_identity,
    generate_identity_parallel, prime_table,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const IDENTITY: &str = "Alice <alice@example.com>";
const PASSPHRASE: &str = "correct horse";

fn small_bundle(cipher: &str) -> IdentityBundle {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let parameters = dsa2::select_parameters(&mut rng, 1024).unwrap();
    let dsa2_key = dsa2::generate_key_pair(&mut rng, &parameters);
    let elgamal_key =
        elgamal::generate_key_pair(&mut rng, &elgamal::build_parameters(1024).unwrap());

    IdentityBundle::assemble(
        dsa2_key,
        elgamal_key,
        IdentityOptions::new(IDENTITY, PASSPHRASE).cipher(cipher),
    )
}

#[test]
fn cipher_names_ignore_case() {
    for name in ["aes256", "AES256", "Aes256", "aEs256"] {
        assert_eq!(SymmetricAlgorithm::resolve(name), SymmetricAlgorithm::Aes256);
    }
    assert_eq!(SymmetricAlgorithm::resolve("3des"), SymmetricAlgorithm::TripleDes);
    assert_eq!(SymmetricAlgorithm::resolve("des"), SymmetricAlgorithm::Des);
    assert_eq!(SymmetricAlgorithm::resolve("CAST5"), SymmetricAlgorithm::Cast5);
    assert_eq!(SymmetricAlgorithm::resolve("idea"), SymmetricAlgorithm::Idea);
    assert_eq!(SymmetricAlgorithm::resolve("BlowFish"), SymmetricAlgorithm::Blowfish);
}

#[test]
fn unrecognized_cipher_falls_back_to_twofish() {
    for name in ["", "aes", "aes-256", "chacha20", " aes256", "TripleDES"] {
        assert_eq!(
            SymmetricAlgorithm::resolve(name),
            SymmetricAlgorithm::Twofish,
            "{name:?} should fall back"
        );
    }
    assert!(SymmetricAlgorithm::parse("chacha20").is_err());
}

#[test]
fn assembly_keeps_keys_and_metadata() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let parameters = dsa2::select_parameters(&mut rng, 1024).unwrap();
    let dsa2_key = dsa2::generate_key_pair(&mut rng, &parameters);
    let elgamal_key =
        elgamal::generate_key_pair(&mut rng, &elgamal::build_parameters(1024).unwrap());

    let options = IdentityOptions::new(IDENTITY, PASSPHRASE)
        .cipher("Blowfish")
        .armor(true)
        .preferred_hash_algorithms(vec![HashAlgorithm::Sha512, HashAlgorithm::Sha256])
        .preferred_symmetric_algorithms(vec![SymmetricAlgorithm::Twofish])
        .preferred_compression_algorithms(vec![CompressionAlgorithm::Zip]);

    let bundle = IdentityBundle::assemble(dsa2_key.clone(), elgamal_key.clone(), options);

    assert!(bundle.dsa2_key() == &dsa2_key);
    assert_eq!(bundle.elgamal_key(), &elgamal_key);
    assert_eq!(bundle.cipher(), SymmetricAlgorithm::Blowfish);
    assert_eq!(bundle.identity(), IDENTITY);
    assert_eq!(bundle.passphrase(), PASSPHRASE);
    assert!(bundle.armor());
    assert_eq!(
        bundle.preferred_hash_algorithms(),
        [HashAlgorithm::Sha512, HashAlgorithm::Sha256]
    );
    assert_eq!(
        bundle.preferred_symmetric_algorithms(),
        [SymmetricAlgorithm::Twofish]
    );
    assert_eq!(
        bundle.preferred_compression_algorithms(),
        [CompressionAlgorithm::Zip]
    );
}

#[test]
fn assembly_resolves_unknown_cipher() {
    assert_eq!(small_bundle("rot13").cipher(), SymmetricAlgorithm::Twofish);
}

#[test]
fn bundle_debug_hides_secrets() {
    let bundle = small_bundle("aes128");
    let debug = format!("{bundle:?}");

    assert!(!debug.contains(PASSPHRASE));
    assert!(!debug.contains(IDENTITY));
}

#[test]
fn dsa2_and_elgamal_2048_identity() {
    let mut rng = ChaCha8Rng::seed_from_u64(2048);
    let options = IdentityOptions::new(IDENTITY, PASSPHRASE)
        .cipher("aes256")
        .armor(true);

    let bundle = generate_identity(
        &mut rng,
        Dsa2KeySize::Dsa2048,
        ElGamalKeySize::ElGamal2048,
        options,
    )
    .expect("Failed to generate identity");

    let dsa2_components = bundle.dsa2_key().verifying_key().components();
    assert_eq!(dsa2_components.q().bits(), 256);
    assert_eq!(dsa2_components.p().bits(), 2048);

    let elgamal_parameters = bundle.elgamal_key().public_key().parameters();
    assert_eq!(
        elgamal_parameters.p().to_bytes_be(),
        prime_table::MODP_2048.as_slice()
    );
    assert!(bundle.elgamal_key().is_valid());

    assert_eq!(bundle.cipher(), SymmetricAlgorithm::Aes256);
    assert_eq!(bundle.identity(), IDENTITY);
    assert_eq!(bundle.passphrase(), PASSPHRASE);
    assert!(bundle.armor());
}

#[test]
fn parallel_identity() {
    let bundle = generate_identity_parallel(
        Dsa2KeySize::Dsa1024,
        ElGamalKeySize::ElGamal1024,
        IdentityOptions::new(IDENTITY, PASSPHRASE).cipher("idea"),
    )
    .expect("Failed to generate identity");

    assert_eq!(bundle.dsa2_key().verifying_key().components().q().bits(), 160);
    assert_eq!(
        bundle.elgamal_key().public_key().parameters().size(),
        ElGamalKeySize::ElGamal1024
    );
    assert!(bundle.elgamal_key().is_valid());
    assert_eq!(bundle.cipher(), SymmetricAlgorithm::Idea);
}
