//!
//! Assembly of the DSA2 + ElGamal identity
//!

use crate::{
    algorithm::{CompressionAlgorithm, HashAlgorithm, SymmetricAlgorithm},
    dsa2, elgamal,
    size::{Dsa2KeySize, ElGamalKeySize},
};
use core::fmt;
use dsa::SigningKey;
use rand::{CryptoRng, RngCore, rngs::OsRng};
use std::{panic, thread};
use zeroize::Zeroizing;

/// Caller-supplied metadata for an identity
///
/// None of these values influence key generation; they describe how the
/// packet encoder should later protect and advertise the keys.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct IdentityOptions {
    /// User ID, e.g. `Alice <alice@example.com>`
    pub identity: String,

    /// Passphrase for the secret keys, wiped on drop and never serialized
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub passphrase: Zeroizing<String>,

    /// Free-form cipher name, resolved with [`SymmetricAlgorithm::resolve`]
    pub cipher: String,

    /// Whether the encoder should ASCII-armor its output
    pub armor: bool,

    /// Preferred hash algorithms, most preferred first
    pub preferred_hash_algorithms: Vec<HashAlgorithm>,

    /// Preferred symmetric algorithms, most preferred first
    pub preferred_symmetric_algorithms: Vec<SymmetricAlgorithm>,

    /// Preferred compression algorithms, most preferred first
    pub preferred_compression_algorithms: Vec<CompressionAlgorithm>,
}

impl IdentityOptions {
    /// Options for `identity` protected by `passphrase`, with default preferences
    pub fn new(identity: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            passphrase: Zeroizing::new(passphrase.into()),
            ..Self::default()
        }
    }

    /// Set the cipher name
    #[must_use]
    pub fn cipher(mut self, name: impl Into<String>) -> Self {
        self.cipher = name.into();
        self
    }

    /// Set the armor flag
    #[must_use]
    pub fn armor(mut self, armor: bool) -> Self {
        self.armor = armor;
        self
    }

    /// Replace the preferred hash algorithms
    #[must_use]
    pub fn preferred_hash_algorithms(mut self, algorithms: Vec<HashAlgorithm>) -> Self {
        self.preferred_hash_algorithms = algorithms;
        self
    }

    /// Replace the preferred symmetric algorithms
    #[must_use]
    pub fn preferred_symmetric_algorithms(mut self, algorithms: Vec<SymmetricAlgorithm>) -> Self {
        self.preferred_symmetric_algorithms = algorithms;
        self
    }

    /// Replace the preferred compression algorithms
    #[must_use]
    pub fn preferred_compression_algorithms(
        mut self,
        algorithms: Vec<CompressionAlgorithm>,
    ) -> Self {
        self.preferred_compression_algorithms = algorithms;
        self
    }
}

impl Default for IdentityOptions {
    fn default() -> Self {
        Self {
            identity: String::new(),
            passphrase: Zeroizing::new(String::new()),
            cipher: SymmetricAlgorithm::Aes256.to_string(),
            armor: false,
            preferred_hash_algorithms: vec![
                HashAlgorithm::Sha256,
                HashAlgorithm::Sha384,
                HashAlgorithm::Sha512,
                HashAlgorithm::Sha224,
                HashAlgorithm::Sha1,
            ],
            preferred_symmetric_algorithms: vec![
                SymmetricAlgorithm::Aes256,
                SymmetricAlgorithm::Aes192,
                SymmetricAlgorithm::Aes128,
                SymmetricAlgorithm::Cast5,
                SymmetricAlgorithm::TripleDes,
            ],
            preferred_compression_algorithms: vec![
                CompressionAlgorithm::Zlib,
                CompressionAlgorithm::Bzip2,
                CompressionAlgorithm::Zip,
                CompressionAlgorithm::Uncompressed,
            ],
        }
    }
}

impl fmt::Debug for IdentityOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityOptions")
            .field("identity", &self.identity)
            .field("passphrase", &"<redacted>")
            .field("cipher", &self.cipher)
            .field("armor", &self.armor)
            .field("preferred_hash_algorithms", &self.preferred_hash_algorithms)
            .field(
                "preferred_symmetric_algorithms",
                &self.preferred_symmetric_algorithms,
            )
            .field(
                "preferred_compression_algorithms",
                &self.preferred_compression_algorithms,
            )
            .finish()
    }
}

/// A DSA2 signing key and an ElGamal encryption key bound to one identity
///
/// Immutable once assembled. This is the input of the packet encoder that
/// writes the transferable key; the passphrase is wiped when the bundle drops.
#[derive(Clone)]
#[must_use]
pub struct IdentityBundle {
    dsa2_key: SigningKey,
    elgamal_key: elgamal::PrivateKey,
    cipher: SymmetricAlgorithm,
    identity: String,
    passphrase: Zeroizing<String>,
    armor: bool,
    preferred_hash_algorithms: Vec<HashAlgorithm>,
    preferred_symmetric_algorithms: Vec<SymmetricAlgorithm>,
    preferred_compression_algorithms: Vec<CompressionAlgorithm>,
}

opaque_debug::implement!(IdentityBundle);

impl IdentityBundle {
    /// Bind both keypairs to the identity described by `options`
    ///
    /// The cipher name is resolved leniently: an unrecognized name selects
    /// [`SymmetricAlgorithm::FALLBACK`] rather than failing.
    pub fn assemble(
        dsa2_key: SigningKey,
        elgamal_key: elgamal::PrivateKey,
        options: IdentityOptions,
    ) -> Self {
        let cipher = SymmetricAlgorithm::resolve(&options.cipher);
        log::debug!(
            "assembling identity {:?} with secret key cipher {cipher}",
            options.identity
        );

        Self {
            dsa2_key,
            elgamal_key,
            cipher,
            identity: options.identity,
            passphrase: options.passphrase,
            armor: options.armor,
            preferred_hash_algorithms: options.preferred_hash_algorithms,
            preferred_symmetric_algorithms: options.preferred_symmetric_algorithms,
            preferred_compression_algorithms: options.preferred_compression_algorithms,
        }
    }

    /// DSA2 signing keypair
    pub const fn dsa2_key(&self) -> &SigningKey {
        &self.dsa2_key
    }

    /// ElGamal encryption keypair
    pub const fn elgamal_key(&self) -> &elgamal::PrivateKey {
        &self.elgamal_key
    }

    /// Resolved cipher for protecting the secret keys
    #[must_use]
    pub const fn cipher(&self) -> SymmetricAlgorithm {
        self.cipher
    }

    /// User ID
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Passphrase for the secret keys
    #[must_use]
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Whether the output should be ASCII-armored
    #[must_use]
    pub const fn armor(&self) -> bool {
        self.armor
    }

    /// Preferred hash algorithms, most preferred first
    #[must_use]
    pub fn preferred_hash_algorithms(&self) -> &[HashAlgorithm] {
        &self.preferred_hash_algorithms
    }

    /// Preferred symmetric algorithms, most preferred first
    #[must_use]
    pub fn preferred_symmetric_algorithms(&self) -> &[SymmetricAlgorithm] {
        &self.preferred_symmetric_algorithms
    }

    /// Preferred compression algorithms, most preferred first
    #[must_use]
    pub fn preferred_compression_algorithms(&self) -> &[CompressionAlgorithm] {
        &self.preferred_compression_algorithms
    }
}

/// Generate both keypairs with `rng` and assemble them into an identity
///
/// DSA2 parameters are generated first, then the DSA2 keypair, then the
/// ElGamal keypair, all on the calling thread.
pub fn generate_identity<R>(
    rng: &mut R,
    dsa2_size: Dsa2KeySize,
    elgamal_size: ElGamalKeySize,
    options: IdentityOptions,
) -> crate::Result<IdentityBundle>
where
    R: CryptoRng + RngCore,
{
    let dsa2_key = generate_dsa2_key(rng, dsa2_size)?;
    let elgamal_key =
        elgamal::generate_key_pair(rng, &elgamal::Parameters::new(elgamal_size));

    Ok(IdentityBundle::assemble(dsa2_key, elgamal_key, options))
}

/// Like [`generate_identity`], with the two keypairs generated on separate threads
///
/// Each thread draws from its own [`OsRng`]. Both threads are joined before
/// assembly; a panic on either is resumed on the calling thread.
pub fn generate_identity_parallel(
    dsa2_size: Dsa2KeySize,
    elgamal_size: ElGamalKeySize,
    options: IdentityOptions,
) -> crate::Result<IdentityBundle> {
    let (dsa2_key, elgamal_key) = thread::scope(|scope| {
        let dsa2 = scope.spawn(move || generate_dsa2_key(&mut OsRng, dsa2_size));
        let elgamal = scope.spawn(move || {
            elgamal::generate_key_pair(&mut OsRng, &elgamal::Parameters::new(elgamal_size))
        });

        let elgamal_key = elgamal.join().unwrap_or_else(|e| panic::resume_unwind(e));
        let dsa2_key = dsa2.join().unwrap_or_else(|e| panic::resume_unwind(e));
        (dsa2_key, elgamal_key)
    });

    Ok(IdentityBundle::assemble(dsa2_key?, elgamal_key, options))
}

fn generate_dsa2_key<R>(rng: &mut R, size: Dsa2KeySize) -> crate::Result<SigningKey>
where
    R: CryptoRng + RngCore,
{
    let parameters = dsa2::GenerationParameters::new(size).generate(rng)?;
    Ok(dsa2::generate_key_pair(rng, &parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_passphrase() {
        let options = IdentityOptions::new("Alice <alice@example.com>", "correct horse");
        let debug = format!("{options:?}");

        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("correct horse"));
    }

    #[test]
    fn builder_sets_metadata() {
        let options = IdentityOptions::new("bob", "pw")
            .cipher("cast5")
            .armor(true)
            .preferred_compression_algorithms(vec![CompressionAlgorithm::Uncompressed]);

        assert_eq!(options.cipher, "cast5");
        assert!(options.armor);
        assert_eq!(
            options.preferred_compression_algorithms,
            [CompressionAlgorithm::Uncompressed]
        );
        assert_eq!(options.preferred_hash_algorithms[0], HashAlgorithm::Sha256);
    }
}
