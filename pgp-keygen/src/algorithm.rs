//!
//! OpenPGP algorithm identifiers (RFC 4880 § 9)
//!

use crate::{Error, Result};
use core::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Public key algorithms produced by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum PublicKeyAlgorithm {
    /// DSA signing key (FIPS 186-4 sizes)
    #[strum(serialize = "DSA2")]
    Dsa = 17,

    /// ElGamal encrypt-only key
    #[strum(serialize = "ElGamal")]
    ElGamal = 16,
}

impl PublicKeyAlgorithm {
    /// OpenPGP algorithm identifier
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// Generates the shared name handling of the preference enums
macro_rules! impl_algorithm_names {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// OpenPGP algorithm identifier
            #[must_use]
            pub const fn id(self) -> u8 {
                self as u8
            }

            #[doc = concat!("Parse a ", $kind, " algorithm name, ignoring ASCII case")]
            pub fn parse(name: &str) -> Result<Self> {
                Self::from_str(name).map_err(|_| Error::UnknownAlgorithm {
                    kind: $kind,
                    name: name.into(),
                })
            }

            #[doc = concat!("Parse an ordered list of ", $kind, " algorithm names")]
            ///
            /// Fails on the first unrecognized name.
            pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>> {
                names.iter().map(|name| Self::parse(name.as_ref())).collect()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(name: String) -> Result<Self> {
                Self::parse(&name)
            }
        }
    };
}

/// Hash algorithms
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum HashAlgorithm {
    /// MD5
    Md5 = 1,
    /// SHA-1
    Sha1 = 2,
    /// RIPEMD-160
    Ripemd160 = 3,
    /// SHA-256
    Sha256 = 8,
    /// SHA-384
    Sha384 = 9,
    /// SHA-512
    Sha512 = 10,
    /// SHA-224
    Sha224 = 11,
}

impl_algorithm_names!(HashAlgorithm, "hash");

/// Symmetric ciphers used to protect secret key material
///
/// The nine recognized cipher names are `Aes256`, `Aes192`, `Aes128`,
/// `Blowfish`, `Twofish`, `Cast5`, `Idea`, `DES` and `3DES`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum SymmetricAlgorithm {
    /// IDEA
    Idea = 1,
    /// Triple-DES (DES-EDE, 168 bit key)
    #[strum(serialize = "3DES")]
    TripleDes = 2,
    /// CAST5 (128 bit key)
    Cast5 = 3,
    /// Blowfish (128 bit key, 16 rounds)
    Blowfish = 4,
    /// Single DES
    #[strum(serialize = "DES")]
    Des = 6,
    /// AES with 128-bit key
    Aes128 = 7,
    /// AES with 192-bit key
    Aes192 = 8,
    /// AES with 256-bit key
    Aes256 = 9,
    /// Twofish with 256-bit key
    Twofish = 10,
}

impl_algorithm_names!(SymmetricAlgorithm, "symmetric");

impl SymmetricAlgorithm {
    /// Cipher selected when a cipher name is not recognized
    pub const FALLBACK: Self = Self::Twofish;

    /// Resolve a free-form cipher name.
    ///
    /// Matching ignores ASCII case. Unrecognized names resolve to
    /// [`SymmetricAlgorithm::FALLBACK`] instead of failing, so callers that need
    /// strict validation should use [`SymmetricAlgorithm::parse`] first.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match Self::from_str(name) {
            Ok(cipher) => cipher,
            Err(_) => {
                log::warn!("unrecognized cipher {name:?}, falling back to {}", Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }
}

/// Compression algorithms
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum CompressionAlgorithm {
    /// No compression
    Uncompressed = 0,
    /// ZIP (RFC 1951)
    Zip = 1,
    /// ZLIB (RFC 1950)
    Zlib = 2,
    /// BZip2
    Bzip2 = 3,
}

impl_algorithm_names!(CompressionAlgorithm, "compression");
