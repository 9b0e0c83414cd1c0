#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![doc = include_str!("../README.md")]

//!
//! # Examples
//!
//! Select DSA2 and ElGamal domain parameters, then generate the keypairs
//!
//! ```no_run
//! use pgp_keygen::{dsa2, elgamal};
//!
//! # fn main() -> pgp_keygen::Result<()> {
//! let mut rng = rand::rngs::OsRng;
//!
//! let dsa2_parameters = dsa2::select_parameters(&mut rng, 2048)?;
//! assert_eq!(dsa2_parameters.subgroup_bits(), 256);
//! let signing_key = dsa2::generate_key_pair(&mut rng, &dsa2_parameters);
//!
//! let elgamal_parameters = elgamal::build_parameters(2048)?;
//! let encryption_key = elgamal::generate_key_pair(&mut rng, &elgamal_parameters);
//! # let _ = (signing_key, encryption_key);
//! # Ok(())
//! # }
//! ```
//!
//! Generate a whole identity, running both searches in parallel
//!
//! ```no_run
//! use pgp_keygen::{
//!     Dsa2KeySize, ElGamalKeySize, IdentityOptions, SymmetricAlgorithm,
//!     generate_identity_parallel,
//! };
//!
//! # fn main() -> pgp_keygen::Result<()> {
//! let options = IdentityOptions::new("Alice <alice@example.com>", "correct horse")
//!     .cipher("aes256")
//!     .armor(true);
//!
//! let bundle = generate_identity_parallel(
//!     Dsa2KeySize::Dsa2048,
//!     ElGamalKeySize::ElGamal2048,
//!     options,
//! )?;
//! assert_eq!(bundle.cipher(), SymmetricAlgorithm::Aes256);
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod dsa2;
pub mod elgamal;
pub mod prime_table;

mod error;
mod generate;
mod identity;
mod size;

pub use crate::{
    algorithm::{CompressionAlgorithm, HashAlgorithm, PublicKeyAlgorithm, SymmetricAlgorithm},
    error::{Error, Result},
    identity::{IdentityBundle, IdentityOptions, generate_identity, generate_identity_parallel},
    size::{Dsa2KeySize, ElGamalKeySize},
};

pub use dsa;
pub use num_bigint::BigUint;
