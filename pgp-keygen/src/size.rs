//!
//! Supported modulus sizes
//!

use crate::{Error, Result, algorithm::PublicKeyAlgorithm};
use core::fmt;

macro_rules! define_key_size {
    (
        $(#[$meta:meta])*
        $name:ident for $algorithm:expr => {
            $($(#[$variant_meta:meta])* $variant:ident = $bits:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "u32", into = "u32")
        )]
        pub enum $name {
            $(
                #[doc = concat!(stringify!($bits), "-bit prime modulus")]
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every accepted size in bits, smallest first
            pub const ALLOWED: &'static [u32] = &[$($bits),+];

            /// Bit size of the prime modulus
            #[must_use]
            pub const fn bits(self) -> u32 {
                match self {
                    $(Self::$variant => $bits,)+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = Error;

            fn try_from(bits: i64) -> Result<Self> {
                match bits {
                    $($bits => Ok(Self::$variant),)+
                    requested => Err(Error::InvalidParameter {
                        algorithm: $algorithm,
                        requested,
                        allowed: Self::ALLOWED,
                    }),
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(bits: u32) -> Result<Self> {
                Self::try_from(i64::from(bits))
            }
        }

        impl From<$name> for u32 {
            fn from(size: $name) -> u32 {
                size.bits()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
    };
}

define_key_size! {
    /// DSA2 prime sizes (L)
    ///
    /// The subgroup size N is implied: 160 bits for 1024-bit primes, 256 bits otherwise.
    Dsa2KeySize for PublicKeyAlgorithm::Dsa => {
        Dsa1024 = 1024,
        Dsa2048 = 2048,
        Dsa3072 = 3072,
    }
}

define_key_size! {
    /// ElGamal safe prime sizes, one per entry of the prime table
    ElGamalKeySize for PublicKeyAlgorithm::ElGamal => {
        ///
        /// RFC 3526 publishes no 1024-bit group. This size selects the
        /// 1536-bit group 5 modulus, see [`ElGamalKeySize::modulus_bits`].
        ElGamal1024 = 1024,
        ElGamal2048 = 2048,
        ElGamal3072 = 3072,
        ElGamal4096 = 4096,
    }
}

impl Dsa2KeySize {
    /// Bit size of the subgroup order q
    #[must_use]
    pub const fn subgroup_bits(self) -> u32 {
        match self {
            Self::Dsa1024 => 160,
            Self::Dsa2048 | Self::Dsa3072 => 256,
        }
    }
}

impl ElGamalKeySize {
    /// Bit length of the modulus in the prime table
    ///
    /// Equal to [`bits`](Self::bits) except for `ElGamal1024`, whose modulus has 1536 bits.
    #[must_use]
    pub const fn modulus_bits(self) -> u32 {
        match self {
            Self::ElGamal1024 => 1536,
            size => size.bits(),
        }
    }
}
