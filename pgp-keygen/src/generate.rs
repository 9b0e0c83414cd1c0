use num_bigint::BigUint;

mod components;
mod keypair;

pub(crate) use self::components::{common as common_components, is_probable_prime};
pub(crate) use self::keypair::elgamal as elgamal_keypair;

/// Miller-Rabin rounds needed to push the error probability below 2^-certainty
#[inline]
pub(crate) const fn miller_rabin_rounds(certainty: u32) -> usize {
    certainty.div_ceil(2) as usize
}

/// Big-endian bytes of `value`, left padded with zeros to `len` bytes
fn to_fixed_be_bytes(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut padded = vec![0; len.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    padded
}

/// Returns a `BigUint` with the value 2
#[inline]
pub(crate) fn two() -> BigUint {
    BigUint::from(2_u8)
}
