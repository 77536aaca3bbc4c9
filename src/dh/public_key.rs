//! RFC 2631 section 2.1.5 public key validation.

use {
    super::{DhUint, DomainParameters},
    crate::crypto::codec::{BsiTr031111Codec, Codec},
};

flags! {
    /// Findings of public key validation. Empty means valid.
    pub struct PublicKeyCheck(u8) {
        /// Smaller than 2.
        const TOO_SMALL = 0x01;
        /// Larger than `p - 2`.
        const TOO_LARGE = 0x02;
        /// `y^q mod p != 1`.
        const NOT_IN_SUBGROUP = 0x04;
    }
}

/// Validates a public value `y` against the domain parameters.
///
/// The subgroup test only runs when `q` is known.
#[must_use]
pub fn check(params: &DomainParameters, candidate: DhUint) -> PublicKeyCheck {
    let mut check = PublicKeyCheck::EMPTY;
    if candidate < DhUint::from(2_u64) {
        check |= PublicKeyCheck::TOO_SMALL;
    }
    if candidate > params.modulus() - DhUint::from(2_u64) {
        check |= PublicKeyCheck::TOO_LARGE;
    }
    if let Some(order) = params.order() {
        let power = params.field().element(candidate).pow_vartime(order);
        if !bool::from(power.is_one()) {
            check |= PublicKeyCheck::NOT_IN_SUBGROUP;
        }
    }
    check
}

/// Validates a big-endian encoded public value.
///
/// Values wider than the arithmetic capacity are reported as too large.
#[must_use]
pub fn check_bytes(params: &DomainParameters, candidate: &[u8]) -> PublicKeyCheck {
    let mut buffer = candidate;
    match BsiTr031111Codec::with_length(candidate.len()).decode(&mut buffer, ()) {
        Ok(value) => check(params, value),
        Err(_) => PublicKeyCheck::TOO_LARGE,
    }
}
