//! Prime field Diffie-Hellman for PACE (ICAO 9303-11 section 4.4).
//!
//! Session setup resolves the domain parameters with [`accept`], each side
//! creates a [`KeyPair`] with [`generate`], validates the peer's public
//! value with [`check_bytes`] and derives the shared secret with
//! [`compute`].

#[macro_use]
mod flags;
mod key_agreement;
mod named;
mod order;
mod params;
mod public_key;
mod validate;

pub use {
    self::{
        key_agreement::{compute, KeyPair, PrivateKey, SharedSecret},
        named::{lookup, GroupId},
        order::{derive_generator_order, derive_subgroup_order, duplicate_with_order, OrderDeriver},
        params::DomainParameters,
        public_key::{check, check_bytes, PublicKeyCheck},
        validate::{accept, structure_check, Leniency, ParameterCheck, ValidationPolicy},
    },
    crate::error::{Error, Result},
};
use {crate::crypto::CryptoCoreRng, ruint::aliases::U2048};

/// Integer type for all domain parameter arithmetic.
pub type DhUint = U2048;

/// Generates a validated key pair for `params`.
pub fn generate<'a>(
    params: &'a DomainParameters,
    rng: &mut dyn CryptoCoreRng,
) -> Result<KeyPair<'a>> {
    KeyPair::generate(params, rng)
}
