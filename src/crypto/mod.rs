//! Implements the required arithmetic.
//!
//! Integer encodings follow TR-03111.

pub mod codec;
pub mod mod_ring;
mod primality;

pub use self::primality::{Primality, Rounds};
use rand::{CryptoRng, RngCore};

/// Object safe cryptographically secure random number generator.
pub trait CryptoCoreRng: CryptoRng + RngCore {}

impl<T> CryptoCoreRng for T where T: CryptoRng + RngCore {}
