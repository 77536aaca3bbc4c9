//! Diffie-Hellman domain parameters, RFC 2631 public key validation and key
//! agreement for the PACE protocol used by electronic travel documents.
//!
//! ```no_run
//! use pace_dh::dh::{self, GroupId, ValidationPolicy};
//!
//! # fn main() -> pace_dh::Result<()> {
//! let rng = &mut rand::thread_rng();
//! let params = dh::accept(None, GroupId::Modp3, &ValidationPolicy::default())?;
//! let ours = dh::generate(&params, rng)?;
//! let theirs = dh::generate(&params, rng)?;
//!
//! let peer = theirs.public_key_bytes();
//! assert!(dh::check_bytes(&params, &peer).is_empty());
//! let secret = ours.compute(&peer)?;
//! assert_eq!(secret.len(), params.byte_len());
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod dh;
mod error;

pub use self::error::{Error, Result};
