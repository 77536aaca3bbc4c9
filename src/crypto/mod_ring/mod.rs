//! Ring of integers modulo an odd number.

mod element;
mod ring;
mod uint_mont;

pub use self::{element::ModRingElement, ring::ModRing, uint_mont::UintMont};
