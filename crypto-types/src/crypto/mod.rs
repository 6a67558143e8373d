//! Cryptographic primitives.

pub mod hash;
pub mod shared_key;
pub mod signature;
