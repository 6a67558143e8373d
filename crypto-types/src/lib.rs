//! Fixed-size cryptographic value types.
//!
//! Each type is a distinct newtype over a byte array of fixed length, so a hash can never be
//! passed where a key is expected and a buffer of the wrong length is rejected at construction.
//!
//! # Examples
//!
//! ```rust
//! use crypto_types::{Hash256, PrivateKey, Signature};
//!
//! let hash = Hash256::from_hex(&"00".repeat(32)).unwrap();
//! assert_eq!(hash, Hash256::zero());
//! assert_eq!(Signature::zero().as_bytes(), &[0u8; 64][..]);
//!
//! let key = PrivateKey::random();
//! assert_eq!(key.to_hex().len(), 64);
//! ```

#[macro_use]
pub mod bytes;
pub mod crypto;
pub mod error;
pub mod logger;

// Re-exported for use by `impl_bytes!` expansions in other crates.
pub use zeroize;

pub use crate::{
    bytes::FixedSizeByteArray,
    crypto::{
        hash::Hash256,
        shared_key::SharedKey256,
        signature::{PrivateKey, PublicKey, Signature},
    },
    error::Error,
};
