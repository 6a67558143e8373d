//! Symmetric key type.

/// Size of a shared key in bytes.
pub const SHARED_KEY_SIZE: usize = 32;

impl_bytes!(secret SharedKey256, SHARED_KEY_SIZE, "A 256-bit symmetric encryption key.");
