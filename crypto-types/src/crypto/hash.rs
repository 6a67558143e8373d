//! Hash type.

/// Size of a hash in bytes.
pub const HASH_SIZE: usize = 32;

impl_bytes!(Hash256, HASH_SIZE, "A 256-bit hash.");

impl Hash256 {
    /// The all-zero hash.
    pub const fn zero() -> Hash256 {
        Hash256([0; HASH_SIZE])
    }

    /// Returns true if this is the all-zero hash.
    pub fn is_zero(&self) -> bool {
        self == &Hash256::zero()
    }
}

impl Default for Hash256 {
    fn default() -> Self {
        Hash256::zero()
    }
}
