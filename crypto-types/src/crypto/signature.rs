//! Signature types.
use lazy_static::lazy_static;
use rand::{rngs::OsRng, CryptoRng, RngCore};
use slog::debug;

use crate::logger::get_logger;

lazy_static! {
    static ref LOGGER: slog::Logger = get_logger("crypto_types/signature");
}

/// The length of a private key, in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// The length of a public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// The length of a signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

impl_bytes!(secret PrivateKey, PRIVATE_KEY_LENGTH, "A private key.");

impl PrivateKey {
    /// Generate a new private key from the operating system's secure random source.
    pub fn random() -> Self {
        Self::random_from_rng(&mut OsRng)
    }

    /// Generate a new private key using the given cryptographically secure random source.
    pub fn random_from_rng<R>(rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        let mut key = PrivateKey([0; PRIVATE_KEY_LENGTH]);
        rng.fill_bytes(&mut key.0);

        debug!(LOGGER, "Generated random private key");

        key
    }
}

impl_bytes!(PublicKey, PUBLIC_KEY_LENGTH, "A public key.");

impl From<&PublicKey> for PublicKey {
    fn from(pk: &PublicKey) -> PublicKey {
        *pk
    }
}

impl_bytes!(Signature, SIGNATURE_LENGTH, "A signature.");

impl Signature {
    /// The all-zero signature.
    pub const fn zero() -> Signature {
        Signature([0; SIGNATURE_LENGTH])
    }

    /// Returns true if this is the all-zero signature.
    pub fn is_zero(&self) -> bool {
        self == &Signature::zero()
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::zero()
    }
}
