//! Byte array type helpers.
use std::fmt;

use lazy_static::lazy_static;
use rustc_hex::{FromHex, FromHexError};
use slog::debug;
use zeroize::Zeroizing;

use crate::{error::Error, logger::get_logger};

lazy_static! {
    static ref LOGGER: slog::Logger = get_logger("crypto_types/bytes");
}

/// An immutable value holding exactly `SIZE` bytes.
///
/// Implementations are generated by [`impl_bytes!`](crate::impl_bytes), which also exposes the
/// provided methods as inherent methods so callers do not need this trait in scope.
pub trait FixedSizeByteArray: Sized + AsRef<[u8]> + fmt::UpperHex {
    /// Size of this object in bytes.
    const SIZE: usize;
    /// Name of the concrete type.
    const NAME: &'static str;

    /// Build the value from a slice, returning `None` unless it is exactly `SIZE` bytes long.
    fn from_exact_slice(data: &[u8]) -> Option<Self>;

    /// Construct from raw bytes.
    fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        match Self::from_exact_slice(data) {
            Some(value) => Ok(value),
            None => {
                let err = Error::InvalidLength {
                    type_name: Self::NAME,
                    expected: Self::SIZE,
                    actual: data.len(),
                };
                debug!(LOGGER, "Rejected byte input";
                    "type" => Self::NAME,
                    "err" => %err,
                );
                Err(err)
            }
        }
    }

    /// Construct from a hex string. Both upper and lower case digits are accepted.
    fn from_hex(s: &str) -> Result<Self, Error> {
        let data = decode_hex(s).map_err(|source| {
            debug!(LOGGER, "Rejected hex input";
                "type" => Self::NAME,
                "err" => %source,
            );
            Error::InvalidEncoding {
                type_name: Self::NAME,
                source,
            }
        })?;

        Self::from_bytes(&data)
    }

    /// Raw bytes of this value.
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }

    /// Copy of the raw bytes of this value.
    fn to_bytes(&self) -> Vec<u8> {
        self.as_ref().to_vec()
    }

    /// Uppercase hex encoding of this value, `2 * SIZE` characters long.
    fn to_hex(&self) -> String {
        format!("{:X}", self)
    }
}

/// Decode hex text. The output may hold secret material so it is wiped when dropped.
fn decode_hex(s: &str) -> Result<Zeroizing<Vec<u8>>, FromHexError> {
    // Only bare hex digits are accepted.
    if let Some((index, ch)) = s.char_indices().find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        return Err(FromHexError::InvalidHexCharacter(ch, index));
    }

    Ok(Zeroizing::new(s.from_hex::<Vec<u8>>()?))
}

/// Define a byte array-like type.
///
/// The `secret` form is for key material: the type is not `Copy`, cannot be unwrapped into a
/// bare array, and is zeroized on drop.
///
/// # Examples
///
/// ```rust,ignore
/// impl_bytes!(MyType, 32, "A 32-byte type.");
/// impl_bytes!(secret MySecret, 32, "A 32-byte secret.");
/// ```
#[macro_export]
macro_rules! impl_bytes {
    (@common $name:ident, $size:expr) => {
        impl $name {
            /// Size of this object in bytes.
            pub const SIZE: usize = $size;

            /// Size of this object in bytes.
            pub const fn len() -> usize {
                $size
            }

            /// Construct from raw bytes of exactly the right length.
            pub fn from_bytes(data: &[u8]) -> Result<Self, $crate::error::Error> {
                <Self as $crate::bytes::FixedSizeByteArray>::from_bytes(data)
            }

            /// Construct from a hex string encoding exactly the right number of bytes.
            pub fn from_hex(s: &str) -> Result<Self, $crate::error::Error> {
                <Self as $crate::bytes::FixedSizeByteArray>::from_hex(s)
            }

            /// Raw bytes of this value.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Copy of the raw bytes of this value.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            /// Uppercase hex encoding of this value.
            pub fn to_hex(&self) -> String {
                <Self as $crate::bytes::FixedSizeByteArray>::to_hex(self)
            }
        }

        impl $crate::bytes::FixedSizeByteArray for $name {
            const SIZE: usize = $size;
            const NAME: &'static str = stringify!($name);

            fn from_exact_slice(data: &[u8]) -> Option<Self> {
                <[u8; $size] as ::core::convert::TryFrom<&[u8]>>::try_from(data)
                    .ok()
                    .map($name)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.0[..].cmp(&other.0[..])
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H>(&self, state: &mut H)
            where
                H: ::core::hash::Hasher,
            {
                state.write(&self.0);
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(b: [u8; $size]) -> $name {
                $name(b)
            }
        }

        impl ::core::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::error::Error;

            fn try_from(b: &[u8]) -> Result<$name, Self::Error> {
                <Self as $crate::bytes::FixedSizeByteArray>::from_bytes(b)
            }
        }

        impl ::core::convert::TryFrom<Vec<u8>> for $name {
            type Error = $crate::error::Error;

            fn try_from(v: Vec<u8>) -> Result<$name, Self::Error> {
                let v = $crate::zeroize::Zeroizing::new(v);
                <Self as $crate::bytes::FixedSizeByteArray>::from_bytes(&v)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> Result<$name, Self::Err> {
                <Self as $crate::bytes::FixedSizeByteArray>::from_hex(s)
            }
        }

        // Formatting.

        impl ::core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                for i in &self.0[..] {
                    write!(f, "{:02X}", i)?;
                }
                Ok(())
            }
        }

        impl ::core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                for i in &self.0[..] {
                    write!(f, "{:02x}", i)?;
                }
                Ok(())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(f, "{}('{:X}')", stringify!($name), self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                ::core::fmt::UpperHex::fmt(self, f)
            }
        }
    };

    (secret $name:ident, $size:expr, $doc:expr) => {
        #[doc=$doc]
        #[derive(Clone)]
        pub struct $name([u8; $size]);

        $crate::impl_bytes!(@common $name, $size);

        impl $crate::zeroize::Zeroize for $name {
            fn zeroize(&mut self) {
                $crate::zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                $crate::zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        impl $crate::zeroize::ZeroizeOnDrop for $name {}
    };

    ($name:ident, $size:expr, $doc:expr) => {
        #[doc=$doc]
        #[derive(Clone, Copy)]
        pub struct $name([u8; $size]);

        $crate::impl_bytes!(@common $name, $size);

        impl From<$name> for [u8; $size] {
            fn from(b: $name) -> Self {
                b.0
            }
        }
    };
}
