use std::{fmt, str};

use fstr::FStr;

use crate::{Error, ParseError, CANONICAL_SIZE, SIZE};

/// Represents a Universally Unique IDentifier stored in the canonical RFC 4122 byte order.
///
/// The byte order held by this type is never ambiguous: conversion from and to the SQL Server
/// wire layout happens only at [`Uuid::from_mssql_bytes`] and [`Uuid::to_mssql_bytes`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; SIZE]);

/// UUID layout variant encoded in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Ncs,
    /// `10xx`: the layout specified by RFC 4122.
    Rfc4122,
    /// `110x`: reserved for Microsoft backward compatibility.
    Microsoft,
    /// `111x`: reserved for future definition.
    Future,
}

/// Positions of the hyphens in the 8-4-4-4-12 representation.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; SIZE]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; SIZE]);

    /// Creates an object from a 16-byte array in the canonical byte order.
    pub const fn from_bytes(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; SIZE] {
        self.0
    }

    /// Creates an object from a byte slice in the canonical byte order.
    ///
    /// No endian conversion is performed. Use [`Uuid::from_mssql_bytes`] for values read from
    /// a SQL Server `uniqueidentifier` column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice is not exactly 16 bytes long.
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; SIZE]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidLength(src.len()))
    }

    /// Same as [`Uuid::from_slice`], but returns the Nil UUID on error.
    pub fn from_slice_or_nil(src: &[u8]) -> Self {
        Self::from_slice(src).unwrap_or(Self::NIL)
    }

    /// Parses the 8-4-4-4-12 representation, returning the Nil UUID on error.
    pub fn parse_or_nil(src: &str) -> Self {
        src.parse().unwrap_or(Self::NIL)
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal representation given as ASCII bytes.
    ///
    /// Hex digits are accepted in either case. The input is checked in three stages: its
    /// length, then the four hyphens, then the hex digits of each group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::{ParseError, Uuid};
    ///
    /// let x = Uuid::parse_ascii(b"6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// assert_eq!(x.as_bytes()[..4], [0x6b, 0xa7, 0xb8, 0x10]);
    ///
    /// let err = Uuid::parse_ascii(b"6ba7b8109dad-11d1-80b4-00c04fd430c8-").unwrap_err();
    /// assert_eq!(err, ParseError::MissingHyphen(8));
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        if src.len() != CANONICAL_SIZE {
            return Err(ParseError::InvalidLength(src.len()));
        }
        if let Some(&index) = HYPHENS.iter().find(|&&i| src[i] != b'-') {
            return Err(ParseError::MissingHyphen(index));
        }

        let mut dst = [0u8; SIZE];
        let mut index = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                index += 1; // skip hyphen
            }
            *e = (decode_hex_digit(src, index)? << 4) | decode_hex_digit(src, index + 1)?;
            index += 2;
        }
        Ok(Self(dst))
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::Uuid;
    ///
    /// let x = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), mssql_uuid::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<CANONICAL_SIZE> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; CANONICAL_SIZE];
        let mut buf_iter = buffer.iter_mut();
        for (i, &e) in self.0.iter().enumerate() {
            if let Some(b) = buf_iter.next() {
                *b = DIGITS[(e >> 4) as usize];
            }
            if let Some(b) = buf_iter.next() {
                *b = DIGITS[(e & 15) as usize];
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(b) = buf_iter.next() {
                    *b = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only.
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the version number stored in the most significant four bits of byte 6.
    ///
    /// Any value is returned as is; this method does not check the variant.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the layout variant encoded in the most significant bits of byte 8.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::{Uuid, Variant};
    ///
    /// let x = Uuid::parse_or_nil("6ba7b810-9dad-11d1-c0b4-00c04fd430c8");
    /// assert_eq!(x.variant(), Variant::Microsoft);
    /// ```
    pub const fn variant(&self) -> Variant {
        let b = self.0[8];
        if b >> 7 == 0b0 {
            Variant::Ncs
        } else if b >> 6 == 0b10 {
            Variant::Rfc4122
        } else if b >> 5 == 0b110 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }

    /// Returns a copy with the version bits replaced by the lower four bits of `version`.
    pub const fn with_version(self, version: u8) -> Self {
        let mut bytes = self.0;
        bytes[6] = (bytes[6] & 0x0f) | (version << 4);
        Self(bytes)
    }

    /// Returns a copy with the variant bits replaced by the pattern of `variant`, leaving the
    /// remaining bits of byte 8 intact.
    pub const fn with_variant(self, variant: Variant) -> Self {
        let mut bytes = self.0;
        bytes[8] = match variant {
            Variant::Ncs => bytes[8] & 0x7f,
            Variant::Rfc4122 => (bytes[8] & 0x3f) | 0x80,
            Variant::Microsoft => (bytes[8] & 0x1f) | 0xc0,
            Variant::Future => (bytes[8] & 0x1f) | 0xe0,
        };
        Self(bytes)
    }

    /// Returns true if this is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }
}

/// Decodes the ASCII hex digit at `index`.
fn decode_hex_digit(src: &[u8], index: usize) -> Result<u8, ParseError> {
    let byte = src[index];
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ParseError::InvalidHexDigit { index, byte }),
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_ascii(src.as_bytes())
    }
}

impl From<Uuid> for [u8; SIZE] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; SIZE]> for Uuid {
    fn from(src: [u8; SIZE]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    /// Serializes the canonical string in human-readable formats such as JSON, and the 16
    /// canonical-order bytes otherwise.
    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
