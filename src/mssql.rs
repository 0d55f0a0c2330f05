//! Conversion between the canonical byte order and the SQL Server `uniqueidentifier` layout.
//!
//! SQL Server stores the first three fields of a UUID in little-endian order and the last two
//! in big-endian order:
//!
//! ```text
//! bytes   0..4     4..6     6..8     8..10    10..16
//! field   A (LE)   B (LE)   C (LE)   D (BE)   E+F (BE)
//! ```
//!
//! so `6ba7b810-9dad-11d1-80b4-00c04fd430c8` travels over the wire as
//! `10 b8 a7 6b ad 9d d1 11 80 b4 00 c0 4f d4 30 c8`.

use crate::{Error, Uuid, SIZE};

impl Uuid {
    /// Creates an object from 16 bytes fetched from a SQL Server `uniqueidentifier` column.
    ///
    /// The fields are decoded according to their wire endianness and reassembled through the
    /// 8-4-4-4-12 text form, so that the text parser stays the only place that writes the
    /// canonical byte order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `data` is not exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::Uuid;
    ///
    /// let wire = [
    ///     0x10, 0xb8, 0xa7, 0x6b, 0xad, 0x9d, 0xd1, 0x11,
    ///     0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
    /// ];
    /// let uuid = Uuid::from_mssql_bytes(&wire)?;
    /// assert_eq!(uuid.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(uuid.to_mssql_bytes(), wire);
    /// # Ok::<(), mssql_uuid::Error>(())
    /// ```
    pub fn from_mssql_bytes(data: &[u8]) -> Result<Self, Error> {
        let data = <&[u8; SIZE]>::try_from(data).map_err(|_| Error::InvalidLength(data.len()))?;

        let a = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let b = u16::from_le_bytes([data[4], data[5]]);
        let c = u16::from_le_bytes([data[6], data[7]]);

        let d = u16::from_be_bytes([data[8], data[9]]);
        let e = u16::from_be_bytes([data[10], data[11]]);
        let f = u32::from_be_bytes([data[12], data[13], data[14], data[15]]);

        let text = format!("{a:08x}-{b:04x}-{c:04x}-{d:04x}-{e:04x}{f:08x}");
        Ok(text.parse()?)
    }

    /// Returns the 16 bytes to be stored in a SQL Server `uniqueidentifier` column.
    ///
    /// This is the inverse of [`Uuid::from_mssql_bytes`].
    pub const fn to_mssql_bytes(&self) -> [u8; SIZE] {
        let s = self.as_bytes();
        [
            s[3], s[2], s[1], s[0], // field A
            s[5], s[4], // field B
            s[7], s[6], // field C
            s[8], s[9], s[10], s[11], s[12], s[13], s[14], s[15],
        ]
    }
}
