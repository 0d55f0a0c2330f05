//! Storage boundary between UUIDs and values handed over by a SQL driver.

use crate::{Error, Uuid, SIZE};

/// A value read from or written to a database column by a SQL driver.
///
/// The variants mirror the kinds of values a driver can hand over. Only [`SqlValue::Bytes`]
/// and [`SqlValue::Text`] can hold a UUID.
#[derive(Clone, PartialEq, Debug)]
pub enum SqlValue {
    /// SQL `NULL`.
    Null,
    /// A binary column value.
    Bytes(Vec<u8>),
    /// A character column value.
    Text(String),
    /// An integer column value.
    Int(i64),
    /// A floating-point column value.
    Float(f64),
    /// A boolean column value.
    Bool(bool),
}

impl SqlValue {
    /// Returns the name of the value kind used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<String> for SqlValue {
    fn from(src: String) -> Self {
        Self::Text(src)
    }
}

impl From<&str> for SqlValue {
    fn from(src: &str) -> Self {
        Self::Text(src.to_owned())
    }
}

impl Uuid {
    /// Creates an object from a value read from a database column.
    ///
    /// The value is dispatched on its kind:
    ///
    /// - 16 bytes are taken as a SQL Server `uniqueidentifier` in the wire layout (see
    ///   [`Uuid::from_mssql_bytes`]).
    /// - Bytes of any other length are taken as the 8-4-4-4-12 text in ASCII.
    /// - Text is parsed as the 8-4-4-4-12 representation.
    ///
    /// Note that a 16-byte value that already holds the canonical byte order (e.g., written
    /// with [`Uuid::to_bytes`] into a generic binary column) is indistinguishable from the wire
    /// layout and is therefore scrambled by this method. Use [`Uuid::from_slice`] for such
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for `NULL` and for non-binary, non-text values, and
    /// the error of the underlying codec otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::{SqlValue, Uuid};
    ///
    /// let from_text = Uuid::scan(&SqlValue::from("6ba7b810-9dad-11d1-80b4-00c04fd430c8"))?;
    /// let from_wire = Uuid::scan(&SqlValue::Bytes(from_text.to_mssql_bytes().to_vec()))?;
    /// assert_eq!(from_text, from_wire);
    /// # Ok::<(), mssql_uuid::Error>(())
    /// ```
    pub fn scan(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Bytes(bytes) if bytes.len() == SIZE => {
                log::trace!("decoding 16-byte column value as uniqueidentifier wire layout");
                Self::from_mssql_bytes(bytes)
            }
            SqlValue::Bytes(bytes) => Ok(Self::parse_ascii(bytes)?),
            SqlValue::Text(text) => Ok(text.parse()?),
            other => Err(Error::UnsupportedType(other.kind())),
        }
    }

    /// Returns the value to be written to a database column, which is always the 8-4-4-4-12
    /// canonical text.
    pub fn value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl TryFrom<&SqlValue> for Uuid {
    type Error = Error;

    fn try_from(src: &SqlValue) -> Result<Self, Self::Error> {
        Self::scan(src)
    }
}

impl From<Uuid> for SqlValue {
    fn from(src: Uuid) -> Self {
        src.value()
    }
}
