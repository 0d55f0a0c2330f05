//! UUID that may be NULL in the database.

use crate::{Error, SqlValue, Uuid};

/// A UUID value that can be NULL in the database.
///
/// An invalid (`valid == false`) value stands for SQL `NULL` or JSON `null` and is distinct
/// from a valid Nil UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NullUuid {
    /// The UUID value, which is the Nil UUID when not valid.
    pub uuid: Uuid,

    /// Whether the value is present.
    pub valid: bool,
}

impl NullUuid {
    /// The NULL value.
    pub const NULL: Self = Self {
        uuid: Uuid::NIL,
        valid: false,
    };

    /// Creates a valid value.
    pub const fn new(uuid: Uuid) -> Self {
        Self { uuid, valid: true }
    }

    /// Returns the UUID if valid.
    pub const fn get(&self) -> Option<Uuid> {
        if self.valid {
            Some(self.uuid)
        } else {
            None
        }
    }

    /// Creates an object from a value read from a database column.
    ///
    /// `NULL` yields [`NullUuid::NULL`]; any other value is delegated to [`Uuid::scan`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::{NullUuid, SqlValue, Uuid};
    ///
    /// assert_eq!(NullUuid::scan(&SqlValue::Null)?, NullUuid::NULL);
    ///
    /// let x = NullUuid::scan(&SqlValue::from("6ba7b810-9dad-11d1-80b4-00c04fd430c8"))?;
    /// assert!(x.valid);
    /// # Ok::<(), mssql_uuid::Error>(())
    /// ```
    pub fn scan(src: &SqlValue) -> Result<Self, Error> {
        match src {
            SqlValue::Null => Ok(Self::NULL),
            _ => Uuid::scan(src).map(Self::new),
        }
    }

    /// Returns the value to be written to a database column: `NULL` if not valid, or the
    /// 8-4-4-4-12 canonical text otherwise.
    pub fn value(&self) -> SqlValue {
        match self.get() {
            Some(uuid) => uuid.value(),
            None => SqlValue::Null,
        }
    }
}

impl From<Uuid> for NullUuid {
    fn from(src: Uuid) -> Self {
        Self::new(src)
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or(Self::NULL, Self::new)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(src: NullUuid) -> Self {
        src.get()
    }
}

impl TryFrom<&SqlValue> for NullUuid {
    type Error = Error;

    fn try_from(src: &SqlValue) -> Result<Self, Self::Error> {
        Self::scan(src)
    }
}

impl From<NullUuid> for SqlValue {
    fn from(src: NullUuid) -> Self {
        src.value()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::NullUuid;
    use crate::{Uuid, CANONICAL_SIZE};
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    /// Serializes `None` if not valid, or the inner [`Uuid`] otherwise.
    impl serde::Serialize for NullUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.get() {
                Some(uuid) => serializer.serialize_some(&uuid),
                None => serializer.serialize_none(),
            }
        }
    }

    /// Deserializes `null` and strings shorter than 36 characters as [`NullUuid::NULL`].
    impl<'de> serde::Deserialize<'de> for NullUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_option(OptionVisitor)
        }
    }

    struct OptionVisitor;

    impl<'de> de::Visitor<'de> for OptionVisitor {
        type Value = NullUuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(NullUuid::NULL)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(NullUuid::NULL)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(ValueVisitor)
            } else {
                deserializer.deserialize_bytes(ValueVisitor)
            }
        }
    }

    struct ValueVisitor;

    impl<'de> de::Visitor<'de> for ValueVisitor {
        type Value = NullUuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            if value.len() < CANONICAL_SIZE {
                return Ok(NullUuid::NULL);
            }
            value
                .parse::<Uuid>()
                .map(NullUuid::new)
                .map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value)
                .map(NullUuid::new)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::NullUuid;
    use crate::{Error, SqlValue, Uuid};

    const TEXT: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

    /// Scans null as invalid Nil UUID
    #[test]
    fn scans_null_as_invalid_nil_uuid() {
        let e = NullUuid::scan(&SqlValue::Null).unwrap();
        assert!(!e.valid);
        assert_eq!(e.uuid, Uuid::NIL);
        assert_eq!(e.get(), None);
    }

    /// Delegates non-null values to UUID scan
    #[test]
    fn delegates_non_null_values_to_uuid_scan() {
        let wire = TEXT.parse::<Uuid>().unwrap().to_mssql_bytes();
        for src in [SqlValue::from(TEXT), SqlValue::from(wire.to_vec())] {
            let e = NullUuid::try_from(&src).unwrap();
            assert!(e.valid);
            assert_eq!(e.uuid.to_string(), TEXT);
        }

        assert!(matches!(
            NullUuid::scan(&SqlValue::Int(1)),
            Err(Error::UnsupportedType("int"))
        ));
        assert!(matches!(
            NullUuid::scan(&SqlValue::from("not a uuid")),
            Err(Error::Format(_))
        ));
    }

    /// Writes null or canonical text
    #[test]
    fn writes_null_or_canonical_text() {
        assert_eq!(NullUuid::NULL.value(), SqlValue::Null);
        assert_eq!(
            NullUuid::new(TEXT.parse().unwrap()).value(),
            SqlValue::Text(TEXT.to_owned())
        );
        assert_eq!(
            SqlValue::from(NullUuid::new(Uuid::NIL)),
            SqlValue::Text("00000000-0000-0000-0000-000000000000".to_owned())
        );
    }

    /// Distinguishes null from Nil UUID
    #[test]
    fn distinguishes_null_from_nil_uuid() {
        assert_ne!(NullUuid::NULL, NullUuid::new(Uuid::NIL));
        assert_eq!(NullUuid::default(), NullUuid::NULL);
        assert_eq!(NullUuid::from(None), NullUuid::NULL);
        assert_eq!(NullUuid::from(Some(Uuid::NIL)), NullUuid::new(Uuid::NIL));
        assert_eq!(Option::<Uuid>::from(NullUuid::from(Uuid::MAX)), Some(Uuid::MAX));
    }
}
