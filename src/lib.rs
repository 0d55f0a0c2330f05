//! A UUID type compatible with the Microsoft SQL Server `uniqueidentifier` column type
//!
//! ```rust
//! use mssql_uuid::{SqlValue, Uuid};
//!
//! let uuid = mssql_uuid::new_v4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! println!("{:?}", uuid.to_mssql_bytes()); // as stored by SQL Server
//!
//! let wire = SqlValue::Bytes(uuid.to_mssql_bytes().to_vec());
//! assert_eq!(Uuid::scan(&wire)?, uuid);
//! # Ok::<(), mssql_uuid::Error>(())
//! ```
//!
//! # Byte layout
//!
//! [`Uuid`] always holds the RFC 4122 byte order, in which every field is big-endian. SQL
//! Server instead stores the first three fields little-endian:
//!
//! ```text
//! canonical  6b a7 b8 10 | 9d ad | 11 d1 | 80 b4 | 00 c0 4f d4 30 c8
//! SQL Server 10 b8 a7 6b | ad 9d | d1 11 | 80 b4 | 00 c0 4f d4 30 c8
//! ```
//!
//! The two orders are translated only at the storage boundary: [`Uuid::from_mssql_bytes`],
//! [`Uuid::to_mssql_bytes`] and [`Uuid::scan`]. Values written back through
//! [`Uuid::value`] are always the 8-4-4-4-12 canonical text.
//!
//! # Crate features
//!
//! - `global_gen` (default): [`new_v4`] and [`try_new_v4`] backed by the operating system's
//!   random source.
//! - `serde` (default): `Serialize` and `Deserialize` for [`Uuid`] and [`NullUuid`], using the
//!   canonical text in human-readable formats such as JSON.
//! - `uuid`: conversions from and to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Size of a UUID in bytes.
pub const SIZE: usize = 16;

/// Size of the 8-4-4-4-12 canonical representation of UUID in bytes.
pub const CANONICAL_SIZE: usize = 36;

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Uuid, Variant};

mod mssql;

mod sql;
pub use sql::SqlValue;

mod null_uuid;
pub use null_uuid::NullUuid;

pub mod generator;
pub use generator::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_v4, try_new_v4};

mod batch;
pub use batch::batch;
