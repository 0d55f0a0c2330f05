//! Integration with [`std::io::Read`] byte streams.

use std::io;

use super::{RandSource, V4Generator};
use crate::Error;

/// An adapter that implements [`RandSource`] for [`io::Read`] types.
///
/// A stream that ends before supplying all the bytes requested yields
/// [`Error::SourceExhausted`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`io::Read`] type. */ pub T);

impl<T: io::Read> RandSource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.read_exact(dest).map_err(Error::source_exhausted)
    }
}

impl<T: io::Read> V4Generator<Adapter<T>> {
    /// Creates a generator object that reads random bytes from a byte stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::V4Generator;
    ///
    /// let mut g = V4Generator::with_reader(&[0xffu8; 20][..]);
    /// assert_eq!(g.generate()?.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// assert!(g.generate().is_err());
    /// # Ok::<(), mssql_uuid::Error>(())
    /// ```
    pub const fn with_reader(reader: T) -> Self {
        Self::new(Adapter(reader))
    }
}
