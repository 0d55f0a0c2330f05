//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V4Generator};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(Error::source_exhausted)
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mssql_uuid::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), mssql_uuid::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
