//! UUIDv4 generator and related types.

use crate::{Error, Uuid, Variant, SIZE};

pub mod with_io;
pub mod with_rand08;


/// A trait that defines the random byte source interface for [`V4Generator`].
pub trait RandSource {
    /// Fills the whole of `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceExhausted`] if the source cannot fill `dest` completely. A
    /// partially filled buffer is a failure.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Represents a UUIDv4 generator that draws random bytes from an injected [`RandSource`].
///
/// The generator holds no state other than the random source, so a generator over a stateless
/// source such as [`rand::rngs::OsRng`] can be freely copied and shared. Inject a seeded source
/// when deterministic output is needed.
///
/// # Examples
///
/// ```rust
/// use mssql_uuid::{V4Generator, Variant};
///
/// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), 4);
/// assert_eq!(uuid.variant(), Variant::Rfc4122);
/// # Ok::<(), mssql_uuid::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random byte source used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// All 16 bytes are filled from the random source, then the version is set to 4 and the
    /// variant to [`Variant::Rfc4122`].
    ///
    /// # Errors
    ///
    /// Returns the error of the random source if it fails to fill 16 bytes.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; SIZE];
        self.rng.try_fill(&mut bytes)?;
        Ok(Uuid::from(bytes)
            .with_version(4)
            .with_variant(Variant::Rfc4122))
    }

    /// Consumes the generator and returns the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Supports operations as an iterator that produces a new UUIDv4 object for each call of
/// `next()` until the random source fails.
///
/// # Examples
///
/// ```rust
/// use mssql_uuid::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .take(4)
///     .for_each(|e| println!("{e}"));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }
}
