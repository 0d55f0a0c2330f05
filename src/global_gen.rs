//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use rand::rngs::OsRng;

use crate::{generator::with_rand08, Error, Uuid, V4Generator};

/// The process-wide default generator.
///
/// [`OsRng`] holds no state, so the generator is shared without locking and is safe to use
/// from any number of threads.
static GLOBAL_GEN: V4Generator<with_rand08::Adapter<OsRng>> = V4Generator::with_rand08(OsRng);

/// Generates a UUIDv4 object from the operating system's random source.
///
/// # Errors
///
/// Returns [`Error::SourceExhausted`] if the operating system fails to supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = mssql_uuid::try_new_v4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), mssql_uuid::Error>(())
/// ```
pub fn try_new_v4() -> Result<Uuid, Error> {
    GLOBAL_GEN.clone().generate()
}

/// Generates a UUIDv4 object from the operating system's random source.
///
/// This function returns the Nil UUID, instead of an error, if the operating system fails to
/// supply random bytes. Use [`try_new_v4`] or a [`V4Generator`] to handle the error.
///
/// # Examples
///
/// ```rust
/// let uuid = mssql_uuid::new_v4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let uuid_string: String = mssql_uuid::new_v4().to_string();
/// ```
pub fn new_v4() -> Uuid {
    nil_on_error(try_new_v4())
}

/// Collapses a generation error into the Nil UUID.
fn nil_on_error(result: Result<Uuid, Error>) -> Uuid {
    result.unwrap_or_else(|err| {
        log::warn!("could not generate UUIDv4, returning Nil UUID: {err}");
        Uuid::NIL
    })
}
