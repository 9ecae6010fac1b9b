//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V1Generator};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest).map_err(|err| {
            tracing::warn!(error = %err, "random number generator failed");
            Error::from(err)
        })
    }
}

impl<T: RngCore> V1Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::V1Generator;
    ///
    /// let mut g = V1Generator::with_rand08(rand::rngs::OsRng)?;
    /// println!("{}", g.generate());
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn with_rand08(rng: T) -> Result<Self, Error> {
        Self::new(Adapter(rng))
    }
}
