//! Version 4 (random) functionality

use crate::{Uuid, Version};

impl Uuid {
    /// Creates a version 4 UUID from externally generated random bytes.
    ///
    /// The caller is responsible for drawing `bytes` from a cryptographically secure source.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self::from_bytes_with_version(bytes, Version::Random)
    }

    /// Generates a version 4 UUID.
    ///
    /// Random bytes come from the process-wide ChaCha12 generator, which is seeded and
    /// periodically reseeded by the operating system. Failure of the operating system source is
    /// reported as [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let uuid = Uuid::new_v4()?;
    /// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
    /// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn new_v4() -> Result<Self, crate::Error> {
        crate::global_gen::with_global_gen(|g| g.generate_v4())?
    }
}
