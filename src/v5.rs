//! Version 5 (name-based, SHA-1) functionality

use crate::{Uuid, Version};
use sha1::{Digest, Sha1};

impl Uuid {
    /// Creates a version 5 UUID from the first 16 bytes of the SHA-1 digest of `namespace`
    /// followed by `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, "www.example.com");
    /// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name.as_ref());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::from_bytes_with_version(bytes, Version::Sha1)
    }
}
