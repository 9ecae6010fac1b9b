//! Version 3 (name-based, MD5) functionality

use crate::{Uuid, Version};
use md5::{Digest, Md5};

impl Uuid {
    /// Creates a version 3 UUID from the MD5 digest of `namespace` followed by `name`.
    ///
    /// The result depends only on the inputs, so equal pairs always produce equal UUIDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let uuid = Uuid::new_v3(&Uuid::NAMESPACE_DNS, "python.org");
    /// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    /// ```
    pub fn new_v3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Self {
        let mut hasher = Md5::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name.as_ref());
        Self::from_bytes_with_version(hasher.finalize().into(), Version::Md5)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Uuid, Variant, Version};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(Uuid, &'static str, &'static str)] {
        &[
            (
                Uuid::NAMESPACE_DNS,
                "www.example.com",
                "5df41881-3aed-3515-88a7-2f4a814cf09e",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "python.org",
                "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "example.org",
                "04738bdf-b25a-3829-a801-b21a1d25095b",
            ),
            (Uuid::NAMESPACE_DNS, "42", "5aab6e0c-b7d3-379c-92e3-2bfbb5572511"),
            (
                Uuid::NAMESPACE_URL,
                "rust-lang.org",
                "7ed45aaf-e75b-3130-8e33-ee4d9253b19f",
            ),
            (Uuid::NAMESPACE_URL, "42", "08998a0c-fcf4-34a9-b444-f2bfc15731dc"),
            (
                Uuid::NAMESPACE_OID,
                "lorem ipsum",
                "5dd8654f-76ba-3d47-bc2e-4d6d3a78cb09",
            ),
            (
                Uuid::NAMESPACE_X500,
                "example.org",
                "64606f3f-bd63-363e-b946-fca13611b6f7",
            ),
        ]
    }

    /// Generates prepared cases correctly
    #[test]
    fn generates_prepared_cases_correctly() {
        for (namespace, name, text) in prepare_cases() {
            let e = Uuid::new_v3(namespace, name);
            assert_eq!(&e.to_string(), text);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Some(Version::Md5));
        }
    }

    /// Generates identical UUIDs for identical inputs
    #[test]
    fn generates_identical_uuids_for_identical_inputs() {
        for (namespace, name, _) in prepare_cases() {
            assert_eq!(
                Uuid::new_v3(namespace, name),
                Uuid::new_v3(namespace, name.as_bytes().to_vec())
            );
        }
        assert_ne!(
            Uuid::new_v3(&Uuid::NAMESPACE_DNS, "a"),
            Uuid::new_v3(&Uuid::NAMESPACE_DNS, "b")
        );
        assert_ne!(
            Uuid::new_v3(&Uuid::NAMESPACE_DNS, "a"),
            Uuid::new_v3(&Uuid::NAMESPACE_URL, "a")
        );
    }

    /// Accepts arbitrary bytes and custom namespaces
    #[test]
    fn accepts_arbitrary_bytes_and_custom_namespaces() {
        let namespace = Uuid::new_v3(&Uuid::NAMESPACE_URL, "https://example.com/ns");
        let e = Uuid::new_v3(&namespace, [0xffu8, 0x00, 0xfe]);
        assert_eq!(e.version(), Some(Version::Md5));
        assert_ne!(e, Uuid::new_v3(&namespace, [0xffu8, 0x00]));
        assert_eq!(
            Uuid::new_v3(&Uuid::NIL, "").version(),
            Some(Version::Md5)
        );
    }
}
