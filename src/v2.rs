//! Version 2 (DCE security) functionality
//!
//! Only the layout is implemented: the caller supplies an 8-bit local identifier, and no POSIX
//! user or group lookup takes place.

use crate::{Node, Timestamp, Uuid, Version};

/// The local domain of a DCE security UUID, stored in `clock_seq_low`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Domain {
    /// POSIX user ID domain.
    Person = 0,

    /// POSIX group ID domain.
    Group = 1,

    /// Organization domain.
    Org = 2,
}

impl Uuid {
    /// Creates a version 2 UUID from its field values.
    ///
    /// The layout is that of version 1 except that the low byte of `time_low` holds `local_id`
    /// and `clock_seq_low` holds `domain`; the lowest 8 bits of `timestamp` and of `clock_seq`
    /// are therefore lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Domain, Node, Timestamp, Uuid};
    ///
    /// let uuid = Uuid::from_fields_v2(
    ///     Domain::Person,
    ///     0xe8,
    ///     Timestamp::from_ticks(0x01d1_9dad_6ba7_b810),
    ///     0xb4,
    ///     Node::from_u64(0x00c0_4fd4_30c8),
    /// );
    /// assert_eq!(uuid.to_string(), "6ba7b8e8-9dad-21d1-8000-00c04fd430c8");
    /// ```
    pub const fn from_fields_v2(
        domain: Domain,
        local_id: u8,
        timestamp: Timestamp,
        clock_seq: u16,
        node: Node,
    ) -> Self {
        let mut bytes = Self::from_fields_v1(timestamp, clock_seq, node).into_bytes();
        bytes[3] = local_id;
        bytes[9] = domain as u8;
        Self::from_bytes_with_version(bytes, Version::Dce)
    }

    /// Generates a version 2 UUID from the current time using the process-wide generator.
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn new_v2(domain: Domain, local_id: u8) -> Result<Self, crate::Error> {
        use crate::generator::DEFAULT_ROLLBACK_ALLOWANCE;
        crate::global_gen::with_global_gen(|g| {
            let ticks = g.next_ticks(Timestamp::now(), DEFAULT_ROLLBACK_ALLOWANCE);
            Self::from_fields_v2(domain, local_id, ticks, g.clock_seq(), g.node())
        })
    }
}
