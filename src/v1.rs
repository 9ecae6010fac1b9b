//! Version 1 (time-based) functionality

use crate::{Node, Timestamp, Uuid, Version};

impl Uuid {
    /// Creates a version 1 UUID from its field values.
    ///
    /// Bits of `clock_seq` above the 14th are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Node, Timestamp, Uuid};
    ///
    /// let uuid = Uuid::from_fields_v1(
    ///     Timestamp::from_ticks(0x01d1_9dad_6ba7_b810),
    ///     0xb4,
    ///     Node::from_bytes([0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]),
    /// );
    /// assert_eq!(uuid, Uuid::NAMESPACE_DNS);
    /// ```
    pub const fn from_fields_v1(timestamp: Timestamp, clock_seq: u16, node: Node) -> Self {
        let t = timestamp.ticks();
        let n = node.as_bytes();
        Self::from_bytes_with_version(
            [
                (t >> 24) as u8,
                (t >> 16) as u8,
                (t >> 8) as u8,
                t as u8,
                (t >> 40) as u8,
                (t >> 32) as u8,
                (t >> 56) as u8,
                (t >> 48) as u8,
                (clock_seq >> 8) as u8,
                clock_seq as u8,
                n[0],
                n[1],
                n[2],
                n[3],
                n[4],
                n[5],
            ],
            Version::Time,
        )
    }

    /// Generates a version 1 UUID from the current time using the process-wide generator.
    ///
    /// `node` and `clock_seq` override the values held by the process-wide generator, which
    /// otherwise uses the first hardware address found (or a random multicast node) and a random
    /// clock sequence fixed for the lifetime of the process.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Node, Uuid, Version};
    ///
    /// let node = "02:00:00:00:00:01".parse::<Node>()?;
    /// let uuid = Uuid::new_v1(Some(node), Some(42))?;
    /// assert_eq!(uuid.version(), Some(Version::Time));
    /// assert_eq!(uuid.node(), Some(node));
    /// assert_eq!(uuid.clock_sequence(), Some(42));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "global_gen")]
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn new_v1(node: Option<Node>, clock_seq: Option<u16>) -> Result<Self, crate::Error> {
        use crate::generator::DEFAULT_ROLLBACK_ALLOWANCE;
        crate::global_gen::with_global_gen(|g| {
            let ticks = g.next_ticks(Timestamp::now(), DEFAULT_ROLLBACK_ALLOWANCE);
            Self::from_fields_v1(
                ticks,
                clock_seq.unwrap_or(g.clock_seq()),
                node.unwrap_or(g.node()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Node, Timestamp, Uuid, Variant, Version};

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        const MAX_UINT60: u64 = (1 << 60) - 1;
        const MAX_UINT14: u16 = (1 << 14) - 1;
        const MAX_UINT48: u64 = (1 << 48) - 1;

        let cases: &[((u64, u16, u64), &str)] = &[
            ((0, 0, 0), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, 0), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, MAX_UINT14, 0), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, MAX_UINT48), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, MAX_UINT14, MAX_UINT48),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            (
                (0x01d1_9dad_6ba7_b811, 0xb4, 0x00c0_4fd4_30c8),
                "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                (0x01e7_52a1_f3b4_958c, 0x2a, 0x0102_0304_0506),
                "f3b4958c-52a1-11e7-802a-010203040506",
            ),
        ];

        for ((ticks, clock_seq, node), text) in cases {
            let e = Uuid::from_fields_v1(
                Timestamp::from_ticks(*ticks),
                *clock_seq,
                Node::from_u64(*node),
            );
            assert_eq!(&e.to_string(), text);
            assert_eq!(e.timestamp(), Some(Timestamp::from_ticks(*ticks)));
            assert_eq!(e.clock_sequence(), Some(*clock_seq));
            assert_eq!(e.node(), Some(Node::from_u64(*node)));
        }
    }

    /// Discards clock sequence bits beyond 14
    #[test]
    fn discards_clock_sequence_bits_beyond_14() {
        let e = Uuid::from_fields_v1(Timestamp::from_ticks(0), 0xffff, Node::default());
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.clock_sequence(), Some(0x3fff));
    }

    /// Honors caller-supplied node and clock sequence
    #[cfg(feature = "global_gen")]
    #[test]
    fn honors_caller_supplied_node_and_clock_sequence() {
        let node = Node::from_bytes([0x02, 0x00, 0x5e, 0x10, 0x00, 0x01]);
        for _ in 0..1_000 {
            let e = Uuid::new_v1(Some(node), Some(0x1234)).unwrap();
            assert_eq!(e.version(), Some(Version::Time));
            assert_eq!(e.node(), Some(node));
            assert_eq!(e.clock_sequence(), Some(0x1234));
        }
    }
}
