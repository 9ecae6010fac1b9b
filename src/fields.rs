//! Field, variant, and version accessors
//!
//! The accessors below slice the 16-byte value according to the RFC 4122 layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |         time_hi_and_version   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::{Node, Timestamp, Uuid};

/// The layout family of a UUID, encoded in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs,

    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,

    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft,

    /// `111`: reserved for future definition.
    Future,
}

/// The generation algorithm of an RFC 4122 UUID, encoded in the most significant nibble of
/// byte 6.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Version 1: Gregorian timestamp, clock sequence, and node.
    Time = 1,

    /// Version 2: DCE security.
    Dce = 2,

    /// Version 3: name-based with MD5.
    Md5 = 3,

    /// Version 4: random.
    Random = 4,

    /// Version 5: name-based with SHA-1.
    Sha1 = 5,
}

impl Version {
    /// Returns the version for `num`, or `None` if `num` is not between 1 and 5.
    pub const fn from_num(num: u8) -> Option<Self> {
        match num {
            1 => Some(Self::Time),
            2 => Some(Self::Dce),
            3 => Some(Self::Md5),
            4 => Some(Self::Random),
            5 => Some(Self::Sha1),
            _ => None,
        }
    }

    /// Returns the numeric version tag.
    pub const fn num(self) -> u8 {
        self as u8
    }
}

impl Uuid {
    /// Returns the `time_low` field (bytes 0 to 3).
    pub const fn time_low(&self) -> u32 {
        let b = self.as_bytes();
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Returns the `time_mid` field (bytes 4 and 5).
    pub const fn time_mid(&self) -> u16 {
        let b = self.as_bytes();
        u16::from_be_bytes([b[4], b[5]])
    }

    /// Returns the `time_hi_and_version` field (bytes 6 and 7).
    pub const fn time_hi_and_version(&self) -> u16 {
        let b = self.as_bytes();
        u16::from_be_bytes([b[6], b[7]])
    }

    /// Returns the `clock_seq_hi_and_reserved` field (byte 8).
    pub const fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.as_bytes()[8]
    }

    /// Returns the `clock_seq_low` field (byte 9).
    pub const fn clock_seq_low(&self) -> u8 {
        self.as_bytes()[9]
    }

    /// Returns the variant field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{Uuid, Variant};
    ///
    /// assert_eq!(Uuid::NAMESPACE_URL.variant(), Variant::Rfc4122);
    /// assert_eq!(Uuid::NIL.variant(), Variant::Ncs);
    /// ```
    pub const fn variant(&self) -> Variant {
        match self.as_bytes()[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100 | 0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Returns the raw version nibble regardless of the variant.
    pub const fn version_num(&self) -> u8 {
        self.as_bytes()[6] >> 4
    }

    /// Returns the version if the variant is [`Variant::Rfc4122`] and the version nibble names
    /// one of the five RFC 4122 algorithms.
    pub const fn version(&self) -> Option<Version> {
        match self.variant() {
            Variant::Rfc4122 => Version::from_num(self.version_num()),
            _ => None,
        }
    }

    /// Returns the 60-bit timestamp of a version 1 UUID.
    pub const fn timestamp(&self) -> Option<Timestamp> {
        match self.version() {
            Some(Version::Time) => Some(Timestamp::from_ticks(
                ((self.time_hi_and_version() as u64 & 0x0fff) << 48)
                    | ((self.time_mid() as u64) << 32)
                    | self.time_low() as u64,
            )),
            _ => None,
        }
    }

    /// Returns the 14-bit clock sequence of a version 1 UUID.
    pub const fn clock_sequence(&self) -> Option<u16> {
        match self.version() {
            Some(Version::Time) => Some(
                ((self.clock_seq_hi_and_reserved() as u16 & 0x3f) << 8)
                    | self.clock_seq_low() as u16,
            ),
            _ => None,
        }
    }

    /// Returns the node of a version 1 UUID.
    pub const fn node(&self) -> Option<Node> {
        match self.version() {
            Some(Version::Time) => Some(self.node_bits()),
            _ => None,
        }
    }

    /// Returns bytes 10 to 15 regardless of the version.
    pub(crate) const fn node_bits(&self) -> Node {
        let b = self.as_bytes();
        Node::from_bytes([b[10], b[11], b[12], b[13], b[14], b[15]])
    }

    /// Overwrites the variant and version bits of `bytes`.
    ///
    /// Generators call this as their final step so that no algorithm-specific bits survive in
    /// the tag positions.
    pub(crate) const fn from_bytes_with_version(mut bytes: [u8; 16], version: Version) -> Self {
        bytes[6] = (version.num() << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant, Version};

    /// Decodes variant from the top bits of byte 8
    #[test]
    fn decodes_variant_from_the_top_bits_of_byte_8() {
        for byte in 0..=255u8 {
            let mut bytes = [0u8; 16];
            bytes[8] = byte;
            let expected = if byte & 0x80 == 0 {
                Variant::Ncs
            } else if byte & 0xc0 == 0x80 {
                Variant::Rfc4122
            } else if byte & 0xe0 == 0xc0 {
                Variant::Microsoft
            } else {
                Variant::Future
            };
            assert_eq!(Uuid::from_bytes(bytes).variant(), expected, "{:#04x}", byte);
        }
    }

    /// Decodes version only for RFC 4122 variant
    #[test]
    fn decodes_version_only_for_rfc_4122_variant() {
        let cases = [
            ("00000000-0000-1000-8000-000000000000", Some(Version::Time)),
            ("00000000-0000-2000-9000-000000000000", Some(Version::Dce)),
            ("00000000-0000-3000-a000-000000000000", Some(Version::Md5)),
            ("00000000-0000-4000-b000-000000000000", Some(Version::Random)),
            ("00000000-0000-5000-8000-000000000000", Some(Version::Sha1)),
            ("00000000-0000-0000-8000-000000000000", None),
            ("00000000-0000-6000-8000-000000000000", None),
            ("00000000-0000-f000-8000-000000000000", None),
            ("00000000-0000-4000-0000-000000000000", None),
            ("00000000-0000-4000-c000-000000000000", None),
            ("00000000-0000-4000-e000-000000000000", None),
        ];

        for (text, version) in cases {
            let e = Uuid::parse_str(text).unwrap();
            assert_eq!(e.version(), version, "{}", text);
            assert_eq!(e.version().map(Version::num), version.map(|v| v as u8));
        }
    }

    /// Extracts fields of a well-known version 1 UUID
    #[test]
    fn extracts_fields_of_a_well_known_version_1_uuid() {
        let e = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
        assert_eq!(e.time_low(), 0x6ba7b810);
        assert_eq!(e.time_mid(), 0x9dad);
        assert_eq!(e.time_hi_and_version(), 0x11d1);
        assert_eq!(e.clock_seq_hi_and_reserved(), 0x80);
        assert_eq!(e.clock_seq_low(), 0xb4);
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.version(), Some(Version::Time));
        assert_eq!(e.version_num(), 1);
        assert_eq!(e.clock_sequence(), Some(0xb4));
        assert_eq!(e.timestamp().unwrap().ticks(), 0x01d1_9dad_6ba7_b810);
        assert_eq!(e.node().unwrap().to_string(), "00:c0:4f:d4:30:c8");
    }

    /// Hides time-based fields of other versions
    #[test]
    fn hides_time_based_fields_of_other_versions() {
        let cases = [
            "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            "886313e1-3b8a-5372-9b90-0c9aee199e5d",
            "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            "6ba7b810-9dad-11d1-c0b4-00c04fd430c8",
            "00000000-0000-0000-0000-000000000000",
        ];

        for text in cases {
            let e = Uuid::parse_str(text).unwrap();
            assert!(e.timestamp().is_none(), "{}", text);
            assert!(e.clock_sequence().is_none(), "{}", text);
            assert!(e.node().is_none(), "{}", text);
        }
    }

    /// Overwrites tag bits and keeps the rest
    #[test]
    fn overwrites_tag_bits_and_keeps_the_rest() {
        let e = Uuid::from_bytes_with_version([0xff; 16], Version::Md5);
        assert_eq!(e.to_string(), "ffffffff-ffff-3fff-bfff-ffffffffffff");
        let e = Uuid::from_bytes_with_version([0x00; 16], Version::Sha1);
        assert_eq!(e.to_string(), "00000000-0000-5000-8000-000000000000");
    }
}
