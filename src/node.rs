//! 48-bit node identifiers of time-based UUIDs

use std::{fmt, str};

/// Represents the 48-bit node field, usually an IEEE 802 MAC address.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Node([u8; 6]);

impl Node {
    /// Creates a node from six bytes in transmission order.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Creates a node from the lower 48 bits of `value`.
    pub const fn from_u64(value: u64) -> Self {
        let b = value.to_be_bytes();
        Self([b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Returns the node as a 48-bit integer.
    pub const fn as_u64(&self) -> u64 {
        let b = self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Creates a node from random bytes, setting the multicast bit so the value cannot collide
    /// with a real IEEE 802 address.
    pub const fn from_random_bytes(mut bytes: [u8; 6]) -> Self {
        bytes[0] |= 0x01;
        Self(bytes)
    }

    /// Returns `true` if the multicast bit (least significant bit of the first octet) is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Returns `true` if the locally administered bit (second least significant bit of the first
    /// octet) is set, as on most virtual interfaces.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Returns `true` if the node is a globally unique IEEE 802 address: nonzero, unicast, and
    /// universally administered.
    pub const fn is_universal_unicast(&self) -> bool {
        self.as_u64() != 0 && !self.is_multicast() && !self.is_local()
    }
}

impl fmt::Display for Node {
    /// Returns the colon-separated hexadecimal octets, e.g. `00:c0:4f:d4:30:c8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// Error parsing an invalid node representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid node representation")]
pub struct ParseNodeError {}

impl str::FromStr for Node {
    type Err = ParseNodeError;

    /// Parses six colon-separated pairs of hexadecimal digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseNodeError = ParseNodeError {};
        let mut dst = [0u8; 6];
        let mut iter = src.split(':');
        for e in dst.iter_mut() {
            let octet = iter.next().ok_or(ERR)?;
            if octet.len() != 2 || !octet.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(ERR);
            }
            *e = u8::from_str_radix(octet, 16).map_err(|_| ERR)?;
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<[u8; 6]> for Node {
    fn from(src: [u8; 6]) -> Self {
        Self(src)
    }
}

impl From<Node> for [u8; 6] {
    fn from(src: Node) -> Self {
        src.0
    }
}

/// Reads the address of the first non-loopback network interface that carries a globally unique
/// IEEE 802 address.
///
/// Returns `None` when no usable hardware address is found; callers fall back to a random node.
#[cfg(target_os = "linux")]
pub(crate) fn hardware_node() -> Option<Node> {
    hardware_node_in(std::path::Path::new("/sys/class/net"))
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn hardware_node() -> Option<Node> {
    None
}

/// Scans `root` laid out like `/sys/class/net`: one directory per interface, each holding an
/// `address` file.
#[cfg_attr(not(any(target_os = "linux", test)), allow(dead_code))]
fn hardware_node_in(root: &std::path::Path) -> Option<Node> {
    let mut paths: Vec<_> = std::fs::read_dir(root)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    paths
        .iter()
        .filter(|path| path.file_name().map_or(false, |name| name != "lo"))
        .filter_map(|path| std::fs::read_to_string(path.join("address")).ok())
        .filter_map(|text| text.trim().parse::<Node>().ok())
        .find(Node::is_universal_unicast)
}
