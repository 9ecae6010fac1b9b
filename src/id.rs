use std::{array, cmp, fmt, str};

use fstr::FStr;

use crate::ParseError;

/// Represents a Universally Unique IDentifier.
///
/// The value is stored as a 16-byte big-endian array. Equality and hashing operate on the raw
/// bytes, and ordering follows the unsigned 128-bit integer view returned by
/// [`Uuid::as_u128()`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Creates a UUID from a 16-byte big-endian array.
    ///
    /// Any byte sequence is accepted; variant and version bits are not checked.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates a UUID from its unsigned 128-bit integer representation.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns the unsigned 128-bit integer representation.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Parses the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Hexadecimal digits are case-insensitive, but no other shape is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = Uuid::parse_str("6BA7B810-9DAD-11D1-80B4-00C04FD430C8")?;
    /// assert_eq!(x, Uuid::NAMESPACE_DNS);
    /// assert!(Uuid::parse_str("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}").is_err());
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError::InvalidLength(src.len()));
        }

        let mut dst = [0u8; 16];
        let mut cursor = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                if src[cursor] != b'-' {
                    return Err(ParseError::InvalidGroupSeparator { index: cursor });
                }
                cursor += 1;
            }
            *e = (decode_hex_digit(src, cursor)? << 4) | decode_hex_digit(src, cursor + 1)?;
            cursor += 2;
        }
        debug_assert_eq!(cursor, 36);
        Ok(Self(dst))
    }

    /// Returns `true` if `src` is a valid string representation accepted by
    /// [`Uuid::parse_str()`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// assert!(Uuid::is_valid("00000000-0000-0000-0000-000000000000"));
    /// assert!(!Uuid::is_valid("not-a-uuid"));
    /// ```
    pub fn is_valid(src: &str) -> bool {
        Self::parse_str(src).is_ok()
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "6ba7b811-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut cursor = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[cursor] = DIGITS[(e >> 4) as usize];
            buffer[cursor + 1] = DIGITS[(e & 15) as usize];
            cursor += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[cursor] = b'-';
                cursor += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written above is ASCII.
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

fn decode_hex_digit(src: &[u8], index: usize) -> Result<u8, ParseError> {
    match src[index] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidCharacter { index }),
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_u128().cmp(&other.as_u128())
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = array::TryFromSliceError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src).map(Self)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

}
