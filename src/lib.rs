//! An implementation of RFC 4122 UUIDs: generation, parsing, comparison, and decoding
//!
//! ```rust
//! use rfc4122::Uuid;
//!
//! let uuid = Uuid::new_v4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Versions
//!
//! | Version | Constructor          | Content                                    |
//! | ------- | -------------------- | ------------------------------------------ |
//! | 1       | [`Uuid::new_v1()`]   | Gregorian timestamp, clock sequence, node  |
//! | 2       | [`Uuid::new_v2()`]   | Version 1 layout with a DCE local domain   |
//! | 3       | [`Uuid::new_v3()`]   | MD5 digest of a namespace and a name       |
//! | 4       | [`Uuid::new_v4()`]   | Cryptographically strong random bits       |
//! | 5       | [`Uuid::new_v5()`]   | SHA-1 digest of a namespace and a name     |
//!
//! Every constructor sets the 2-bit variant field to `10` and the 4-bit version field as its
//! last step. Version 2 covers the layout only: the local identifier is supplied by the caller.
//!
//! # Parsing and decoding
//!
//! Only the 36-character `8-4-4-4-12` form is accepted; hexadecimal digits are
//! case-insensitive and the output is always lowercase:
//!
//! ```rust
//! use rfc4122::{Uuid, Variant, Version};
//!
//! assert!(!Uuid::is_valid("not-a-uuid"));
//!
//! let uuid: Uuid = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8".parse()?;
//! assert_eq!(uuid.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//! assert_eq!(uuid.variant(), Variant::Rfc4122);
//! assert_eq!(uuid.version(), Some(Version::Time));
//! assert_eq!(uuid.node().map(|n| n.to_string()).as_deref(), Some("00:c0:4f:d4:30:c8"));
//! println!("{}", uuid.decode());
//! # Ok::<(), rfc4122::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): the process-wide generator behind [`Uuid::new_v1()`],
//!   [`Uuid::new_v2()`], [`Uuid::new_v4()`], [`uuid1()`], and [`uuid4()`].
//! - `cli` (default): the `rfc4122` command that decodes a UUID given on the command line.
//! - `serde`: serialization as a string (human-readable formats) or 16 bytes.
//! - `uuid`: conversions from and to [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::Uuid;

mod fields;
pub use fields::{Variant, Version};

pub mod node;
pub use node::Node;

pub mod timestamp;
pub use timestamp::Timestamp;

mod namespace;

pub mod generator;
pub use generator::{RandSource, V1Generator};

mod v1;

mod v2;
pub use v2::Domain;

mod v3;

mod v4;

mod v5;

pub mod decode;
pub use decode::Report;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4};
