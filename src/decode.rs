//! Human-readable field reports
//!
//! [`Report`] gathers what can be learned from a UUID without any external context. Its
//! [`Display`](fmt::Display) implementation renders a three-column table:
//!
//! ```text
//! encode:  STR:      6ba7b810-9dad-11d1-80b4-00c04fd430c8
//!          INT:      143098242404177361603877621312831893704
//! decode:  variant:  RFC 4122
//!          version:  1 (time and node based)
//!          content:  time:  1998-02-04T22:13:53+00:00
//!                    clock: 180 (usually random)
//!                    node:  00:c0:4f:d4:30:c8
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Node, Uuid, Variant, Version};

/// A decoded view of a UUID.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Report {
    uuid: Uuid,
    layout: Layout,
}

/// The variant-dependent part of a [`Report`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Layout {
    /// The UUID does not follow the RFC 4122 layout, so no field is decoded.
    NotRfc4122(Variant),

    /// The UUID follows the RFC 4122 layout. `None` means the version nibble is not 1 to 5.
    Rfc4122(Option<Content>),
}

/// The version-specific content of an RFC 4122 UUID.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Content {
    /// Version 1 fields. `time` is `None` only if the timestamp cannot be represented as a
    /// calendar date.
    Time {
        /// The embedded timestamp.
        time: Option<DateTime<Utc>>,
        /// The 14-bit clock sequence.
        clock_seq: u16,
        /// The node.
        node: Node,
    },

    /// Version 2; DCE security fields are not decoded.
    Dce,

    /// Version 3; the bytes are an MD5 digest.
    Md5([u8; 16]),

    /// Version 4; the bytes are random.
    Random([u8; 16]),

    /// Version 5; the bytes are a truncated SHA-1 digest.
    Sha1([u8; 16]),
}

impl Uuid {
    /// Decodes the UUID into a [`Report`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{decode::{Content, Layout}, Uuid};
    ///
    /// let report = Uuid::new_v5(&Uuid::NAMESPACE_URL, "https://example.com/").decode();
    /// assert!(matches!(report.layout(), Layout::Rfc4122(Some(Content::Sha1(_)))));
    /// ```
    pub fn decode(&self) -> Report {
        let layout = match self.variant() {
            Variant::Rfc4122 => {
                Layout::Rfc4122(self.version().map(|version| self.content(version)))
            }
            other => Layout::NotRfc4122(other),
        };
        Report {
            uuid: *self,
            layout,
        }
    }

    fn content(&self, version: Version) -> Content {
        let bytes = self.into_bytes();
        match version {
            Version::Time => Content::Time {
                time: self.timestamp().and_then(|ts| ts.to_datetime()),
                clock_seq: self.clock_sequence().unwrap_or_default(),
                node: self.node_bits(),
            },
            Version::Dce => Content::Dce,
            Version::Md5 => Content::Md5(bytes),
            Version::Random => Content::Random(bytes),
            Version::Sha1 => Content::Sha1(bytes),
        }
    }
}

impl Report {
    /// Returns the decoded UUID.
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns the variant-dependent part of the report.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the rows of the report as `[section, label, value]` triples.
    pub fn rows(&self) -> Vec<[String; 3]> {
        let mut rows = vec![
            row("encode:", "STR:", self.uuid),
            row("", "INT:", self.uuid.as_u128()),
        ];

        let content = match &self.layout {
            Layout::NotRfc4122(_) => {
                rows.push(row("decode:", "variant:", "Not an RFC 4122 UUID"));
                return rows;
            }
            Layout::Rfc4122(content) => content,
        };

        rows.push(row("decode:", "variant:", "RFC 4122"));
        let Some(content) = content else {
            rows.push(row("", "version:", "Invalid or unknown UUID version"));
            return rows;
        };

        match content {
            Content::Time {
                time,
                clock_seq,
                node,
            } => {
                let time = match time {
                    Some(time) => time.to_rfc3339_opts(SecondsFormat::Secs, false),
                    None => "(out of range)".to_owned(),
                };
                rows.push(row("", "version:", "1 (time and node based)"));
                rows.push(row("", "content:", format!("time:  {}", time)));
                rows.push(row("", "", format!("clock: {} (usually random)", clock_seq)));
                rows.push(row("", "", format!("node:  {}", node)));
            }
            Content::Dce => {
                rows.push(row("", "version:", "2 (DCE security based)"));
                rows.push(row("", "content:", "(not decoded: DCE security fields)"));
            }
            Content::Md5(bytes) => {
                rows.push(row("", "version:", "3 (name based, MD5)"));
                rows.push(row("", "content:", colon_hex(bytes)));
                rows.push(row("", "", "(not decipherable: MD5 message digest only)"));
            }
            Content::Random(bytes) => {
                rows.push(row("", "version:", "4 (random data based)"));
                rows.push(row("", "content:", colon_hex(bytes)));
                rows.push(row("", "", "(no semantics: random data only)"));
            }
            Content::Sha1(bytes) => {
                rows.push(row("", "version:", "5 (name based, SHA-1)"));
                rows.push(row("", "content:", colon_hex(bytes)));
                rows.push(row("", "", "(not decipherable: SHA1 message digest only)"));
            }
        }
        rows
    }
}

fn row(section: &str, label: &str, value: impl fmt::Display) -> [String; 3] {
    [section.to_owned(), label.to_owned(), value.to_string()]
}

fn colon_hex(bytes: &[u8]) -> String {
    let octets: Vec<String> = bytes.iter().map(|e| format!("{:02x}", e)).collect();
    octets.join(":")
}

impl fmt::Display for Report {
    /// Renders the rows as a borderless table with aligned columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = |i: usize| rows.iter().map(|r| r[i].len()).max().unwrap_or(0);
        let (w0, w1) = (width(0), width(1));
        for [section, label, value] in &rows {
            let line = format!("{:<w0$}  {:<w1$}  {}", section, label, value);
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
