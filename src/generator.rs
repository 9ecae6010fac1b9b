//! Time-based UUID generator and related types.

use crate::{Error, Node, Timestamp, Uuid, Version};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V1Generator`].
///
/// Implementations must be cryptographically secure, as version 4 UUIDs and the initial clock
/// sequence are drawn from this source.
pub trait RandSource {
    /// Fills `dest` with random data, or reports that the entropy source is unavailable.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// Represents a version 1 UUID generator that encapsulates the clock sequence, node, and the last
/// timestamp used.
///
/// Within a process, the generator never returns the same `(timestamp, clock_seq, node)` triple
/// twice:
///
/// 1.  If the clock reports the same or a slightly smaller timestamp than the previous call, the
///     generator reuses the previous timestamp plus one tick.
/// 2.  If the clock moves back by more than the rollback allowance (by default, ten seconds), the
///     generator increments the clock sequence and accepts the new timestamp.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use rfc4122::V1Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V1Generator::with_rand08(OsRng)?));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// # Ok::<(), rfc4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<R> {
    timestamp: u64,
    clock_seq: u16,
    node: Node,

    /// The random number generator used by the generator.
    rng: R,
}

/// The default rollback allowance in 100-nanosecond ticks (ten seconds).
pub const DEFAULT_ROLLBACK_ALLOWANCE: u64 = 10 * 10_000_000;

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

impl<R: RandSource> V1Generator<R> {
    /// Creates a generator instance with a random clock sequence and a random multicast node.
    pub fn new(mut rng: R) -> Result<Self, Error> {
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes)?;
        Self::with_node(rng, Node::from_random_bytes(bytes))
    }

    /// Creates a generator instance with a random clock sequence and the specified node.
    pub fn with_node(mut rng: R, node: Node) -> Result<Self, Error> {
        let mut bytes = [0u8; 2];
        rng.fill_bytes(&mut bytes)?;
        Ok(Self {
            timestamp: 0,
            clock_seq: u16::from_be_bytes(bytes) & MAX_CLOCK_SEQ,
            node,
            rng,
        })
    }

    /// Returns the current clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Returns the node embedded in generated UUIDs.
    pub const fn node(&self) -> Node {
        self.node
    }

    /// Generates a new version 1 UUID from the current system time.
    ///
    /// See the [`V1Generator`] type documentation for the description.
    pub fn generate(&mut self) -> Uuid {
        self.generate_core(Timestamp::now(), DEFAULT_ROLLBACK_ALLOWANCE)
    }

    /// Generates a new version 1 UUID from the `timestamp` passed.
    ///
    /// The `rollback_allowance` parameter specifies the amount of timestamp rollback, in
    /// 100-nanosecond ticks, that is absorbed without touching the clock sequence.
    pub fn generate_core(&mut self, timestamp: Timestamp, rollback_allowance: u64) -> Uuid {
        let ticks = self.next_ticks(timestamp, rollback_allowance);
        Uuid::from_fields_v1(ticks, self.clock_seq, self.node)
    }

    /// Advances the internal state and returns the timestamp to embed in the next UUID.
    pub(crate) fn next_ticks(
        &mut self,
        timestamp: Timestamp,
        rollback_allowance: u64,
    ) -> Timestamp {
        let ticks = timestamp.ticks();
        if ticks > self.timestamp {
            self.timestamp = ticks;
        } else if ticks.saturating_add(rollback_allowance) >= self.timestamp
            && self.timestamp < Timestamp::MAX.ticks()
        {
            // go on with previous timestamp if new one is not much smaller
            self.timestamp += 1;
        } else {
            // the clock went back too far to keep up; a new clock sequence keeps IDs unique
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
            self.timestamp = ticks;
            tracing::debug!(
                clock_seq = self.clock_seq,
                timestamp = ticks,
                "clock rollback detected; incremented clock sequence"
            );
        }
        Timestamp::from_ticks(self.timestamp)
    }

    /// Generates a new version 4 UUID utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes)?;
        Ok(Uuid::from_bytes_with_version(bytes, Version::Random))
    }
}

/// Supports operations as an infinite iterator that produces a new version 1 UUID for each call
/// of `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::V1Generator;
///
/// V1Generator::with_rand08(rand::thread_rng())?
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// # Ok::<(), rfc4122::Error>(())
/// ```
impl<R: RandSource> Iterator for V1Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for V1Generator<R> {}

#[cfg(test)]
mod tests {
    use super::{with_rand08, V1Generator, DEFAULT_ROLLBACK_ALLOWANCE};
    use crate::{Node, Timestamp, Variant, Version};

    type ThreadGen = V1Generator<with_rand08::Adapter<rand::rngs::ThreadRng>>;

    fn new_generator() -> ThreadGen {
        V1Generator::with_rand08(rand::thread_rng()).unwrap()
    }

    /// Generates unique UUIDs even with decreasing or constant timestamp
    #[test]
    fn generates_unique_uuids_even_with_decreasing_or_constant_timestamp() {
        use std::collections::HashSet;
        let ts = Timestamp::from_unix(1_700_000_000, 0);
        let mut g = new_generator();
        let clock_seq = g.clock_seq();
        let mut s = HashSet::new();
        let mut prev = g.generate_core(ts, DEFAULT_ROLLBACK_ALLOWANCE);
        assert_eq!(prev.timestamp(), Some(ts));
        for i in 0..100_000u64 {
            let curr_ts = Timestamp::from_ticks(ts.ticks() - i.min(4_000));
            let curr = g.generate_core(curr_ts, DEFAULT_ROLLBACK_ALLOWANCE);
            assert!(prev.timestamp() < curr.timestamp());
            assert!(s.insert(curr));
            prev = curr;
        }
        assert_eq!(g.clock_seq(), clock_seq);
    }

    /// Increments clock sequence if timestamp goes backwards a lot
    #[test]
    fn increments_clock_sequence_if_timestamp_goes_backwards_a_lot() {
        let ts = Timestamp::from_unix(1_700_000_000, 0);
        let mut g = new_generator();
        let clock_seq = g.clock_seq();
        let prev = g.generate_core(ts, 10_000);
        assert_eq!(prev.clock_sequence(), Some(clock_seq));

        let curr = g.generate_core(Timestamp::from_ticks(ts.ticks() - 10_000), 10_000);
        assert_eq!(curr.clock_sequence(), Some(clock_seq));
        assert_eq!(curr.timestamp().unwrap().ticks(), ts.ticks() + 1);

        let back = Timestamp::from_ticks(ts.ticks() - 10_002);
        let curr = g.generate_core(back, 10_000);
        assert_eq!(curr.timestamp(), Some(back));
        assert_eq!(curr.clock_sequence(), Some((clock_seq + 1) & 0x3fff));
        assert_ne!(curr, prev);
    }

    /// Embeds configured node and constant bits
    #[test]
    fn embeds_configured_node_and_constant_bits() {
        let node = Node::from_bytes([0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);
        let rng = with_rand08::Adapter(rand::thread_rng());
        let mut g = V1Generator::with_node(rng, node).unwrap();
        for _ in 0..1_000 {
            let e = g.generate();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Some(Version::Time));
            assert_eq!(e.node(), Some(node));
            assert_eq!(e.clock_sequence(), Some(g.clock_seq()));
        }
    }

    /// Uses a random multicast node by default
    #[test]
    fn uses_a_random_multicast_node_by_default() {
        let g = new_generator();
        assert!(g.node().is_multicast());
        assert!(g.clock_seq() < 1 << 14);
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        let mut g = new_generator();
        for _ in 0..10_000 {
            let (now, _) = Timestamp::now().to_unix();
            let (embedded, _) = g.generate().timestamp().unwrap().to_unix();
            assert!((now - embedded).abs() < 2);
        }
    }

    /// Generates version 4 UUIDs from the inner source
    #[test]
    fn generates_version_4_uuids_from_the_inner_source() {
        let mut g = new_generator();
        for _ in 0..1_000 {
            let e = g.generate_v4().unwrap();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Some(Version::Random));
        }
    }

    /// Propagates entropy failures
    #[test]
    fn propagates_entropy_failures() {
        use crate::{Error, RandSource};

        struct BrokenSource;
        impl RandSource for BrokenSource {
            fn fill_bytes(&mut self, _: &mut [u8]) -> Result<(), Error> {
                Err(Error::EntropyUnavailable(rand::Error::new("source exhausted")))
            }
        }

        assert!(matches!(
            V1Generator::new(BrokenSource),
            Err(Error::EntropyUnavailable(_))
        ));
    }
}
