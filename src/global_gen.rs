//! Default generator and entry point functions.
//!
//! The process-wide generator holds the only shared mutable state of this crate: the clock
//! sequence, node, and last timestamp of version 1 generation, plus the random number generator
//! behind version 4. It is created lazily on first use and kept for the lifetime of the process.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Error, Uuid, V1Generator};
use inner::{GlobalGenInner, GlobalGenRng};

/// Returns the lock handle of process-wide global generator slot.
fn lock_global_gen() -> sync::MutexGuard<'static, Option<GlobalGenInner>> {
    static G: sync::OnceLock<sync::Mutex<Option<GlobalGenInner>>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Runs `f` with the process-wide generator, creating one if none exists or if the process ID has
/// changed since its creation.
pub(crate) fn with_global_gen<T>(
    f: impl FnOnce(&mut V1Generator<GlobalGenRng>) -> T,
) -> Result<T, Error> {
    with_gen_in(&mut lock_global_gen(), f)
}

fn with_gen_in<T>(
    slot: &mut Option<GlobalGenInner>,
    f: impl FnOnce(&mut V1Generator<GlobalGenRng>) -> T,
) -> Result<T, Error> {
    let inner = match slot.take() {
        Some(inner) if !inner.is_stale() => inner,
        Some(_) => {
            tracing::debug!("process ID changed; reinitializing global generator");
            GlobalGenInner::new()?
        }
        None => GlobalGenInner::new()?,
    };
    Ok(f(&mut slot.insert(inner).generator))
}

/// Generates a version 1 UUID with the node and clock sequence of the process-wide generator.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1()?;
/// println!("{}", uuid); // e.g., "f3b4958c-52a1-11e7-802a-010203040506"
///
/// let uuid_string: String = rfc4122::uuid1()?.to_string();
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    Uuid::new_v1(None, None)
}

/// Generates a version 4 UUID.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    Uuid::new_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, V1Generator};
    use crate::node::hardware_node;
    use crate::Error;

    /// The random number generator of the global generator.
    ///
    /// The global generator employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate
    /// the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            rand::RngCore::try_fill_bytes(&mut self.0, dest).map_err(|err| {
                tracing::warn!(error = %err, "global generator could not draw random bytes");
                Error::from(err)
            })
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pub(super) pid: u32,
        pub generator: V1Generator<GlobalGenRng>,
    }

    impl GlobalGenInner {
        /// Creates the generator state, preferring a hardware node over a random one.
        pub fn new() -> Result<Self, Error> {
            let core = ChaCha12Core::from_rng(OsRng).map_err(|err| {
                tracing::warn!(error = %err, "could not seed global generator");
                Error::from(err)
            })?;
            let rng = GlobalGenRng(ReseedingRng::new(core, 1024 * 64, OsRng));

            let generator = match hardware_node() {
                Some(node) => V1Generator::with_node(rng, node)?,
                None => {
                    tracing::debug!("no hardware node identifier found; using a random node");
                    V1Generator::new(rng)?
                }
            };
            tracing::debug!(
                node = %generator.node(),
                clock_seq = generator.clock_seq(),
                "initialized global generator"
            );

            Ok(Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            })
        }

        /// Returns `true` on Unix if the process ID has changed since creation.
        pub fn is_stale(&self) -> bool {
            #[cfg(unix)]
            return self.pid != std::process::id();

            #[cfg(not(unix))]
            false
        }
    }
}



#[cfg(all(test, unix))]
mod tests_fork {
    use super::{inner::GlobalGenInner, with_gen_in};
    use crate::{Variant, Version};

    /// Rebuilds the generator state after the process ID changes
    #[test]
    fn rebuilds_the_generator_state_after_the_process_id_changes() {
        let mut slot: Option<GlobalGenInner> = None;
        let first = with_gen_in(&mut slot, |g| g.generate()).unwrap();
        assert_eq!(slot.as_ref().unwrap().pid, std::process::id());

        // same process: the state is kept
        let second = with_gen_in(&mut slot, |g| g.generate()).unwrap();
        assert_eq!(second.clock_sequence(), first.clock_sequence());
        assert_eq!(second.node(), first.node());
        assert!(second.timestamp() > first.timestamp());

        // pretend the state was inherited from a parent process
        slot.as_mut().unwrap().pid = 0;
        let (v1, v4) = with_gen_in(&mut slot, |g| (g.generate(), g.generate_v4())).unwrap();
        assert_eq!(slot.as_ref().unwrap().pid, std::process::id());

        assert_eq!(v1.variant(), Variant::Rfc4122);
        assert_eq!(v1.version(), Some(Version::Time));
        let v4 = v4.unwrap();
        assert_eq!(v4.variant(), Variant::Rfc4122);
        assert_eq!(v4.version(), Some(Version::Random));
    }
}
