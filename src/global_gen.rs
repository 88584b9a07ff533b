//! Default minter and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Error, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of the process-wide minter, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("rfc4122: could not lock global minter")
}

/// Mints a version 1 (time-based) UUID object.
///
/// This function employs a process-wide minter that reads the system clock and draws the clock
/// sequence and the multicast node from a reseeding cryptographic generator. On Unix, it resets
/// the minter when the process ID changes (i.e., upon process forks) to prevent random-stream
/// reuse across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid1();
/// println!("{}", uuid); // e.g., "8ca9c81c-0b67-11ef-91b2-bd9d7754f612"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = rfc4122::uuid1().to_string();
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().time_uuid()
}

/// Mints a version 4 (random) UUID object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().random_uuid()
}

/// Mints a UUID of the requested version using the process-wide minter.
///
/// See [`Minter::mint`](crate::Minter::mint) for the dispatch rules: versions 1 and 4 succeed,
/// version 2 and unknown numbers are unsupported, and the name-based versions are directed to
/// [`uuid3`](crate::uuid3) and [`uuid5`](crate::uuid5).
///
/// # Examples
///
/// ```rust
/// assert!(rfc4122::mint(1).is_ok());
/// assert!(rfc4122::mint(2).is_err());
/// ```
pub fn mint(version: u8) -> Result<Uuid, Error> {
    lock_global_gen().get_mut().mint(version)
}

mod inner {
    use rand::rngs::adapter::ReseedingRng;
    use rand::rngs::OsRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::minter::{Minter, RandSource, StdSystemTime};

    /// The random byte source of the process-wide minter.
    ///
    /// The global minter currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        minter: Minter<GlobalGenRng, StdSystemTime>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                minter: Minter::with_rand_and_time_sources(
                    GlobalGenRng(ReseedingRng::new(
                        ChaCha12Core::from_entropy(),
                        1024 * 64,
                        OsRng,
                    )),
                    StdSystemTime,
                ),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Minter`] instance, resetting the state on
        /// Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Minter<GlobalGenRng, StdSystemTime> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.minter
        }
    }
}


#[cfg(test)]
mod tests_v4 {
    use super::uuid4;
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| uuid4().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], 0, "version bit 50");
        assert_eq!(bins[51], 0, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (0..48).chain(52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid4();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 4);
        }
    }
}
