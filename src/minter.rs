//! The minting front end and its injectable capabilities.

use crate::id::fixed_bytes;
use crate::{Error, Uuid};

pub mod with_rand08;

#[cfg(test)]
mod tests;

/// A trait that defines the minimum random byte source interface for [`Minter`].
///
/// Implementations should draw from a source unpredictable enough to avoid identifier collisions
/// in practice, such as an OS entropy facility. A non-cryptographic generator is tolerated, but
/// implementers should document the weaker guarantee. A blocking read from an exhausted entropy
/// source is acceptable and is not treated as an error.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the wall clock interface for [`Minter`].
pub trait TimeSource {
    /// Returns the current time as microseconds elapsed since the Unix epoch.
    fn unix_ts_us(&mut self) -> i64;
}

/// A [`TimeSource`] that reads the system real-time clock.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_us(&mut self) -> i64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_micros() as i64
    }
}

/// Mints RFC 4122 UUIDs from the random byte and wall clock sources supplied at construction.
///
/// This type provides the interface to customize the random number generator and system clock
/// behind the mint operations, which keeps every output reproducible under test doubles. The
/// sources may be shared process-wide behind a mutex; the minter itself holds no other state.
///
/// # Examples
///
/// ```rust
/// use rfc4122::Minter;
///
/// let mut g = Minter::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.time_uuid()); // e.g., "8ca9c81c-0b67-11ef-91b2-bd9d7754f612"
/// println!("{}", g.random_uuid()); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
///
/// # Mint operations
///
/// | Version | Operation                    | Inputs                                  |
/// | ------- | ---------------------------- | --------------------------------------- |
/// | 1       | [`time_uuid`]                | clock, random sequence and node         |
/// | 1       | [`time_uuid_core`]           | optional overrides for all three fields |
/// | 3       | [`uuid3`](crate::uuid3)      | name and namespace (no minter state)    |
/// | 4       | [`random_uuid`]              | 16 random bytes                         |
/// | 5       | [`uuid5`](crate::uuid5)      | name and namespace (no minter state)    |
///
/// [`mint`](Minter::mint) dispatches on a runtime version number and rejects everything else,
/// version 2 included.
///
/// [`time_uuid`]: Minter::time_uuid
/// [`time_uuid_core`]: Minter::time_uuid_core
/// [`random_uuid`]: Minter::random_uuid
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Minter<R, T> {
    /// The random byte source behind clock sequences, nodes, and random UUIDs.
    rng: R,

    /// The wall clock read when no explicit timestamp is supplied.
    time: T,
}

impl<R: RandSource, T: TimeSource> Minter<R, T> {
    /// Creates a minter instance from the supplied sources.
    pub const fn with_rand_and_time_sources(rng: R, time: T) -> Self {
        Self { rng, time }
    }

    /// Mints a UUID of the requested version, using the default inputs for every
    /// version-specific field.
    ///
    /// Versions 1 and 4 draw their inputs from the minter's sources. Versions 3 and 5 cannot be
    /// minted without a name and namespace and are reported as invalid input here; use
    /// [`uuid3`](crate::uuid3) and [`uuid5`](crate::uuid5) instead. Version 2 and every other
    /// version number are unsupported.
    pub fn mint(&mut self, version: u8) -> Result<Uuid, Error> {
        match version {
            1 => Ok(self.time_uuid()),
            2 => Err(Error::UnsupportedVersion(2)),
            3 | 5 => Err(Error::InvalidInput(
                "a name-string is required for name-based UUIDs",
            )),
            4 => Ok(self.random_uuid()),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }

    /// Mints a version 1 (time-based) UUID from the current clock reading, a random clock
    /// sequence, and a random node with the multicast bit set.
    pub fn time_uuid(&mut self) -> Uuid {
        let ts = self.time.unix_ts_us();
        let seq = self.random_seq();
        let node = self.random_node();
        Uuid::from_fields_v1(ts, seq, node)
    }

    /// Mints a version 1 UUID with explicit overrides for the timestamp, node, and clock
    /// sequence.
    ///
    /// Every `None` falls back to the same default as [`time_uuid`](Minter::time_uuid). A
    /// supplied node or sequence is normalized by [`fixed_bytes`](crate::fixed_bytes), so raw
    /// binary and hexadecimal forms are both accepted. A node that does not normalize to 6 bytes
    /// degrades to the random multicast default, while a sequence that does not normalize to 2
    /// bytes is an error.
    ///
    /// Fixing all three inputs makes the output fully deterministic; callers of that mode accept
    /// responsibility for collisions.
    ///
    /// # Panics
    ///
    /// Panics if the timestamp is out of range for the 60-bit tick field (see
    /// [`Uuid::from_fields_v1`]).
    pub fn time_uuid_core(
        &mut self,
        unix_ts_us: Option<i64>,
        node: Option<&[u8]>,
        sequence: Option<&[u8]>,
    ) -> Result<Uuid, Error> {
        let ts = match unix_ts_us {
            Some(ts) => ts,
            None => self.time.unix_ts_us(),
        };
        let seq = match sequence {
            Some(src) => u16::from_be_bytes(fixed_bytes(src)?),
            None => self.random_seq(),
        };
        let node = match node {
            Some(src) => match fixed_bytes(src) {
                Ok(node) => node,
                // An unusable node override degrades to the random default.
                Err(_) => self.random_node(),
            },
            None => self.random_node(),
        };
        Ok(Uuid::from_fields_v1(ts, seq, node))
    }

    /// Mints a version 4 (random) UUID from 16 bytes of the random source.
    pub fn random_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        Uuid::from(bytes)
    }

    fn random_seq(&mut self) -> u16 {
        let mut buffer = [0u8; 2];
        self.rng.fill_bytes(&mut buffer);
        u16::from_be_bytes(buffer)
    }

    /// Draws a random node and sets the multicast bit to mark it as not hardware-derived.
    fn random_node(&mut self) -> [u8; 6] {
        let mut node = [0u8; 6];
        self.rng.fill_bytes(&mut node);
        node[0] |= 1;
        node
    }
}

/// Supports operations as an infinite iterator that produces a new time-based UUID for each call
/// of `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::Minter;
///
/// Minter::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for Minter<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.time_uuid())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for Minter<R, T> {}
