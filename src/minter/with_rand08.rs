//! Integration with `rand` (v0.8) crate.

use super::{Minter, RandSource};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> Minter<Adapter<T>, super::StdSystemTime> {
    /// Creates a minter that pairs a random number generator implementing [`RngCore`] from
    /// `rand` (v0.8) crate with the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Minter;
    ///
    /// let mut g = Minter::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.time_uuid());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_and_time_sources(Adapter(rng), super::StdSystemTime)
    }
}
