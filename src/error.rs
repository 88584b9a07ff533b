//! Crate-wide error type.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error reported by mint, parse, and construction operations.
///
/// No partial value ever escapes an error path: a [`Uuid`](crate::Uuid) either exists with all
/// 16 bytes in place or was never constructed.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The requested UUID version is invalid or not implemented (version 2 in particular is
    /// deliberately unsupported).
    UnsupportedVersion(u8),

    /// An input could not be normalized into the required binary form, or a required input was
    /// absent. The payload is a short human-readable reason.
    InvalidInput(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion(2) => f.write_str("version 2 is unsupported"),
            Self::UnsupportedVersion(ver) => {
                write!(f, "version {} is invalid or unsupported", ver)
            }
            Self::InvalidInput(reason) => f.write_str(reason),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
