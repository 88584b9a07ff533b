//! A Rust implementation of RFC 4122 UUIDs: time-based (version 1), name-based (versions 3 and
//! 5), and random (version 4) identifiers, plus deterministic boundary time-based values for
//! range queries over time-ordered indexes.
//!
//! ```rust
//! use rfc4122::{uuid1, uuid4};
//!
//! let uuid = uuid1();
//! println!("{}", uuid); // e.g. "8ca9c81c-0b67-11ef-91b2-bd9d7754f612"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```
//!
//! # Field and bit layout
//!
//! Time-based identifiers carry the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond ticks since the Gregorian calendar reform
//!   (1582-10-15), scattered over `time_low`, `time_mid`, and `time_high`.
//! - The 4-bit `ver` field is set at `0001`; the hashed and random versions put `0011`, `0100`,
//!   or `0101` there instead.
//! - The 14-bit `clock_seq` field is drawn from the random source unless the caller supplies
//!   one.
//! - The 2-bit `var` field is set at `10`.
//! - The 48-bit `node` field holds a MAC-like address; randomly generated nodes carry the
//!   multicast bit to mark them as not hardware-derived.
//!
//! Pinning the clock sequence and node to their boundary values yields the smallest and largest
//! identifier a timestamp can produce, which bounds a range scan over a time-ordered index:
//!
//! ```rust
//! use rfc4122::Uuid;
//!
//! let since = Uuid::min_timeuuid(1_234_567_890_123_456);
//! let until = Uuid::max_timeuuid(1_234_567_890_123_456);
//! assert!(since < until);
//! assert_eq!(since.timestamp_micros(), until.timestamp_micros());
//! ```
//!
//! # Other features
//!
//! Name-based identifiers hash a namespace and a name into a deterministic value:
//!
//! ```rust
//! use rfc4122::{uuid5, Uuid};
//!
//! let uuid = uuid5("python.org", Uuid::NAMESPACE_DNS)?;
//! assert_eq!(&uuid.encode() as &str, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! # Ok::<(), rfc4122::Error>(())
//! ```
//!
//! Existing identifiers are imported from any binary, hexadecimal, or URN form, and compared
//! after the same normalization:
//!
//! ```rust
//! use rfc4122::{compare, Uuid};
//!
//! let uuid = Uuid::import("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
//! assert_eq!(uuid, Uuid::NAMESPACE_DNS);
//! assert!(compare(uuid, "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}"));
//! # Ok::<(), rfc4122::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{compare, fixed_bytes, Uuid, Variant, NODE_MAX, NODE_MIN, SEQ_MAX, SEQ_MIN};

mod name;
pub use name::{uuid3, uuid5};

pub mod minter;
#[doc(inline)]
pub use minter::{Minter, RandSource, TimeSource};
#[cfg(feature = "std")]
#[doc(inline)]
pub use minter::StdSystemTime;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{mint, uuid1, uuid4};
