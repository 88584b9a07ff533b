#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::Error;

/// 100-nanosecond ticks elapsed between the Gregorian calendar reform (1582-10-15) and the Unix
/// epoch. Version 1 timestamps count ticks from the former; everything else here speaks
/// microseconds since the latter.
pub(crate) const UNIX_EPOCH_TICKS: i64 = 0x01b2_1dd2_1381_4000;

// Bounds of the timestamps whose tick counts fit the 60-bit field.
const UNIX_TS_US_MIN: i64 = -(UNIX_EPOCH_TICKS / 10);
const UNIX_TS_US_MAX: i64 = (((1i64 << 60) - 1) - UNIX_EPOCH_TICKS) / 10;

/// Node field of the largest version 1 UUID a timestamp can produce, under the signed-byte
/// ordering used by time-ordered indexes.
pub const NODE_MAX: [u8; 6] = [0x7f; 6];

/// Node field of the smallest version 1 UUID a timestamp can produce.
pub const NODE_MIN: [u8; 6] = [0x80; 6];

/// Clock sequence of the largest version 1 UUID a timestamp can produce.
pub const SEQ_MAX: u16 = 0x7f7f;

/// Clock sequence of the smallest version 1 UUID a timestamp can produce.
pub const SEQ_MIN: u16 = 0x8080;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Name-based namespace for fully-qualified domain names
    /// (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name-based namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name-based namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name-based namespace for X.500 distinguished names
    /// (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a version 1 UUID from a timestamp, clock sequence, and node.
    ///
    /// The timestamp is given as microseconds since the Unix epoch and is rebased internally to
    /// the 60-bit count of 100-nanosecond ticks since 1582-10-15. The variant bits overwrite the
    /// top bits of the clock sequence and the version bits the top nibble of the tick count, so
    /// only the low 14 bits of `clock_seq` and the low 60 bits of the rebased count survive.
    ///
    /// Fixed inputs make the output fully deterministic; callers of that mode accept
    /// responsibility for collisions.
    ///
    /// # Panics
    ///
    /// Panics if the rebased timestamp does not fit the 60-bit tick field (roughly before
    /// 1582-10-15 or after the year 5236).
    pub const fn from_fields_v1(unix_ts_us: i64, clock_seq: u16, node: [u8; 6]) -> Self {
        if unix_ts_us < UNIX_TS_US_MIN || unix_ts_us > UNIX_TS_US_MAX {
            panic!("`unix_ts_us` out of range for a time-based UUID");
        }

        let ticks = (unix_ts_us * 10 + UNIX_EPOCH_TICKS).to_be_bytes();
        Self([
            ticks[4],
            ticks[5],
            ticks[6],
            ticks[7],
            ticks[2],
            ticks[3],
            (ticks[0] & 0x0f) | 0x10,
            ticks[1],
            (((clock_seq >> 8) as u8) & 0x3f) | 0x80,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates the smallest version 1 UUID for a timestamp, for use as the lower fence post of a
    /// range scan over a time-ordered index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let since = Uuid::min_timeuuid(1_234_567_890_123_456);
    /// let until = Uuid::max_timeuuid(1_234_567_890_123_456);
    /// assert!(since < until);
    /// assert_eq!(since.timestamp_micros(), until.timestamp_micros());
    /// ```
    pub const fn min_timeuuid(unix_ts_us: i64) -> Self {
        Self::from_fields_v1(unix_ts_us, SEQ_MIN, NODE_MIN)
    }

    /// Creates the largest version 1 UUID for a timestamp, for use as the upper fence post of a
    /// range scan over a time-ordered index.
    pub const fn max_timeuuid(unix_ts_us: i64) -> Self {
        Self::from_fields_v1(unix_ts_us, SEQ_MAX, NODE_MAX)
    }

    /// Imports an existing UUID from its binary, hexadecimal, canonical, or URN representation.
    ///
    /// The input passes through [`fixed_bytes`]; no semantic validation is applied beyond the
    /// 128-bit width, so imported values may carry any version nibble.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let a = Uuid::import("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// let b = Uuid::import("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}")?;
    /// assert_eq!(a, b);
    /// assert_eq!(a, Uuid::NAMESPACE_DNS);
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn import(src: impl AsRef<[u8]>) -> Result<Self, Error> {
        fixed_bytes(src).map(Self)
    }

    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "13814000-1dd2-11b2-8000-000000000000".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "13814000-1dd2-11b2-8000-000000000000");
    /// # Ok::<(), rfc4122::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for i in 0..16 {
            let e = self.0[i] as usize;
            *buf_iter.next().unwrap() = DIGITS[e >> 4];
            *buf_iter.next().unwrap() = DIGITS[e & 15];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the unseparated 32-digit hexadecimal representation.
    pub fn encode_hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (i, e) in self.0.iter().enumerate() {
            buffer[i * 2] = DIGITS[(e >> 4) as usize];
            buffer[i * 2 + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the URN representation: `urn:uuid:` followed by the canonical form.
    pub fn encode_urn(&self) -> FStr<45> {
        let mut buffer = [0u8; 45];
        buffer[..9].copy_from_slice(b"urn:uuid:");
        buffer[9..].copy_from_slice(self.encode().as_bytes());
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the version number recorded in the high nibble of octet 6.
    ///
    /// The nibble is returned as-is. It is only meaningful for values produced by a mint
    /// operation; imported values may carry any number in `0..=15` because import validates
    /// width, not semantics.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant (layout family) recorded in the high bits of octet 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] {
            0x00..=0x7f => Variant::Ncs,
            0x80..=0xbf => Variant::Rfc4122,
            0xc0..=0xdf => Variant::Microsoft,
            0xe0..=0xff => Variant::Reserved,
        }
    }

    /// Returns the node (MAC-like) field, or `None` if the version nibble does not mark a
    /// time-based UUID.
    pub const fn node(&self) -> Option<[u8; 6]> {
        if self.version() == 1 {
            let b = &self.0;
            Some([b[10], b[11], b[12], b[13], b[14], b[15]])
        } else {
            None
        }
    }

    /// Returns the embedded timestamp as microseconds since the Unix epoch, or `None` if the
    /// version nibble does not mark a time-based UUID.
    ///
    /// The scattered time fields are reassembled into the 60-bit tick count, rebased from the
    /// Gregorian reform epoch, and divided by ten; a value encoded from microseconds decodes to
    /// the same microseconds.
    pub const fn timestamp_micros(&self) -> Option<i64> {
        if self.version() == 1 {
            let b = &self.0;
            let ticks =
                u64::from_be_bytes([b[6] & 0x0f, b[7], b[4], b[5], b[0], b[1], b[2], b[3]]);
            Some((ticks as i64 - UNIX_EPOCH_TICKS) / 10)
        } else {
            None
        }
    }
}

/// Normalizes a binary or hexadecimal identifier field into exactly `N` bytes.
///
/// An input of exactly `N` bytes is taken verbatim as raw binary, even if it happens to look
/// like hexadecimal text. Any other input is treated as text: a leading `urn:uuid:` scheme is
/// stripped case-insensitively, every character outside `[0-9a-fA-F]` is discarded, and the
/// surviving digits must decode to exactly `N` bytes.
///
/// This is the normalization applied to node, clock sequence, and namespace arguments as well as
/// to whole-UUID imports, so all of them accept raw bytes, bare hex, canonical hyphenated,
/// braced, or URN forms interchangeably.
///
/// # Examples
///
/// ```rust
/// use rfc4122::fixed_bytes;
///
/// assert_eq!(fixed_bytes::<2, _>("7F7F"), Ok([0x7f, 0x7f]));
/// assert_eq!(fixed_bytes::<2, _>([0x7f, 0x7f]), Ok([0x7f, 0x7f]));
/// assert!(fixed_bytes::<2, _>("7F7F7F").is_err());
/// ```
pub fn fixed_bytes<const N: usize, S: AsRef<[u8]>>(src: S) -> Result<[u8; N], Error> {
    let src = src.as_ref();
    let mut buffer = [0u8; N];
    if src.len() == N {
        buffer.copy_from_slice(src);
        return Ok(buffer);
    }

    let src = if src.len() >= 9 && src[..9].eq_ignore_ascii_case(b"urn:uuid:") {
        &src[9..]
    } else {
        src
    };

    let mut digits = 0;
    for &c in src {
        let d = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => continue,
        };
        if digits == 2 * N {
            return Err(Error::InvalidInput("too many hexadecimal digits"));
        }
        buffer[digits / 2] = (buffer[digits / 2] << 4) | d;
        digits += 1;
    }

    if digits == 2 * N {
        Ok(buffer)
    } else {
        Err(Error::InvalidInput("wrong number of hexadecimal digits"))
    }
}

/// Compares the binary representations of two UUID-like inputs after normalization.
///
/// Returns `true` if both inputs normalize to the same 16 bytes, or if neither normalizes at
/// all; a valid input never equals an invalid one. Treating two unparseable inputs as equal is a
/// deliberate comparator policy, not a swallowed failure.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{compare, Uuid};
///
/// assert!(compare(Uuid::NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
/// assert!(compare("garbage", "also-garbage"));
/// assert!(!compare(Uuid::NAMESPACE_DNS, "garbage"));
/// ```
pub fn compare(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    let a: Result<[u8; 16], _> = fixed_bytes(a);
    let b: Result<[u8; 16], _> = fixed_bytes(b);
    a.ok() == b.ok()
}

/// The variant (layout family) of a UUID, classified from octet 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// The NCS backward compatibility range (`0xx`).
    Ncs,
    /// The RFC 4122 range (`10x`); everything this crate mints.
    Rfc4122,
    /// The Microsoft GUID range (`110`).
    Microsoft,
    /// The range reserved for future definition (`111`).
    Reserved,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from a hexadecimal string representation: canonical hyphenated, bare
    /// hex, braced, and URN forms are all accepted. See [`fixed_bytes`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::import(src)
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
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        match <[u8; 16]>::try_from(src) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => Err(Error::InvalidInput("input must be a 128-bit value")),
        }
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
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
