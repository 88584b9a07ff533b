use super::*;
use crate::id::{NODE_MAX, SEQ_MAX};
use crate::{Error, Uuid, Variant};

/// A rollover counter standing in for the random source, so every draw is predictable.
struct CountingRandSource(u8);

impl RandSource for CountingRandSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for e in dest {
            self.0 = self.0.wrapping_add(1);
            *e = self.0;
        }
    }
}

/// A frozen clock.
struct FixedTime(i64);

impl TimeSource for FixedTime {
    fn unix_ts_us(&mut self) -> i64 {
        self.0
    }
}

const TS: i64 = 1_234_567_890_123_456;

fn new_minter() -> Minter<CountingRandSource, FixedTime> {
    Minter::with_rand_and_time_sources(CountingRandSource(0), FixedTime(TS))
}

/// Dispatches mint requests by version number
#[test]
fn dispatches_mint_requests_by_version_number() {
    let mut g = new_minter();

    let v1 = g.mint(1).unwrap();
    assert_eq!(v1.version(), 1);
    assert_eq!(v1.variant(), Variant::Rfc4122);

    let v4 = g.mint(4).unwrap();
    assert_eq!(v4.version(), 4);
    assert_eq!(v4.variant(), Variant::Rfc4122);

    assert_eq!(g.mint(2), Err(Error::UnsupportedVersion(2)));
    for version in [0u8, 6, 7, 8, 16, 255] {
        assert_eq!(g.mint(version), Err(Error::UnsupportedVersion(version)));
    }
    for version in [3u8, 5] {
        assert!(matches!(g.mint(version), Err(Error::InvalidInput(_))));
    }
}

/// Encodes the clock reading and marks the random node as multicast
#[test]
fn encodes_the_clock_reading_and_marks_the_random_node_as_multicast() {
    let mut g = new_minter();
    let e = g.time_uuid();
    assert_eq!(e.timestamp_micros(), Some(TS));
    // The counting source yields 01 02 for the sequence, then 03..08 for the node; the variant
    // bits land in octet 8 and the multicast bit is ORed into the node's first byte.
    assert_eq!(e.as_bytes()[8..10], [0x81, 0x02]);
    assert_eq!(e.node(), Some([0x03, 0x04, 0x05, 0x06, 0x07, 0x08]));
    assert_eq!(e.node().unwrap()[0] & 1, 1);

    let mut g = Minter::with_rand_and_time_sources(CountingRandSource(0x11), FixedTime(TS));
    // Sequence draws 12 13; the node draws 14..19 and 14 becomes 15 under the multicast bit.
    assert_eq!(
        g.time_uuid().node(),
        Some([0x15, 0x15, 0x16, 0x17, 0x18, 0x19])
    );
}

/// Honors explicit timestamp, node, and sequence overrides
#[test]
fn honors_explicit_timestamp_node_and_sequence_overrides() {
    let mut g = new_minter();
    let e = g
        .time_uuid_core(Some(TS), Some(&b"AAAAAAAAAAAA"[..]), Some(&b"1234"[..]))
        .unwrap();
    assert_eq!(&e.encode() as &str, "70ec8b80-fa26-11dd-9234-aaaaaaaaaaaa");
    assert_eq!(e.timestamp_micros(), Some(TS));
    assert_eq!(e.node(), Some([0xaa; 6]));

    // Raw binary forms of the same overrides produce the same value.
    let raw = g
        .time_uuid_core(Some(TS), Some(&[0xaa; 6][..]), Some(&[0x12, 0x34][..]))
        .unwrap();
    assert_eq!(raw, e);

    // Fully pinned inputs are deterministic across minters.
    let again = new_minter()
        .time_uuid_core(Some(TS), Some(&b"AAAAAAAAAAAA"[..]), Some(&b"1234"[..]))
        .unwrap();
    assert_eq!(again, e);
}

/// Falls back to clock and random defaults for absent overrides
#[test]
fn falls_back_to_clock_and_random_defaults_for_absent_overrides() {
    let mut g = new_minter();
    let e = g.time_uuid_core(None, None, None).unwrap();
    assert_eq!(e.timestamp_micros(), Some(TS));
    assert_eq!(e.node().unwrap()[0] & 1, 1);

    // An unusable node override degrades to a random multicast node rather than failing.
    let e = g.time_uuid_core(Some(TS), Some(&b"zzz"[..]), None).unwrap();
    assert_eq!(e.node().unwrap()[0] & 1, 1);

    // An unusable sequence override is an error.
    assert!(g
        .time_uuid_core(Some(TS), None, Some(&b"zzz"[..]))
        .is_err());
    assert!(g
        .time_uuid_core(Some(TS), None, Some(&b"123456"[..]))
        .is_err());
}

/// Matches the fence post constructors when pinned to the boundary inputs
#[test]
fn matches_the_fence_post_constructors_when_pinned_to_the_boundary_inputs() {
    let mut g = new_minter();
    let max = g
        .time_uuid_core(Some(TS), Some(&b"7F7F7F7F7F7F"[..]), Some(&b"7F7F"[..]))
        .unwrap();
    assert_eq!(max, Uuid::max_timeuuid(TS));
    assert_eq!(max, Uuid::from_fields_v1(TS, SEQ_MAX, NODE_MAX));

    let min = g
        .time_uuid_core(Some(TS), Some(&b"808080808080"[..]), Some(&b"8080"[..]))
        .unwrap();
    assert_eq!(min, Uuid::min_timeuuid(TS));
    assert!(min < max);
}

/// Masks the version and variant fields of random UUIDs
#[test]
fn masks_the_version_and_variant_fields_of_random_uuids() {
    let mut g = new_minter();
    let e = g.random_uuid();
    // Counting source yields 01..10; octets 6 and 8 keep only their low nibble/sextet.
    assert_eq!(
        e.as_bytes(),
        &[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x47, 0x08, 0x89, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f, 0x10,
        ]
    );
    assert_eq!(e.version(), 4);
    assert_eq!(e.variant(), Variant::Rfc4122);
    assert_ne!(g.random_uuid(), e);
}

/// Reads the system clock through the std time source
#[cfg(feature = "std")]
#[test]
fn reads_the_system_clock_through_the_std_time_source() {
    use std::time;
    let now = time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .unwrap()
        .as_micros() as i64;
    let e = Minter::with_rand_and_time_sources(CountingRandSource(0), StdSystemTime).time_uuid();
    let diff = e.timestamp_micros().unwrap() - now;
    assert!(diff.abs() < 10_000_000, "diff: {}", diff);
}

/// Produces a new time-based UUID for each iterator step
#[test]
fn produces_a_new_time_based_uuid_for_each_iterator_step() {
    let g = new_minter();
    let items: Vec<_> = g.take(4).collect();
    assert_eq!(items.len(), 4);
    for e in &items {
        assert_eq!(e.version(), 1);
        assert_eq!(e.timestamp_micros(), Some(TS));
    }
    // The random sequence and node advance between steps.
    assert_ne!(items[0], items[1]);
}
