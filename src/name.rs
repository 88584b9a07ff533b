//! Name-based (hashed) UUID minting.

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::id::fixed_bytes;
use crate::{Error, Uuid};

/// Mints a version 3 (MD5 name-based) UUID from a name and its namespace.
///
/// The digest is computed over the namespace bytes followed by the name bytes, so the output is
/// deterministic: the same name in the same namespace always yields the same value. The
/// namespace accepts anything [`fixed_bytes`] normalizes to 16 bytes: a [`Uuid`] value such as
/// [`Uuid::NAMESPACE_DNS`], raw bytes, or a hexadecimal/URN string.
///
/// An empty name or a namespace that does not normalize is an [`Error::InvalidInput`].
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid3, Uuid};
///
/// let uuid = uuid3("python.org", Uuid::NAMESPACE_DNS)?;
/// assert_eq!(&uuid.encode() as &str, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid3(name: impl AsRef<[u8]>, namespace: impl AsRef<[u8]>) -> Result<Uuid, Error> {
    let name = name_bytes(name.as_ref())?;
    let ns = namespace_bytes(namespace.as_ref())?;
    let digest = Md5::new_with_prefix(ns).chain_update(name).finalize();
    Ok(apply_bits(digest.into(), 0x30))
}

/// Mints a version 5 (SHA-1 name-based) UUID from a name and its namespace.
///
/// Identical to [`uuid3`] except that the digest is SHA-1 and only its first 16 of 20 bytes are
/// kept.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid5, Uuid};
///
/// let uuid = uuid5("python.org", Uuid::NAMESPACE_DNS)?;
/// assert_eq!(&uuid.encode() as &str, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid5(name: impl AsRef<[u8]>, namespace: impl AsRef<[u8]>) -> Result<Uuid, Error> {
    let name = name_bytes(name.as_ref())?;
    let ns = namespace_bytes(namespace.as_ref())?;
    let digest = Sha1::new_with_prefix(ns).chain_update(name).finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Ok(apply_bits(bytes, 0x50))
}

fn name_bytes(name: &[u8]) -> Result<&[u8], Error> {
    if name.is_empty() {
        Err(Error::InvalidInput(
            "a name-string is required for name-based UUIDs",
        ))
    } else {
        Ok(name)
    }
}

fn namespace_bytes(namespace: &[u8]) -> Result<[u8; 16], Error> {
    fixed_bytes(namespace).map_err(|_| {
        Error::InvalidInput("a binary namespace is required for name-based UUIDs")
    })
}

/// Overwrites the variant and version fields of freshly hashed bytes.
fn apply_bits(mut bytes: [u8; 16], version: u8) -> Uuid {
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes[6] = (bytes[6] & 0x0f) | version;
    Uuid::from(bytes)
}
