//! Digest computation for records and host identities.
//!
//! ## Digest Types
//!
//! - **Identity digest**: hash of `easi:node`. Independent of snapshot
//!   content, so every snapshot from one host shares it.
//! - **Record digest**: hash of every record field in declaration order.
//!   Diagnostic only; not used to deduplicate live data.
//!
//! All digests are hex-encoded SHA256 (64 characters).

use sha2::{Digest, Sha256};

/// Compute the identity digest of a host.
///
/// ## Example
///
/// ```
/// use appconfig_core::digest::identity_digest;
///
/// let a = identity_digest("srv:wm:app:packapi", "srv24w0m15");
/// let b = identity_digest("srv:wm:app:packapi", "srv24w0m15");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn identity_digest(easi: &str, node: &str) -> String {
    hash_string(&format!("{}:{}", easi, node))
}

/// Hash an ordered list of fields.
///
/// Each field is length-prefixed so that moving bytes between adjacent
/// fields changes the digest.
pub fn fields_digest<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hasher = Sha256::new();
    for field in fields {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Hash a string using SHA256.
pub fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
