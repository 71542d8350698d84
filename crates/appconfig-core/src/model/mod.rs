pub mod record;

pub use record::{endpoint_application_domain, Record, RecordKind};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default instead of failing.
///
/// Hosts emit `null` for absent templates and application domains; every
/// field is treated the same way so a single missing value never rejects an
/// otherwise valid snapshot.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
