//! Serde support.
//!
//! Identifiers serialize as `N` layout strings, which also makes them usable as JSON map keys.
//! Deserialization accepts any of the five layouts; malformed text surfaces as the parser's
//! error through `serde::de::Error::custom`.

use crate::{Format, Uuid};

impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.formatted(Format::N))
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
