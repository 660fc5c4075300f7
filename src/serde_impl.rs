//! A `NanoId` crosses serialization boundaries as a bare string, never as a
//! struct: `{"id":"abc"}`, not `{"id":{"0":"abc"}}`.

use crate::error::NanoIdError;
use crate::id::NanoId;
use crate::parse::parse_id;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const TYPE_NAME: &str = "NanoId";

impl Serialize for NanoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

struct NanoIdVisitor;

impl NanoIdVisitor {
    fn convert<E: de::Error>(value: impl Into<String>) -> Result<NanoId, E> {
        parse_id(value).map_err(|err| {
            let id = match err {
                NanoIdError::InvalidCharacter { id, .. }
                | NanoIdError::ConversionFailed { id, .. } => id,
            };
            E::custom(NanoIdError::ConversionFailed {
                id,
                type_name: TYPE_NAME,
            })
        })
    }
}

impl Visitor<'_> for NanoIdVisitor {
    type Value = NanoId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string of URL-safe ID characters")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::convert(value)
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::convert(value)
    }
}

impl<'de> Deserialize<'de> for NanoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(NanoIdVisitor)
    }
}
