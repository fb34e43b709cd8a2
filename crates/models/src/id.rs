use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ModelError;

/// Record identifier: the lowercase hex form of a 12-byte store id.
///
/// Only constructible through [`RecordId::parse`] or from a store-issued
/// `ObjectId`, so holding one means the string is well formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Number of hex characters in a valid identifier.
    pub const LEN: usize = 24;

    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        if raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(ModelError::MalformedId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store-native form, for repository code only.
    pub fn to_object_id(&self) -> Result<ObjectId, ModelError> {
        ObjectId::parse_str(&self.0).map_err(|_| ModelError::MalformedId(self.0.clone()))
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid.to_hex())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RecordId::parse(&raw).map_err(de::Error::custom)
    }
}
