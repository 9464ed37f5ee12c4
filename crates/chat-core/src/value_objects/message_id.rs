//! Message ID - opaque identifier of the message a reaction bar belongs to
//!
//! The client never interprets the value. It is carried verbatim from the
//! backend payload to every reaction request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque message identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MessageId(String);

impl MessageId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw identifier
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for MessageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Backends emit either numeric or string ids; keep the textual form either way
impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct MessageIdVisitor;

        impl Visitor<'_> for MessageIdVisitor {
            type Value = MessageId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer message id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId(value.to_string()))
            }
        }

        deserializer.deserialize_any(MessageIdVisitor)
    }
}
