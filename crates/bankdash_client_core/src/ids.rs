//! Strongly-typed IDs. Backend ids are opaque strings; they must be non-empty and
//! free of whitespace and control characters since they end up in URL paths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

fn validate_id(kind: &str, s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err(format!("{} id is empty", kind));
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("{} id contains whitespace or control characters: {:?}", kind, s));
    }
    Ok(s.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

macro_rules! id_type {
    ($name:ident, $kind:literal) => {
        impl $name {
            pub fn parse(s: impl AsRef<str>) -> Result<Self, String> {
                Self::from_str(s.as_ref())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Percent-encoded form for use as a URL path segment.
            pub fn path_segment(&self) -> String {
                urlencoding::encode(&self.0).into_owned()
            }
        }
        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(validate_id($kind, s)?))
            }
        }
        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_str(&self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                // Some backends emit numeric ids.
                let v = serde_json::Value::deserialize(de)?;
                let s = match v {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    other => {
                        return Err(serde::de::Error::custom(format!(
                            "expected {} id, got {}",
                            $kind, other
                        )))
                    }
                };
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
id_type!(UserId, "user");
id_type!(AccountId, "account");
id_type!(TransactionId, "transaction");
