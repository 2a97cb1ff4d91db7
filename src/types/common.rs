use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub type Record<V> = std::collections::HashMap<String, V>;

/// Classic NVP API version pinned by this client.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ApiVersion {
    V121,
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ApiVersion::V121 => serializer.serialize_str("121"),
        }
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = String::deserialize(deserializer)?;
        match v.as_str() {
            "121" => Ok(ApiVersion::V121),
            _ => Err(serde::de::Error::custom(format!(
                "Unknown NVP API version: {}",
                v
            ))),
        }
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::V121 => write!(f, "121"),
        }
    }
}

/// Opaque checkout token issued by `SetExpressCheckout`.
///
/// Identifies one checkout session across the redirect and the follow-up
/// calls. The gateway owns the format; no shape is assumed here.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Token(s))
    }
}

/// ISO 4217 three-letter currency code, e.g. `EUR`.
///
/// Passed through to the gateway as given; construction does not validate.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        CurrencyCode(value.to_string())
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        CurrencyCode(value)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyCode(s))
    }
}
