//! The NVP wire encoding: ordered request parameter sets and the flat
//! key-value records the gateway answers with.

use serde::{Deserialize, Serialize};

use crate::types::{Ack, Record, Token};

/// Ordered name-value parameter set for one outbound call.
///
/// Insertion order is preserved on the wire. `set` overwrites in place, so
/// a parameter assigned twice keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NvpForm(Vec<(String, String)>);

impl NvpForm {
    pub fn new() -> Self {
        NvpForm(Vec::new())
    }

    /// Sets a parameter, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Chaining form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Folds `other` into this set, overwriting duplicates in place.
    pub fn extend(&mut self, other: NvpForm) {
        for (name, value) in other.0 {
            self.set(name, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Serialize for NvpForm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Flat record of NVP keys to values decoded from a response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NvpResponse(Record<String>);

impl NvpResponse {
    /// Decodes a urlencoded response body. An empty body is an empty record.
    pub fn parse(body: &str) -> crate::errors::Result<Self> {
        Ok(NvpResponse(serde_urlencoded::from_str(body)?))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Acknowledgment code, when the gateway sent one.
    pub fn ack(&self) -> Option<Ack> {
        self.get("ACK").map(Ack::from)
    }

    pub fn token(&self) -> Option<Token> {
        self.get("TOKEN").map(Token::from)
    }

    /// Indexed `L_LONGMESSAGE{n}` error description.
    pub fn long_message(&self, index: usize) -> Option<&str> {
        self.0.get(&format!("L_LONGMESSAGE{index}")).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn into_inner(self) -> Record<String> {
        self.0
    }
}

impl From<Record<String>> for NvpResponse {
    fn from(record: Record<String>) -> Self {
        NvpResponse(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_first_position_on_overwrite() {
        let mut form = NvpForm::new().with("A", "1").with("B", "2");
        form.set("A", "3");
        let pairs: Vec<_> = form.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn extend_overwrites_in_place() {
        let mut form = NvpForm::new().with("METHOD", "SetExpressCheckout").with("AMT", "1.00");
        form.extend(NvpForm::new().with("AMT", "2.00").with("TOKEN", "EC-1"));
        let pairs: Vec<_> = form.iter().collect();
        assert_eq!(
            pairs,
            vec![("METHOD", "SetExpressCheckout"), ("AMT", "2.00"), ("TOKEN", "EC-1")]
        );
    }

    #[test]
    fn serializes_as_urlencoded_pairs() {
        let form = NvpForm::new().with("USER", "merchant").with("DESC", "two words");
        let encoded = serde_urlencoded::to_string(&form).unwrap();
        assert_eq!(encoded, "USER=merchant&DESC=two+words");
    }

    #[test]
    fn parses_flat_body() {
        let response = NvpResponse::parse("ACK=Success&TOKEN=EC-1A2B&L_LONGMESSAGE0=Oops").unwrap();
        assert_eq!(response.ack(), Some(Ack::Success));
        assert_eq!(response.token(), Some(Token::from("EC-1A2B")));
        assert_eq!(response.long_message(0), Some("Oops"));
        assert_eq!(response.long_message(1), None);
    }

    #[test]
    fn parses_percent_encoded_values() {
        let response =
            NvpResponse::parse("PAYMENTREQUEST_0_CUSTOM=INV-1%7C10.00%7C&DESC=a+b").unwrap();
        assert_eq!(response.get("PAYMENTREQUEST_0_CUSTOM"), Some("INV-1|10.00|"));
        assert_eq!(response.get("DESC"), Some("a b"));
    }

    #[test]
    fn empty_body_is_empty_record() {
        let response = NvpResponse::parse("").unwrap();
        assert!(response.is_empty());
        assert_eq!(response.ack(), None);
    }
}
