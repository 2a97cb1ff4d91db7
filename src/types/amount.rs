use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Monetary amount held in the gateway's wire form.
///
/// Construction normalizes the value to exactly two decimal digits:
/// the first comma becomes a dot, a missing fraction becomes `.00`, a
/// single fractional digit gains a trailing zero, and anything past two
/// fractional digits is cut off without rounding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount(String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(raw: &str) -> String {
        let mut value = raw.replacen(',', ".", 1);
        match value.find('.') {
            Some(index) => {
                let fraction = value.len() - index - 1;
                if fraction == 1 {
                    value.push('0');
                } else if fraction > 2 {
                    value.truncate(index + 3);
                }
            }
            None => value.push_str(".00"),
        }
        value
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(Amount::normalize(value))
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount(Amount::normalize(&value))
    }
}

impl From<u8> for Amount {
    fn from(value: u8) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<u16> for Amount {
    fn from(value: u16) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<f32> for Amount {
    fn from(value: f32) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(Amount::normalize(&value.to_string()))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Amount::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_missing_fraction() {
        assert_eq!(Amount::from("5").as_str(), "5.00");
        assert_eq!(Amount::from(5u32).as_str(), "5.00");
    }

    #[test]
    fn pads_single_fractional_digit() {
        assert_eq!(Amount::from("5.1").as_str(), "5.10");
    }

    #[test]
    fn truncates_without_rounding() {
        assert_eq!(Amount::from("5.999").as_str(), "5.99");
        assert_eq!(Amount::from("10.005").as_str(), "10.00");
    }

    #[test]
    fn accepts_comma_as_decimal_separator() {
        assert_eq!(Amount::from("7,5").as_str(), "7.50");
    }

    #[test]
    fn keeps_two_fractional_digits_as_is() {
        assert_eq!(Amount::from("12.34").as_str(), "12.34");
    }

    #[test]
    fn trailing_separator_stays_untouched() {
        assert_eq!(Amount::from("5.").as_str(), "5.");
    }

    #[test]
    fn converts_from_floats() {
        assert_eq!(Amount::from(49.9f64).as_str(), "49.90");
        assert_eq!(Amount::from(0.1f64 + 0.2f64).as_str(), "0.30");
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Amount::from(7u64).to_string(), "7.00");
    }
}
