use std::fmt::Display;
use std::str::FromStr;

use crate::errors::Error;

/// Pipe-delimited payload round-tripped through `PAYMENTREQUEST_0_CUSTOM`.
///
/// Wire form is `invoice|amount|currency`. Checkouts started by this client
/// leave the currency segment empty, so parsers must accept both a populated
/// and an empty third segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub invoice_number: String,
    pub amount: String,
    pub currency: String,
}

impl CustomField {
    /// Builds the field as `pay` writes it: currency segment left empty.
    pub fn new(invoice_number: impl Into<String>, amount: impl Into<String>) -> Self {
        CustomField {
            invoice_number: invoice_number.into(),
            amount: amount.into(),
            currency: String::new(),
        }
    }
}

impl Display for CustomField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.invoice_number, self.amount, self.currency)
    }
}

impl FromStr for CustomField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.splitn(3, '|');
        let invoice_number = segments.next().unwrap_or_default();
        let amount = segments
            .next()
            .ok_or_else(|| Error::InvalidCustomField(s.to_string()))?;
        let currency = segments.next().unwrap_or_default();
        Ok(CustomField {
            invoice_number: invoice_number.to_string(),
            amount: amount.to_string(),
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_empty_currency_segment() {
        let custom = CustomField::new("INV-1001", "10.00");
        assert_eq!(custom.to_string(), "INV-1001|10.00|");
    }

    #[test]
    fn parses_two_segment_form() {
        let custom: CustomField = "INV-1001|10.00|".parse().unwrap();
        assert_eq!(custom.invoice_number, "INV-1001");
        assert_eq!(custom.amount, "10.00");
        assert_eq!(custom.currency, "");
    }

    #[test]
    fn parses_populated_currency_segment() {
        let custom: CustomField = "INV-7|42.00|EUR".parse().unwrap();
        assert_eq!(custom.currency, "EUR");
    }

    #[test]
    fn rejects_value_without_separator() {
        let err = "INV-1001".parse::<CustomField>().unwrap_err();
        assert!(matches!(err, Error::InvalidCustomField(_)));
    }

    #[test]
    fn round_trips_through_display() {
        let custom = CustomField::new("INV-9", "5.00");
        let parsed: CustomField = custom.to_string().parse().unwrap();
        assert_eq!(parsed, custom);
    }
}
