use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Acknowledgment code the gateway attaches to every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ack {
    Success,
    SuccessWithWarning,
    Failure,
    FailureWithWarning,
    Warning,
    /// Any code this client does not know about.
    Other(String),
}

impl Ack {
    /// Strict success. A `SuccessWithWarning` does not count.
    pub fn is_success(&self) -> bool {
        matches!(self, Ack::Success)
    }
}

impl From<&str> for Ack {
    fn from(value: &str) -> Self {
        match value {
            "Success" => Ack::Success,
            "SuccessWithWarning" => Ack::SuccessWithWarning,
            "Failure" => Ack::Failure,
            "FailureWithWarning" => Ack::FailureWithWarning,
            "Warning" => Ack::Warning,
            other => Ack::Other(other.to_string()),
        }
    }
}

impl Display for Ack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ack::Success => write!(f, "Success"),
            Ack::SuccessWithWarning => write!(f, "SuccessWithWarning"),
            Ack::Failure => write!(f, "Failure"),
            Ack::FailureWithWarning => write!(f, "FailureWithWarning"),
            Ack::Warning => write!(f, "Warning"),
            Ack::Other(code) => write!(f, "{}", code),
        }
    }
}

impl Serialize for Ack {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ack::from(s.as_str()))
    }
}

/// `CHECKOUTSTATUS` reported by `GetExpressCheckoutDetails`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStatus {
    PaymentActionNotInitiated,
    PaymentActionFailed,
    PaymentActionInProgress,
    PaymentActionCompleted,
    Other(String),
}

impl CheckoutStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutStatus::PaymentActionCompleted)
    }
}

impl From<&str> for CheckoutStatus {
    fn from(value: &str) -> Self {
        match value {
            "PaymentActionNotInitiated" => CheckoutStatus::PaymentActionNotInitiated,
            "PaymentActionFailed" => CheckoutStatus::PaymentActionFailed,
            "PaymentActionInProgress" => CheckoutStatus::PaymentActionInProgress,
            "PaymentActionCompleted" => CheckoutStatus::PaymentActionCompleted,
            other => CheckoutStatus::Other(other.to_string()),
        }
    }
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStatus::PaymentActionNotInitiated => write!(f, "PaymentActionNotInitiated"),
            CheckoutStatus::PaymentActionFailed => write!(f, "PaymentActionFailed"),
            CheckoutStatus::PaymentActionInProgress => write!(f, "PaymentActionInProgress"),
            CheckoutStatus::PaymentActionCompleted => write!(f, "PaymentActionCompleted"),
            CheckoutStatus::Other(code) => write!(f, "{}", code),
        }
    }
}

impl Serialize for CheckoutStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CheckoutStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CheckoutStatus::from(s.as_str()))
    }
}

/// `PAYMENTINFO_0_PAYMENTSTATUS` reported by `DoExpressCheckoutPayment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    None,
    CanceledReversal,
    Completed,
    Denied,
    Expired,
    Failed,
    InProgress,
    PartiallyRefunded,
    Pending,
    Processed,
    Refunded,
    Reversed,
    Voided,
    Other(String),
}

impl PaymentStatus {
    /// Only a settled `Completed` payment counts as paid.
    pub fn is_completed(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "None" => PaymentStatus::None,
            "Canceled-Reversal" => PaymentStatus::CanceledReversal,
            "Completed" => PaymentStatus::Completed,
            "Denied" => PaymentStatus::Denied,
            "Expired" => PaymentStatus::Expired,
            "Failed" => PaymentStatus::Failed,
            "In-Progress" => PaymentStatus::InProgress,
            "Partially-Refunded" => PaymentStatus::PartiallyRefunded,
            "Pending" => PaymentStatus::Pending,
            "Processed" => PaymentStatus::Processed,
            "Refunded" => PaymentStatus::Refunded,
            "Reversed" => PaymentStatus::Reversed,
            "Voided" => PaymentStatus::Voided,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::None => write!(f, "None"),
            PaymentStatus::CanceledReversal => write!(f, "Canceled-Reversal"),
            PaymentStatus::Completed => write!(f, "Completed"),
            PaymentStatus::Denied => write!(f, "Denied"),
            PaymentStatus::Expired => write!(f, "Expired"),
            PaymentStatus::Failed => write!(f, "Failed"),
            PaymentStatus::InProgress => write!(f, "In-Progress"),
            PaymentStatus::PartiallyRefunded => write!(f, "Partially-Refunded"),
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Processed => write!(f, "Processed"),
            PaymentStatus::Refunded => write!(f, "Refunded"),
            PaymentStatus::Reversed => write!(f, "Reversed"),
            PaymentStatus::Voided => write!(f, "Voided"),
            PaymentStatus::Other(code) => write!(f, "{}", code),
        }
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PaymentStatus::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_success_is_success() {
        assert!(Ack::from("Success").is_success());
        assert!(!Ack::from("SuccessWithWarning").is_success());
        assert!(!Ack::from("Failure").is_success());
    }

    #[test]
    fn unknown_ack_round_trips() {
        let ack = Ack::from("SomethingNew");
        assert_eq!(ack, Ack::Other("SomethingNew".to_string()));
        assert_eq!(ack.to_string(), "SomethingNew");
    }

    #[test]
    fn checkout_status_completion() {
        assert!(CheckoutStatus::from("PaymentActionCompleted").is_completed());
        assert!(!CheckoutStatus::from("PaymentActionInProgress").is_completed());
    }

    #[test]
    fn payment_status_uses_hyphenated_codes() {
        assert_eq!(PaymentStatus::from("In-Progress"), PaymentStatus::InProgress);
        assert_eq!(PaymentStatus::InProgress.to_string(), "In-Progress");
    }

    #[test]
    fn only_completed_counts_as_paid() {
        assert!(PaymentStatus::Completed.is_completed());
        assert!(!PaymentStatus::Pending.is_completed());
        assert!(!PaymentStatus::Processed.is_completed());
    }
}
