use serde::{Deserialize, Serialize};
use url::Url;

use crate::nvp::NvpResponse;

use super::{Ack, Amount, CheckoutStatus, PaymentStatus, Token};

/// Successful `SetExpressCheckout` outcome: where to send the payer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRedirect {
    /// Hosted approval page with the token already attached.
    pub url: Url,
    pub token: Token,
    /// Raw response record, for fields not lifted into this type.
    pub response: NvpResponse,
}

/// Typed view over a `GetExpressCheckoutDetails` record.
///
/// Every field is optional; the gateway omits what does not apply to the
/// checkout's current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub ack: Option<Ack>,
    pub token: Option<Token>,
    pub checkout_status: Option<CheckoutStatus>,
    pub payer_id: Option<String>,
    pub payer_email: Option<String>,
    pub invoice_number: Option<String>,
    pub amount: Option<Amount>,
    /// `PAYMENTREQUEST_0_CUSTOM` exactly as returned.
    pub custom: Option<String>,
    pub correlation_id: Option<String>,
    /// Raw response record.
    pub response: NvpResponse,
}

impl From<NvpResponse> for CheckoutDetails {
    fn from(response: NvpResponse) -> Self {
        CheckoutDetails {
            ack: response.ack(),
            token: response.token(),
            checkout_status: response.get("CHECKOUTSTATUS").map(CheckoutStatus::from),
            payer_id: response.get("PAYERID").map(str::to_string),
            payer_email: response.get("EMAIL").map(str::to_string),
            invoice_number: response.get("INVNUM").map(str::to_string),
            amount: response.get("PAYMENTREQUEST_0_AMT").map(Amount::from),
            custom: response.get("PAYMENTREQUEST_0_CUSTOM").map(str::to_string),
            correlation_id: response.get("CORRELATIONID").map(str::to_string),
            response,
        }
    }
}

/// Typed view over a `DoExpressCheckoutPayment` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCompletion {
    pub ack: Option<Ack>,
    pub token: Option<Token>,
    pub payment_status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
    pub amount: Option<Amount>,
    pub pending_reason: Option<String>,
    pub correlation_id: Option<String>,
    /// Raw response record.
    pub response: NvpResponse,
}

impl From<NvpResponse> for PaymentCompletion {
    fn from(response: NvpResponse) -> Self {
        PaymentCompletion {
            ack: response.ack(),
            token: response.token(),
            payment_status: response
                .get("PAYMENTINFO_0_PAYMENTSTATUS")
                .map(PaymentStatus::from),
            transaction_id: response.get("PAYMENTINFO_0_TRANSACTIONID").map(str::to_string),
            amount: response.get("PAYMENTINFO_0_AMT").map(Amount::from),
            pending_reason: response.get("PAYMENTINFO_0_PENDINGREASON").map(str::to_string),
            correlation_id: response.get("CORRELATIONID").map(str::to_string),
            response,
        }
    }
}

/// Outcome of the detail step, with the completion call when one was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Whether the order counts as paid. True when the checkout was already
    /// settled, when completion was not requested, or when the completion
    /// call came back `Completed`.
    pub paid: bool,
    pub details: CheckoutDetails,
    /// Present only when `DoExpressCheckoutPayment` was issued.
    pub completion: Option<PaymentCompletion>,
}

impl PaymentResult {
    /// Record of the last call made: the completion when one was issued,
    /// the details record otherwise.
    pub fn response(&self) -> &NvpResponse {
        match &self.completion {
            Some(completion) => &completion.response,
            None => &self.details.response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifts_detail_fields() {
        let response = NvpResponse::parse(
            "ACK=Success&TOKEN=EC-9&CHECKOUTSTATUS=PaymentActionInProgress\
             &PAYERID=PYR1&EMAIL=buyer%40example.com&INVNUM=INV-9\
             &PAYMENTREQUEST_0_AMT=42.00&PAYMENTREQUEST_0_CUSTOM=INV-9%7C42.00%7C",
        )
        .unwrap();
        let details = CheckoutDetails::from(response);
        assert_eq!(details.ack, Some(Ack::Success));
        assert_eq!(details.payer_id.as_deref(), Some("PYR1"));
        assert_eq!(details.payer_email.as_deref(), Some("buyer@example.com"));
        assert_eq!(
            details.checkout_status,
            Some(CheckoutStatus::PaymentActionInProgress)
        );
        assert_eq!(details.custom.as_deref(), Some("INV-9|42.00|"));
        assert_eq!(details.response.get("INVNUM"), Some("INV-9"));
    }

    #[test]
    fn absent_fields_stay_none() {
        let details = CheckoutDetails::from(NvpResponse::parse("ACK=Success").unwrap());
        assert_eq!(details.token, None);
        assert_eq!(details.payer_id, None);
        assert_eq!(details.checkout_status, None);
    }

    #[test]
    fn result_response_prefers_completion() {
        let details =
            CheckoutDetails::from(NvpResponse::parse("CHECKOUTSTATUS=PaymentActionInProgress").unwrap());
        let completion =
            PaymentCompletion::from(NvpResponse::parse("PAYMENTINFO_0_PAYMENTSTATUS=Completed").unwrap());
        let result = PaymentResult {
            paid: true,
            details,
            completion: Some(completion),
        };
        assert_eq!(
            result.response().get("PAYMENTINFO_0_PAYMENTSTATUS"),
            Some("Completed")
        );
    }
}
