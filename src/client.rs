//! The Express Checkout client: credential handling and the three-call
//! protocol sequence on top of the NVP transport.

use url::Url;

use crate::{
    config::{ClientConfig, Credentials, DetailOptions, Environment, Payment},
    errors::{Error, Result},
    nvp::{NvpForm, NvpResponse},
    transport::{HttpMethod, NvpTransport},
    types::{
        ApiVersion, CheckoutDetails, CheckoutRedirect, CheckoutStatus, CustomField,
        PaymentCompletion, PaymentResult, PaymentStatus, Token,
    },
};

const SET_EXPRESS_CHECKOUT: &str = "SetExpressCheckout";
const GET_EXPRESS_CHECKOUT_DETAILS: &str = "GetExpressCheckoutDetails";
const DO_EXPRESS_CHECKOUT_PAYMENT: &str = "DoExpressCheckoutPayment";

/// `SOLUTIONTYPE` sent with every call. `Mark` means the payer checks out
/// with a PayPal account.
const SOLUTION_TYPE: &str = "Mark";

/// Express Checkout client over the Classic NVP API.
///
/// Holds credentials, resolved endpoints and the transport. Nothing is
/// mutated after construction, so one instance can be shared freely across
/// concurrent calls; cloning is cheap.
#[derive(Debug, Clone)]
pub struct ExpressCheckout {
    config: ClientConfig,
    api_url: Url,
    redirect_url: Url,
    transport: NvpTransport,
}

impl ExpressCheckout {
    /// Creates a client for the given credentials and environment with the
    /// default request timeout.
    pub fn new(credentials: Credentials, environment: Environment) -> Self {
        Self::with_config(
            ClientConfig::builder()
                .credentials(credentials)
                .environment(environment)
                .build(),
        )
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let api_url = config.environment.api_url();
        let redirect_url = config.environment.redirect_url();
        let transport = NvpTransport::new(config.timeout);
        ExpressCheckout {
            config,
            api_url,
            redirect_url,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parameters carried by every call, in wire order.
    fn base_form(&self, method: &str) -> NvpForm {
        NvpForm::new()
            .with("USER", &self.config.credentials.username)
            .with("PWD", &self.config.credentials.password)
            .with("SIGNATURE", &self.config.credentials.signature)
            .with("SOLUTIONTYPE", SOLUTION_TYPE)
            .with("VERSION", ApiVersion::V121.to_string())
            .with("METHOD", method)
    }

    /// Issues one API call: the base parameter set plus `params`, POSTed to
    /// the NVP endpoint.
    ///
    /// This is the raw layer `pay` and `detail` sit on. Any other NVP
    /// method can be reached through it; the response record comes back
    /// undigested.
    pub async fn call(&self, method: &str, params: NvpForm) -> Result<NvpResponse> {
        let mut form = self.base_form(method);
        form.extend(params);

        #[cfg(feature = "tracing")]
        tracing::debug!("Calling '{}' with {} parameters", method, form.len());

        self.transport.send(&self.api_url, HttpMethod::Post, &form).await
    }

    /// Hosted approval page URL for a checkout token.
    pub fn approval_url(&self, token: &Token) -> Result<Url> {
        Ok(Url::parse_with_params(
            self.redirect_url.as_str(),
            [
                ("cmd", "_express-checkout"),
                ("useraction", "commit"),
                ("token", token.as_str()),
            ],
        )?)
    }

    /// Starts a checkout with `SetExpressCheckout`.
    ///
    /// On success the returned redirect carries the token and the approval
    /// URL to send the payer to. A response without a strict `Success`
    /// acknowledgment becomes [`Error::Gateway`] with the gateway's own
    /// long message.
    pub async fn pay(&self, payment: Payment) -> Result<CheckoutRedirect> {
        let amount = payment.amount.to_string();
        let custom = CustomField::new(&payment.invoice_number, &amount);

        let params = NvpForm::new()
            .with("PAYMENTACTION", "Sale")
            .with("PAYMENTREQUEST_0_AMT", &amount)
            .with("RETURNURL", payment.return_url.as_str())
            .with("CANCELURL", payment.cancel_url.as_str())
            .with("PAYMENTREQUEST_0_DESC", &payment.description)
            .with("NOSHIPPING", "1")
            .with("ALLOWNOTE", "1")
            .with("PAYMENTREQUEST_0_CURRENCYCODE", payment.currency.as_str())
            .with("INVNUM", &payment.invoice_number)
            .with("PAYMENTREQUEST_0_CUSTOM", custom.to_string());

        let response = self.call(SET_EXPRESS_CHECKOUT, params).await?;

        if !response.ack().is_some_and(|ack| ack.is_success()) {
            return Err(Error::Gateway {
                ack: response.get("ACK").unwrap_or_default().to_string(),
                message: response.long_message(0).unwrap_or_default().to_string(),
            });
        }

        let token = response.token().ok_or(Error::MissingField("TOKEN"))?;
        let url = self.approval_url(&token)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Checkout started: token='{}'", token);

        Ok(CheckoutRedirect {
            url,
            token,
            response,
        })
    }

    /// Fetches checkout details with `GetExpressCheckoutDetails` and, when
    /// warranted, settles the order with `DoExpressCheckoutPayment`.
    ///
    /// The completion call is skipped when `options.complete` is off or the
    /// checkout status already reads `PaymentActionCompleted`; both cases
    /// come back as paid with no completion record. Otherwise the amount
    /// embedded in the custom field is charged against the payer, and paid
    /// reflects whether the payment status landed on `Completed`.
    pub async fn detail(&self, token: &Token, options: DetailOptions) -> Result<PaymentResult> {
        let params = NvpForm::new().with("TOKEN", token.as_str());
        let response = self.call(GET_EXPRESS_CHECKOUT_DETAILS, params).await?;
        let details = CheckoutDetails::from(response);

        let already_completed = details
            .checkout_status
            .as_ref()
            .is_some_and(CheckoutStatus::is_completed);
        if !options.complete || already_completed {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Skipping payment completion: already_completed={}",
                already_completed
            );
            return Ok(PaymentResult {
                paid: true,
                details,
                completion: None,
            });
        }

        let custom: CustomField = details
            .custom
            .as_deref()
            .ok_or(Error::MissingField("PAYMENTREQUEST_0_CUSTOM"))?
            .parse()?;
        let payer_id = details
            .payer_id
            .clone()
            .ok_or(Error::MissingField("PAYERID"))?;

        let mut params = NvpForm::new()
            .with("PAYMENTREQUEST_0_AMT", &custom.amount)
            .with("PAYERID", payer_id)
            .with("TOKEN", token.as_str());
        if let Some(notify_url) = &options.notify_url {
            params.set("PAYMENTREQUEST_0_NOTIFYURL", notify_url.as_str());
        }

        let response = self.call(DO_EXPRESS_CHECKOUT_PAYMENT, params).await?;
        let completion = PaymentCompletion::from(response);
        let paid = completion
            .payment_status
            .as_ref()
            .is_some_and(PaymentStatus::is_completed);

        #[cfg(feature = "tracing")]
        tracing::debug!("Payment completed: paid={} token='{}'", paid, token);

        Ok(PaymentResult {
            paid,
            details,
            completion: Some(completion),
        })
    }
}
