//! Client configuration: credentials, gateway environments and the inputs
//! of the two checkout operations.

use std::fmt::Debug;
use std::time::Duration;

use bon::Builder;
use url::Url;

use crate::types::{Amount, CurrencyCode};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const SANDBOX_API_URL: &str = "https://api-3t.sandbox.paypal.com/nvp";
const LIVE_API_URL: &str = "https://api-3t.paypal.com/nvp";
const SANDBOX_REDIRECT_URL: &str = "https://www.sandbox.paypal.com/cgi-bin/webscr";
const LIVE_REDIRECT_URL: &str = "https://www.paypal.com/cgi-bin/webscr";

/// Classic API credentials of a merchant account.
///
/// Construction does not validate; the gateway is the judge of these.
#[derive(Builder, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API username, e.g. `merchant_api1.example.com`.
    #[builder(into)]
    pub username: String,
    /// API password.
    #[builder(into)]
    pub password: String,
    /// API signature.
    #[builder(into)]
    pub signature: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("signature", &"<redacted>")
            .finish()
    }
}

/// Gateway environment the client targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Live,
    /// Explicit endpoints, e.g. a local test double.
    Custom { api_url: Url, redirect_url: Url },
}

impl Environment {
    /// NVP API endpoint for this environment.
    pub fn api_url(&self) -> Url {
        match self {
            Environment::Sandbox => Url::parse(SANDBOX_API_URL).expect("static endpoint URL"),
            Environment::Live => Url::parse(LIVE_API_URL).expect("static endpoint URL"),
            Environment::Custom { api_url, .. } => api_url.clone(),
        }
    }

    /// Hosted checkout endpoint the payer is redirected to.
    pub fn redirect_url(&self) -> Url {
        match self {
            Environment::Sandbox => Url::parse(SANDBOX_REDIRECT_URL).expect("static endpoint URL"),
            Environment::Live => Url::parse(LIVE_REDIRECT_URL).expect("static endpoint URL"),
            Environment::Custom { redirect_url, .. } => redirect_url.clone(),
        }
    }
}

/// Full client configuration. Immutable once the client is built.
#[derive(Builder, Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub environment: Environment,
    /// Applied to every outbound request.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

/// A single invoice to run through Express Checkout.
#[derive(Builder, Debug, Clone)]
pub struct Payment {
    /// Merchant-side invoice number, also embedded in the custom field.
    #[builder(into)]
    pub invoice_number: String,
    /// Order total, normalized to two decimal digits on the wire.
    #[builder(into)]
    pub amount: Amount,
    /// Description shown on the hosted checkout page.
    #[builder(into)]
    pub description: String,
    #[builder(into)]
    pub currency: CurrencyCode,
    /// Where the payer lands after approving.
    pub return_url: Url,
    /// Where the payer lands after cancelling.
    pub cancel_url: Url,
}

/// Options for [`detail`](crate::client::ExpressCheckout::detail).
#[derive(Builder, Debug, Clone)]
pub struct DetailOptions {
    /// IPN endpoint forwarded with the completion call.
    pub notify_url: Option<Url>,
    /// Issue `DoExpressCheckoutPayment` when the order is not settled yet.
    #[builder(default = true)]
    pub complete: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        DetailOptions {
            notify_url: None,
            complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_and_live_endpoints() {
        assert_eq!(
            Environment::Sandbox.api_url().as_str(),
            "https://api-3t.sandbox.paypal.com/nvp"
        );
        assert_eq!(
            Environment::Live.api_url().as_str(),
            "https://api-3t.paypal.com/nvp"
        );
        assert_eq!(
            Environment::Sandbox.redirect_url().as_str(),
            "https://www.sandbox.paypal.com/cgi-bin/webscr"
        );
        assert_eq!(
            Environment::Live.redirect_url().as_str(),
            "https://www.paypal.com/cgi-bin/webscr"
        );
    }

    #[test]
    fn custom_environment_uses_given_endpoints() {
        let environment = Environment::Custom {
            api_url: Url::parse("http://127.0.0.1:9090/nvp").unwrap(),
            redirect_url: Url::parse("http://127.0.0.1:9090/webscr").unwrap(),
        };
        assert_eq!(environment.api_url().as_str(), "http://127.0.0.1:9090/nvp");
        assert_eq!(
            environment.redirect_url().as_str(),
            "http://127.0.0.1:9090/webscr"
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = Credentials::builder()
            .username("merchant_api1.example.com")
            .password("topsecret")
            .signature("A1b2C3")
            .build();
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("merchant_api1.example.com"));
        assert!(!rendered.contains("topsecret"));
        assert!(!rendered.contains("A1b2C3"));
    }

    #[test]
    fn config_defaults_timeout() {
        let config = ClientConfig::builder()
            .credentials(
                Credentials::builder()
                    .username("u")
                    .password("p")
                    .signature("s")
                    .build(),
            )
            .environment(Environment::Sandbox)
            .build();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn detail_options_default_to_completing() {
        let options = DetailOptions::default();
        assert!(options.complete);
        assert!(options.notify_url.is_none());

        let options = DetailOptions::builder().complete(false).build();
        assert!(!options.complete);
    }
}
