//! # PayPal NVP
//!
//! An async client SDK for PayPal Express Checkout over the Classic NVP
//! (name-value-pair) API.
//!
//! This crate provides [`ExpressCheckout`](client::ExpressCheckout), a small
//! client that drives the hosted checkout flow: start a payment, send the
//! payer to the approval page, then fetch and settle the order. Responses
//! come back both as typed records and as the raw NVP key-value record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_nvp::{
//!     client::ExpressCheckout,
//!     config::{Credentials, Environment, Payment},
//! };
//! use url::Url;
//!
//! # async fn run() -> paypal_nvp::errors::Result<()> {
//! let client = ExpressCheckout::new(
//!     Credentials::builder()
//!         .username("merchant_api1.example.com")
//!         .password("api-password")
//!         .signature("api-signature")
//!         .build(),
//!     Environment::Sandbox,
//! );
//!
//! let checkout = client
//!     .pay(
//!         Payment::builder()
//!             .invoice_number("INV-1001")
//!             .amount(49.9)
//!             .description("Annual plan")
//!             .currency("EUR")
//!             .return_url(Url::parse("https://shop.example.com/return")?)
//!             .cancel_url(Url::parse("https://shop.example.com/cancel")?)
//!             .build(),
//!     )
//!     .await?;
//!
//! // Redirect the payer to checkout.url. Once they return, settle by token:
//! let result = client.detail(&checkout.token, Default::default()).await?;
//! if result.paid {
//!     println!("invoice INV-1001 settled");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`]: The [`ExpressCheckout`](client::ExpressCheckout) client and
//!   the call orchestration.
//! - [`config`]: Credentials, gateway environments and operation inputs.
//! - [`nvp`]: The NVP wire encoding and response records.
//! - [`transport`]: The single-exchange HTTPS transport.
//! - [`types`]: Amounts, status codes and typed response records.
//! - [`errors`]: Error types for gateway rejections and transport failures.
//!
//! ## Checkout Flow
//!
//! The standard flow behind [`pay`](client::ExpressCheckout::pay) and
//! [`detail`](client::ExpressCheckout::detail):
//!
//! 1. **SetExpressCheckout**: Register the order; the gateway answers with a
//!    token.
//! 2. **Redirect**: Send the payer to the hosted approval page carrying that
//!    token.
//! 3. **GetExpressCheckoutDetails**: After the payer returns, read the
//!    checkout state and payer id.
//! 4. **DoExpressCheckoutPayment**: Charge the approved amount and learn the
//!    final payment status.
//!
//! Steps 3 and 4 run together inside `detail`; step 4 is skipped for orders
//! that are already settled or when completion is not requested. For other
//! NVP methods, [`call`](client::ExpressCheckout::call) exposes the signed
//! parameter layer directly.

pub mod client;
pub mod config;
pub mod errors;
pub mod nvp;
pub mod transport;
pub mod types;
