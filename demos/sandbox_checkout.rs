use paypal_nvp::{
    client::ExpressCheckout,
    config::{Credentials, DetailOptions, Environment, Payment},
    types::Token,
};
use url::Url;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let username = std::env::var("PAYPAL_USER").expect("PAYPAL_USER not set");
    let password = std::env::var("PAYPAL_PWD").expect("PAYPAL_PWD not set");
    let signature = std::env::var("PAYPAL_SIGNATURE").expect("PAYPAL_SIGNATURE not set");

    let client = ExpressCheckout::new(
        Credentials::builder()
            .username(username)
            .password(password)
            .signature(signature)
            .build(),
        Environment::Sandbox,
    );

    // With TOKEN set, settle that checkout; otherwise start a new one.
    if let Ok(token) = std::env::var("TOKEN") {
        let result = client
            .detail(&Token::from(token), DetailOptions::default())
            .await
            .unwrap();

        println!("Paid: {}", result.paid);
        if let Some(completion) = &result.completion {
            println!("Payment status: {:?}", completion.payment_status);
            println!("Transaction: {:?}", completion.transaction_id);
        }
        return;
    }

    let checkout = client
        .pay(
            Payment::builder()
                .invoice_number("INV-1001")
                .amount(1u32)
                .description("Sandbox test order")
                .currency("EUR")
                .return_url(Url::parse("https://example.com/return").unwrap())
                .cancel_url(Url::parse("https://example.com/cancel").unwrap())
                .build(),
        )
        .await
        .unwrap();

    println!("Token: {}", checkout.token);
    println!("Approve at: {}", checkout.url);
    println!("Re-run with TOKEN={} to settle after approval", checkout.token);
}
