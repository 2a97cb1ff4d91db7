/// Error types for Express Checkout operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-success HTTP status. Anything above 200 lands here, 201 included.
    #[error("HTTP status {status}")]
    Status { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection or protocol failures below the NVP layer.
    #[error("HTTP request error: {0}")]
    Http(#[source] reqwest::Error),

    /// The gateway answered but rejected the operation.
    #[error("ACK {ack}: {message}")]
    Gateway { ack: String, message: String },

    /// NVP response body decoding errors.
    #[error("NVP decode error: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    /// URL parsing errors.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A field the flow depends on was absent from the response.
    #[error("response missing {0}")]
    MissingField(&'static str),

    /// A `PAYMENTREQUEST_0_CUSTOM` value that does not split into
    /// `invoice|amount|currency`.
    #[error("malformed custom field: {0:?}")]
    InvalidCustomField(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}

/// A specialized `Result` type for Express Checkout operations.
pub type Result<T> = std::result::Result<T, Error>;
