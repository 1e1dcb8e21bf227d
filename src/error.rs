use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the Wavecast client.
///
/// Protocol errors (a non-2xx status on a successfully received HTTP
/// response) are distinct variants and are never folded into
/// [`Error::Network`]. The display strings of the protocol variants are the
/// messages callers see, so they follow the API's documented wording.
#[derive(Debug, Error)]
pub enum Error {
    /// The client is missing something it needs before a request can even be
    /// dispatched, e.g. asynchronous dispatch without an injected reactor.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A transport-level fault: connect/TLS/read failures, not HTTP statuses.
    #[error("network error: {0}")]
    Network(String),

    /// 400 from the API.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 401 from the API. The API puts the explanation in the body, so the
    /// body is the message, verbatim.
    #[error("{0}")]
    Authentication(String),

    /// 404 from the API; carries the request path (never the query string).
    #[error("404 Not found ({0})")]
    NotFound(String),

    /// 407 from the API.
    #[error("Proxy Authentication Required")]
    ProxyAuthRequired,

    /// Any status the classification table does not know.
    #[error("Unknown error (status code {status}): {body}")]
    Unknown { status: u16, body: String },

    /// A 200 whose body did not decode to a JSON object. This is a protocol
    /// or programming error and always propagates.
    #[error("response decode error: {0}")]
    Decode(String),

    /// A request body that failed to serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Network(err.to_string())
    }
}
