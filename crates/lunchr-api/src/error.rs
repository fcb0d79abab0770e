use thiserror::Error;

/// Errors returned by the lunch-roulette backend client.
///
/// The variants map one-to-one onto the failure classes a caller has to
/// present differently: transport failure, non-2xx HTTP status, a 2xx
/// response that signals logical failure, a 2xx success without a
/// restaurant payload, and an undecodable body.
#[derive(Debug, Error)]
pub enum RouletteError {
    /// The request never completed: DNS, connect, TLS, or timeout failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    /// The server answered 2xx but set `error: true` or `success: false`.
    #[error("API error: {}", message.as_deref().unwrap_or("no message"))]
    Api {
        message: Option<String>,
        suggestion: Option<String>,
    },

    /// The server claimed success but the envelope carried no restaurant.
    #[error("success envelope without restaurant payload")]
    MissingRestaurant { message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
