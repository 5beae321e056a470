use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Client`](crate::Client) calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The request URL could not be built from the base URL and resource path.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Sending the request or reading the response body failed.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200 and a readable error body.
    #[error("datagovsg: response not ok: {0}")]
    ResponseNotOk(String),

    /// The API answered with a status other than 200 and the error body could
    /// not be parsed. Carries the raw body.
    #[error("datagovsg: error parsing error message: {0}")]
    ParseErrorMessageFailure(String),

    /// A 200 response did not match the resource's schema.
    #[error("datagovsg: failed to decode {resource} response: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures below the API layer (bad URL, connection, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::InvalidUrl(_) | Error::Transport(_))
    }
}

/// Error body the API embeds in non-success responses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub(crate) code: Option<String>,
    pub(crate) message: String,
}

/// Maps the body of a non-200 response onto the API error taxonomy.
pub(crate) fn classify_error_body(body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(e) => {
            tracing::warn!(code = e.code.as_deref().unwrap_or(""), message = %e.message, "API error");
            Error::ResponseNotOk(e.message)
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not parse API error body");
            Error::ParseErrorMessageFailure(String::from_utf8_lossy(body).into_owned())
        }
    }
}
