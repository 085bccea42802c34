use chimectl_core::ErrorKind;
use thiserror::Error;

/// The user-facing error taxonomy for resource operations.
///
/// Every variant is terminal for the current command: the caller reports a
/// single message and exits non-zero. There is no retry or recovery layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service rejected the request's credentials (HTTP 401/403).
    #[error("authentication failed: {message}")]
    AuthenticationFailure {
        /// Server-supplied failure detail.
        message: String,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Server-supplied failure detail.
        message: String,
    },

    /// The service throttled the caller (HTTP 429).
    #[error("rate limited: {message}")]
    RateLimited {
        /// Server-supplied failure detail.
        message: String,
    },

    /// Any other error status, with status and message preserved.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server-supplied failure detail.
        message: String,
    },

    /// No response was received at all.
    #[error("network error: {message}")]
    Network {
        /// Transport failure detail.
        message: String,
    },

    /// No credentials were available before the call went out.
    #[error("no credentials configured; run `chimectl config set` first")]
    ConfigurationMissing,

    /// The request could not be constructed or signed, for a reason other
    /// than missing credentials.
    #[error("failed to sign request: {0}")]
    Signing(#[source] chimectl_core::Error),

    /// A request or response JSON body could not be serialized or parsed.
    #[error("invalid JSON body: {message}")]
    InvalidBody {
        /// Serde failure detail.
        message: String,
    },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody {
            message: err.to_string(),
        }
    }
}

impl ApiError {
    /// Map an error status code and server message onto the taxonomy.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ApiError::AuthenticationFailure { message },
            404 => ApiError::NotFound { message },
            429 => ApiError::RateLimited { message },
            _ => ApiError::Api { status, message },
        }
    }

    /// Translate a signing-layer failure.
    ///
    /// Absent credentials surface as [`ApiError::ConfigurationMissing`]
    /// before any network call; everything else is a signing failure.
    pub(crate) fn from_signing(err: chimectl_core::Error) -> Self {
        if err.kind() == ErrorKind::CredentialInvalid {
            ApiError::ConfigurationMissing
        } else {
            ApiError::Signing(err)
        }
    }

    /// Extract the server-supplied failure message from an error body.
    ///
    /// The service reports errors as `{"Code": ..., "Message": ...}`; fall
    /// back to the raw body when it is not JSON in that shape.
    pub(crate) fn message_from_body(body: &[u8]) -> String {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
            for key in ["Message", "message"] {
                if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                    return msg.to_string();
                }
            }
        }

        String::from_utf8_lossy(body).to_string()
    }
}
