// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Errors returned by remote collaborators. The transport classifies timeouts and connection
/// failures so that callers can tell an offline device apart from a failing backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Network request timed out: {url}")]
    TimedOut { url: String },
    #[error("Network connection failed: {msg}")]
    ConnectionFailed { msg: String },
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {msg}")]
    Parse { msg: String },
    #[error("{msg}")]
    Generic { msg: String },
}

impl RequestError {
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            RequestError::TimedOut { .. } | RequestError::ConnectionFailed { .. }
        )
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Api { status, .. } if *status == 401 || *status == 403)
    }

    /// A message that can be shown to the user as is.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::TimedOut { .. } | RequestError::ConnectionFailed { .. } => {
                "Network connection problem. Please check your internet connection and try again."
                    .to_string()
            }
            RequestError::Api { status, .. } if *status >= 500 => {
                "The server is having trouble right now. Please try again later.".to_string()
            }
            RequestError::Api { message, .. } if !message.is_empty() => message.clone(),
            RequestError::Api { .. } | RequestError::Parse { .. } | RequestError::Generic { .. } => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

pub trait RequestErrorExt {
    /// Returns the first `RequestError` in the error chain, if any.
    fn request_error(&self) -> Option<&RequestError>;

    /// Returns the `RequestError` in the error chain if it denotes a timeout or a failed
    /// connection.
    fn network_error(&self) -> Option<&RequestError> {
        self.request_error().filter(|err| err.is_network_error())
    }
}

impl RequestErrorExt for anyhow::Error {
    fn request_error(&self) -> Option<&RequestError> {
        self.chain()
            .find_map(|err| err.downcast_ref::<RequestError>())
    }
}
