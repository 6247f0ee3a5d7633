use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a search run can fail. Nothing is retried; the binary logs the
/// message and exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    /// DNS, TCP, TLS or any other failure before a response arrived.
    #[error("network error (request failed): {0}")]
    Network(#[source] reqwest::Error),

    #[error(transparent)]
    Server(#[from] ServerError),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Io(#[source] reqwest::Error),

    #[error("failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerError {
    /// 401 or 403 from the API.
    #[error("server error ({status}): invalid API key, check GIPHY_API_KEY or your .env file")]
    InvalidApiKey { status: u16 },

    #[error("server error ({status}): {reason}")]
    Status { status: u16, reason: String },
}

impl ServerError {
    pub fn from_status(status: u16, reason: &str) -> Self {
        match status {
            401 | 403 => Self::InvalidApiKey { status },
            _ => Self::Status {
                status,
                reason: reason.to_owned(),
            },
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidApiKey { status } | Self::Status { status, .. } => *status,
        }
    }
}

impl Error {
    pub fn is_invalid_api_key(&self) -> bool {
        matches!(self, Self::Server(ServerError::InvalidApiKey { .. }))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unauthorized_and_forbidden_are_invalid_key() {
        assert_eq!(
            ServerError::from_status(401, "Unauthorized"),
            ServerError::InvalidApiKey { status: 401 }
        );
        assert_eq!(
            ServerError::from_status(403, "Forbidden"),
            ServerError::InvalidApiKey { status: 403 }
        );
    }

    #[test]
    fn other_statuses_keep_reason() {
        let err = ServerError::from_status(429, "Too Many Requests");

        assert_eq!(err.status(), 429);
        assert_eq!(err.to_string(), "server error (429): Too Many Requests");
        assert!(!Error::from(err).is_invalid_api_key());
    }
}
