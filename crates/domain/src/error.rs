/// Failure of a call to one of the two backends.
///
/// Every variant that stems from an HTTP response keeps the status code and the message the
/// backend sent along, so callers can branch on it or show it to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("no connection")]
    NoConnection,
    #[error("401 unauthorized{}", describe(.message))]
    Unauthorized { message: Option<String> },
    #[error("{status} rejected{}", describe(.message))]
    Rejected { status: u16, message: Option<String> },
    #[error("{status} server error{}", describe(.message))]
    Server { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized { message },
            500.. => ApiError::Server { status, message },
            _ => ApiError::Rejected { status, message },
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Rejected { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::NoConnection | ApiError::InvalidResponse(_) | ApiError::Other(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Rejected { message, .. }
            | ApiError::Server { message, .. } => message.as_deref(),
            ApiError::NoConnection | ApiError::InvalidResponse(_) | ApiError::Other(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The backend's message, or `fallback` if the backend did not send one.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }
}

fn describe(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("corrupt session: {0}")]
    Corrupt(String),
    #[error("session storage failed: {0}")]
    Storage(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Api(err) => err.user_message(fallback),
            AuthError::Session(_) => fallback.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(String),
    #[error("{0}")]
    Other(String),
}
