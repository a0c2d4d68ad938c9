use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{endpoint} responded with status {status}")]
    Status { status: u16, endpoint: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Login failed. Please try again.")]
    Network(String),

    #[error("Session token has expired")]
    Expired,

    #[error("Session token could not be read")]
    Malformed,
}

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session is no longer authorized")]
    Unauthorized,

    #[error("Failed to {action} item (status {status})")]
    Mutation { action: &'static str, status: u16 },

    #[error("{0}")]
    Validation(String),

    #[error("This resource does not support {0}")]
    Unsupported(&'static str),

    #[error("Invalid field value: {0}")]
    Field(String),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Upload failed: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration value {0}")]
    Missing(&'static str),

    #[error("Invalid configuration value {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
