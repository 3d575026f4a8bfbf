use axum::http::StatusCode;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("No tweets provided.")]
    NoItems,

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Missing configuration. Set {0}")]
    #[diagnostic(help("put it in the environment or in a .env file in the working directory"))]
    MissingConfig(&'static str),

    #[error("Content filter triggered: {0}")]
    ContentFiltered(String),

    #[error("{provider} API error ({status}): {message}")]
    Provider {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// status code the http layer answers with
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NoItems => StatusCode::BAD_REQUEST,
            Error::Unavailable(_) | Error::MissingConfig(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
