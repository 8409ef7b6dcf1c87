use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid page title: {0:?}")]
    InvalidTitle(String),

    #[error("Page does not exist: {0}")]
    PageMissing(String),

    #[error("Page is a redirect: {0}")]
    IsRedirect(String),

    #[error("Page is not a redirect: {0}")]
    NotRedirect(String),

    #[error("Page has no linked Wikidata item: {0}")]
    NoItem(String),
}

pub type Result<T> = std::result::Result<T, WikiError>;
