use thiserror::Error;

/// Failures talking to the page.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element `{0}` is missing")]
    MissingElement(String),
    #[error("`{0}` is not a valid selector")]
    InvalidSelector(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}
