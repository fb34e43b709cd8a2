use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("malformed identifier: {0:?}")]
    MalformedId(String),
}
