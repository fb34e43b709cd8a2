use models::Resource;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Carries the lowercase resource name, e.g. `product`.
    #[error("Invalid {0} ID format")]
    InvalidId(String),
    /// Carries the display resource name, e.g. `Product`.
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn invalid_id<R: Resource>() -> Self {
        Self::InvalidId(R::NAME.to_lowercase())
    }

    pub fn not_found<R: Resource>() -> Self {
        Self::NotFound(R::NAME.to_string())
    }
}

impl From<mongodb::error::Error> for ServiceError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Db(e.to_string())
    }
}
