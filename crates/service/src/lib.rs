//! Service layer: resource lifecycle operations on top of a pluggable repository.
//! - `ResourceService` validates identifiers and enforces create/update/delete rules.
//! - `repository` holds the store seam with MongoDB and in-memory implementations.

pub mod errors;
pub mod pagination;
pub mod repository;
pub mod resource_service;

pub use errors::ServiceError;
pub use pagination::ListParams;
pub use repository::{memory::InMemoryRepository, mongo::MongoRepository, ResourceRepository};
pub use resource_service::ResourceService;
