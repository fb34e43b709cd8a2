//! Record shapes for the product and user services.
//!
//! Each resource has three explicit types: the stored base fields, the
//! creation payload accepted from clients, and the view returned to them.

pub mod errors;
pub mod id;
pub mod resource;
pub mod product;
pub mod user;
pub mod db;

pub use id::RecordId;
pub use product::{Product, ProductBase, ProductCreate};
pub use resource::Resource;
pub use user::{User, UserBase, UserCreate};
