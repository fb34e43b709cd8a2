//! Shared building blocks for the resource services: logging setup, small
//! response types and the startup retry policy.

pub mod types;
pub mod utils;
pub mod retry;
