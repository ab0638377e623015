pub mod entities;
pub mod errors;
pub mod events;
pub mod ports;

pub use errors::{DomainError, DomainResult};
