pub mod appointments;
pub mod error;
pub mod tickets;
pub mod validation;

pub use error::{ApiError, ApiResult};
