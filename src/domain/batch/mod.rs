pub mod error;
pub mod model;
pub mod service;

pub use error::BatchServiceError;
pub use model::{BatchResult, InputTarget};
pub use service::{BatchService, BatchServiceApi};
