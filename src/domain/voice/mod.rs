pub mod error;
pub mod model;
pub mod service;

pub use error::VoiceServiceError;
pub use model::VoiceSelection;
pub use service::{VoiceCatalogApi, VoiceCatalogService};
