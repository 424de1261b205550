pub mod batch;
pub mod synthesis;
pub mod voice;
