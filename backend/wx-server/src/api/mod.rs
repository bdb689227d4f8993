pub mod error;
pub mod extractors;
pub mod insights;
pub mod preferences;
pub mod validation;
pub mod weather;
