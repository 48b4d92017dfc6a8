//! Application layer: services and use cases
//!
//! This layer orchestrates the pattern models and writes their transcripts.

pub mod error;
pub mod error_ext;
pub mod pattern;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use pattern::Pattern;
