//! Error handling for the Tysiąc engine.

pub mod domain;
pub mod error_code;


pub use domain::{DomainError, LegalityKind, PreconditionKind, ValidationKind};
pub use error_code::ErrorCode;
