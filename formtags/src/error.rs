//! Error types for form presentation operations.

use thiserror::Error;

/// Result type for formtags operations
pub type Result<T> = std::result::Result<T, FormtagsError>;

/// Errors that can occur while resolving fields for presentation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormtagsError {
    /// A field name was requested that the form does not declare
    #[error("unknown form field: {name}")]
    UnknownField {
        /// The name that failed to resolve
        name: String,
    },
}
