//! Core contracts between the folio template engine and its collaborators
//!
//! This crate defines the types that cross the boundary between the engine's
//! execution core and the code surrounding it: the shared error type, the
//! name newtype used for template identities, and the loader contract that
//! resolves template names to source text.
//!
//! ## Key Abstractions
//!
//! - **`TemplateName`**: Cheap-to-clone identifier for a template
//! - **`TemplateLoader`**: Trait for resolving names to template source
//! - **`TemplateError`**: Shared error type for engine boundaries

use thiserror::Error;

pub mod loader;
pub mod name;

pub use loader::{MemoryTemplateLoader, SharedSource, TemplateLoader};
pub use name::TemplateName;

/// Errors that can occur during template processing
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    ParseError(String),

    #[error("Template execution failed: {0}")]
    ExecutionError(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
