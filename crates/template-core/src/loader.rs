//! TemplateLoader trait for abstracting template source resolution.
//!
//! The execution core only ever manipulates already-resolved template
//! names; turning a name into source text is the loader's concern. This
//! trait allows the engine to pull template source from any backing store
//! without being tied to filesystem access.

use std::fmt::Debug;
use std::sync::Arc;

use crate::TemplateError;

/// Shared template source (reference-counted text).
pub type SharedSource = Arc<str>;

/// A trait for resolving template names to source text.
///
/// # Implementations
///
/// - `MemoryTemplateLoader`: Resolves from a pre-populated in-memory store
///
/// # Example
///
/// ```ignore
/// let loader = MemoryTemplateLoader::new();
/// loader.put("main.ftl", "Hello ${user}")?;
/// let source = loader.load("main.ftl")?;
/// ```
pub trait TemplateLoader: Send + Sync + Debug {
    /// Load the source of the template registered under `name`.
    ///
    /// # Returns
    ///
    /// The template source as shared text, or `TemplateError::TemplateNotFound`
    /// if no template is registered under that name.
    fn load(&self, name: &str) -> Result<SharedSource, TemplateError>;

    /// Check whether a template is registered under `name`.
    fn exists(&self, name: &str) -> bool;

    /// Returns a human-readable name for this loader (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory template loader.
///
/// Templates are stored in memory and must be registered before use. This
/// is the simplest loader and is also what the test suites build their
/// template sets with.
#[derive(Debug, Default)]
pub struct MemoryTemplateLoader {
    templates: std::sync::RwLock<std::collections::HashMap<String, SharedSource>>,
}

impl MemoryTemplateLoader {
    pub fn new() -> Self {
        Self {
            templates: std::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Register a template under `name`, replacing any previous source.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::ConfigError` if the internal lock is poisoned.
    pub fn put(
        &self,
        name: impl Into<String>,
        source: impl Into<SharedSource>,
    ) -> Result<(), TemplateError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|_| TemplateError::ConfigError("template store lock poisoned".to_string()))?;
        templates.insert(name.into(), source.into());
        Ok(())
    }
}

impl TemplateLoader for MemoryTemplateLoader {
    fn load(&self, name: &str) -> Result<SharedSource, TemplateError> {
        let templates = self
            .templates
            .read()
            .map_err(|_| TemplateError::ConfigError("template store lock poisoned".to_string()))?;
        templates
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::TemplateNotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.templates
            .read()
            .map(|templates| templates.contains_key(name))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
