//! folio — execution-identity resolution core for a composing template
//! engine.
//!
//! A folio render composes output from many template sources through
//! inclusion, namespace import, macro invocation with deferred content
//! blocks, and runtime interpretation of string values as new templates.
//! This crate is the integration surface over the workspace members:
//!
//! - [`folio_identity`] owns the per-render frame stack, the three
//!   template-name projections, and the naming of interpreted
//!   sub-templates.
//! - [`folio_template_core`] owns the contracts shared with the rest of
//!   the engine: the boundary error type, the template-name newtype, and
//!   the loader abstraction that resolves names to source text.

pub use folio_identity::{
    Frame, FrameKind, Identity, IdentityError, IdentityStack, NamingOptions, SpecialVariable,
};
pub use folio_template_core::{
    MemoryTemplateLoader, SharedSource, TemplateError, TemplateLoader, TemplateName,
};
