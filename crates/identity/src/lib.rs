//! Execution-identity resolution for folio renders.
//!
//! A render composes output from many template sources: includes, namespace
//! imports, macro invocations with deferred content blocks, and
//! sub-templates interpreted at runtime from string values. Surrounding
//! code (diagnostics, relative-path resolution, error messages) needs to
//! know, at any point, which template is "current" from three
//! simultaneously valid perspectives. This crate owns the frame stack and
//! the projection rules that answer that question:
//!
//! - [`IdentityStack`]: one per render; pushed/popped at every execution
//!   transition, read on demand
//! - [`SpecialVariable`]: the three read-only names templates evaluate
//!   (`currentTemplateName`, `mainTemplateName`, and the deprecated
//!   `templateName`)
//! - [`NamingOptions`]: tokens for naming interpreted sub-templates
//!
//! Parsing, expression evaluation and template loading live elsewhere; the
//! stack only ever sees already-resolved identities.

pub mod error;
pub mod frame;
pub mod naming;
pub mod stack;
pub mod vars;

pub use error::IdentityError;
pub use frame::{Frame, FrameKind, Identity};
pub use naming::NamingOptions;
pub use stack::IdentityStack;
pub use vars::SpecialVariable;
