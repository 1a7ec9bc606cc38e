use folio_template_core::TemplateError;
use thiserror::Error;

/// Stack-discipline faults.
///
/// These signal a defect in the surrounding engine's transition bracketing,
/// never a problem with a template, and are not recoverable by template
/// authors. They cannot occur when execution is bracketed through the
/// scoped `with_*` combinators on [`IdentityStack`](crate::IdentityStack).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("leave() would pop the root frame of the render")]
    RootFrameUnderflow,

    #[error("nested content delegation entered outside of any macro call")]
    NestedContentOutsideMacro,
}

impl From<IdentityError> for TemplateError {
    fn from(err: IdentityError) -> Self {
        TemplateError::ExecutionError(err.to_string())
    }
}
