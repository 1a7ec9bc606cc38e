//! The read-only identity names evaluable inside template expressions.

use folio_template_core::TemplateName;

use crate::stack::IdentityStack;

/// The three special names that expose a render's identity state to
/// template expressions. Spellings match the template-source surface
/// (`currentTemplateName` etc., written without the leading dot here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialVariable {
    /// The template whose source owns the executing instruction.
    CurrentTemplateName,
    /// The template the render was started for.
    MainTemplateName,
    /// Deprecated projection kept for backward compatibility. Unlike the
    /// modern names it never yields a missing value: a nameless template
    /// projects as the empty string.
    TemplateName,
}

impl SpecialVariable {
    /// Parses a source spelling. Returns `None` for names this core does
    /// not own; the expression layer handles those.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "currentTemplateName" => Some(Self::CurrentTemplateName),
            "mainTemplateName" => Some(Self::MainTemplateName),
            "templateName" => Some(Self::TemplateName),
            _ => None,
        }
    }

    /// The source spelling of this name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentTemplateName => "currentTemplateName",
            Self::MainTemplateName => "mainTemplateName",
            Self::TemplateName => "templateName",
        }
    }

    /// Whether evaluating this name should raise a deprecation diagnostic.
    pub fn is_deprecated(self) -> bool {
        matches!(self, Self::TemplateName)
    }

    /// Resolves this name against a render's stack. `None` is the missing
    /// value; substituting a default for it is the expression layer's
    /// business, not this core's.
    pub fn resolve(self, stack: &IdentityStack) -> Option<&str> {
        match self {
            Self::CurrentTemplateName => stack.current_template_name().map(TemplateName::as_str),
            Self::MainTemplateName => stack.main_template_name().map(TemplateName::as_str),
            Self::TemplateName => Some(stack.legacy_template_name()),
        }
    }
}
