//! Execution frames and the transition kinds that create them.

use folio_template_core::TemplateName;

/// A template identity: a resolved name, or `None` for a nameless template
/// (one constructed ad hoc rather than obtained through a loader).
pub type Identity = Option<TemplateName>;

/// The syntactic transition that pushed a frame.
///
/// This set is closed on purpose: the projection rules match on it
/// exhaustively, so a new transition kind cannot be added without revisiting
/// every place an identity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// The frame pushed at render start; always at the bottom of the stack.
    Root,
    /// Body execution of an included template.
    Include,
    /// One-time execution of a namespace import's initializer.
    Import,
    /// Body execution of a macro or function, however it was invoked.
    MacroCall,
    /// Execution of the content block supplied at a macro call site,
    /// triggered from within that macro's body.
    NestedContent,
    /// Execution of a sub-template built at runtime from a string value.
    Interpreted,
}

/// One entry in the execution-identity stack.
///
/// While a frame is topmost, `home` backs the modern current-template
/// projection and `legacy` backs the deprecated one. Both are fixed when the
/// frame is pushed; frames never change after that.
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) kind: FrameKind,
    pub(crate) home: Identity,
    pub(crate) legacy: Identity,
    pub(crate) delegation: Option<Delegation>,
}

/// Identities a nested-content delegation resolves against, captured when
/// the enclosing macro call was entered rather than read live. Only
/// `MacroCall` frames carry these.
#[derive(Debug, Clone)]
pub(crate) struct Delegation {
    /// The caller's current-identity at the moment of the call.
    pub(crate) home: Identity,
    /// The home of the nearest macro definition lexically containing content
    /// supplied at the call site, or the root identity when the content came
    /// from a template's own top-level body.
    pub(crate) legacy: Identity,
}

impl Frame {
    pub(crate) fn new(kind: FrameKind, home: Identity, legacy: Identity) -> Self {
        Frame {
            kind,
            home,
            legacy,
            delegation: None,
        }
    }

    pub(crate) fn macro_call(home: Identity, legacy: Identity, delegation: Delegation) -> Self {
        Frame {
            kind: FrameKind::MacroCall,
            home,
            legacy,
            delegation: Some(delegation),
        }
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// The identity this frame contributes to the current-template
    /// projection while topmost.
    pub fn home(&self) -> Option<&TemplateName> {
        self.home.as_ref()
    }

    /// The identity this frame contributes to the deprecated projection
    /// while topmost.
    pub fn legacy(&self) -> Option<&TemplateName> {
        self.legacy.as_ref()
    }
}
