//! The per-render execution-identity stack.
//!
//! One render owns exactly one [`IdentityStack`]. The surrounding engine
//! pushes a frame whenever execution crosses into another template context
//! (include, import initializer, macro body, nested content, interpreted
//! sub-template) and pops it when that construct finishes. Three projections
//! can be read at any point:
//!
//! - **current**: the template whose source owns the executing instruction
//!   (the top frame's home identity);
//! - **main**: the template the render was started for, constant for the
//!   whole render;
//! - **legacy**: the deprecated projection kept for backward compatibility.
//!   It follows an asymmetric rule: includes, imports and interpreted
//!   sub-templates reset it to their own name, while macro calls pass the
//!   caller's value through untouched.
//!
//! Pushes and pops must be strictly well-nested. The `with_*` combinators
//! guarantee that pairing on every exit path, including panic unwinding;
//! the raw `enter_*`/`leave` primitives are for engines that carry their
//! own unwinding discipline.

use folio_template_core::TemplateName;

use crate::error::IdentityError;
use crate::frame::{Delegation, Frame, FrameKind, Identity};
use crate::naming::{AnonymousTags, NamingOptions};

/// The execution-identity stack of one render.
///
/// Owned by that render alone; concurrent renders each hold their own
/// instance, so no locking happens here. The stack is `Send`, which lets a
/// suspended render resume on another thread as long as push/pop pairing is
/// preserved across the suspension.
#[derive(Debug)]
pub struct IdentityStack {
    root: Frame,
    overlays: Vec<Frame>,
    tags: AnonymousTags,
    options: NamingOptions,
}

impl IdentityStack {
    /// Starts a render rooted at `root`. The root identity backs the
    /// main-template projection until the render ends; pass `None` for an
    /// ad-hoc nameless root.
    pub fn new(root: Identity) -> Self {
        Self::with_options(root, NamingOptions::default())
    }

    pub fn with_options(root: Identity, options: NamingOptions) -> Self {
        log::debug!("render identity stack rooted at {:?}", root);
        IdentityStack {
            root: Frame::new(FrameKind::Root, root.clone(), root),
            overlays: Vec::new(),
            tags: AnonymousTags::default(),
            options,
        }
    }

    fn top(&self) -> &Frame {
        self.overlays.last().unwrap_or(&self.root)
    }

    fn push(&mut self, frame: Frame) {
        log::trace!(
            "enter {:?}: home={:?} legacy={:?}",
            frame.kind,
            frame.home,
            frame.legacy
        );
        self.overlays.push(frame);
    }

    /// Brackets the body execution of an included template. Both the
    /// current and the legacy projection are reset to the target's name.
    pub fn enter_include(&mut self, target: impl Into<TemplateName>) {
        let target = target.into();
        self.push(Frame::new(
            FrameKind::Include,
            Some(target.clone()),
            Some(target),
        ));
    }

    /// Brackets the one-time initializer of a namespace import. Later calls
    /// through the imported namespace are ordinary macro calls.
    pub fn enter_import(&mut self, target: impl Into<TemplateName>) {
        let target = target.into();
        self.push(Frame::new(
            FrameKind::Import,
            Some(target.clone()),
            Some(target),
        ));
    }

    /// Brackets a macro or function body, however it was invoked.
    ///
    /// `macro_home` is the identity of the template the macro was defined
    /// in (`None` when it was defined in a nameless template). While the
    /// frame is topmost the current projection yields `macro_home`, but the
    /// legacy projection is transparent: the caller's value is captured
    /// here and passed through unchanged.
    pub fn enter_macro_call(&mut self, macro_home: Identity) {
        let top = self.top();
        let legacy = top.legacy.clone();
        let delegation = Delegation {
            home: top.home.clone(),
            legacy: match top.kind {
                FrameKind::MacroCall => top.home.clone(),
                FrameKind::NestedContent => top.legacy.clone(),
                FrameKind::Root
                | FrameKind::Include
                | FrameKind::Import
                | FrameKind::Interpreted => self.root.home.clone(),
            },
        };
        self.push(Frame::macro_call(macro_home, legacy, delegation));
    }

    /// Brackets execution of the content block supplied at a macro call
    /// site. The block runs with the caller's current-identity as captured
    /// when the nearest enclosing macro call was entered; its legacy
    /// identity is the home of the macro definition the block is lexically
    /// part of, or the root identity when it came from a template's own
    /// top-level body (no matter how many includes sit in between).
    ///
    /// # Errors
    ///
    /// [`IdentityError::NestedContentOutsideMacro`] when no macro call is
    /// on the stack; that is a bracketing defect in the engine.
    pub fn enter_nested_content(&mut self) -> Result<(), IdentityError> {
        let (home, legacy) = {
            let delegation = self
                .overlays
                .iter()
                .rev()
                .find_map(|frame| frame.delegation.as_ref())
                .ok_or(IdentityError::NestedContentOutsideMacro)?;
            (delegation.home.clone(), delegation.legacy.clone())
        };
        self.push(Frame::new(FrameKind::NestedContent, home, legacy));
        Ok(())
    }

    /// Brackets execution of a sub-template interpreted at runtime from a
    /// string value. A name is synthesized from the display form of the
    /// identity active at this point plus either `supplied_name` or an
    /// anonymous tag unique within this render; both projections are reset
    /// to it. The main-template projection is unaffected: with respect to
    /// identity an interpreted sub-template behaves like an include, not
    /// like a macro call.
    ///
    /// Returns the synthesized name so the engine can use it in
    /// diagnostics for the interpreted body.
    pub fn enter_interpreted(&mut self, supplied_name: Option<&str>) -> TemplateName {
        let enclosing = match &self.top().home {
            Some(name) => name.as_str().to_string(),
            None => self.options.nameless_display.clone(),
        };
        let tag = match supplied_name {
            Some(name) => name.to_string(),
            None => self.tags.allocate(&self.options),
        };
        let synthesized =
            TemplateName::from(format!("{}{}{}", enclosing, self.options.separator, tag));
        self.push(Frame::new(
            FrameKind::Interpreted,
            Some(synthesized.clone()),
            Some(synthesized.clone()),
        ));
        synthesized
    }

    /// Pops the most recently entered frame.
    ///
    /// # Errors
    ///
    /// [`IdentityError::RootFrameUnderflow`] when only the root frame
    /// remains; the root is popped by dropping the stack, never by
    /// `leave()`.
    pub fn leave(&mut self) -> Result<(), IdentityError> {
        match self.overlays.pop() {
            Some(frame) => {
                log::trace!("leave {:?}", frame.kind);
                Ok(())
            }
            None => Err(IdentityError::RootFrameUnderflow),
        }
    }

    /// The template whose source owns the currently executing instruction;
    /// `None` when that template is nameless.
    pub fn current_template_name(&self) -> Option<&TemplateName> {
        self.top().home.as_ref()
    }

    /// The template this render was started for; constant for the whole
    /// render regardless of depth. `None` when the root is nameless.
    pub fn main_template_name(&self) -> Option<&TemplateName> {
        self.root.home.as_ref()
    }

    /// The deprecated projection. Unlike the modern projections it has no
    /// missing value: a nameless identity projects as the empty string.
    pub fn legacy_template_name(&self) -> &str {
        self.top().legacy.as_ref().map_or("", TemplateName::as_str)
    }

    /// Number of frames on the stack, the root frame included.
    pub fn depth(&self) -> usize {
        self.overlays.len() + 1
    }

    /// The kind of the topmost frame, for diagnostics.
    pub fn current_kind(&self) -> FrameKind {
        self.top().kind
    }

    /// The frames from the root outward, for rendering template call
    /// traces in error messages.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        std::iter::once(&self.root).chain(self.overlays.iter())
    }

    /// Runs `body` bracketed by an include transition. The frame is popped
    /// on normal return, early return and panic unwinding alike.
    pub fn with_include<R, E>(
        &mut self,
        target: impl Into<TemplateName>,
        body: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        self.enter_include(target);
        self.scoped(body)
    }

    /// Runs `body` bracketed by an import-initializer transition.
    pub fn with_import<R, E>(
        &mut self,
        target: impl Into<TemplateName>,
        body: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        self.enter_import(target);
        self.scoped(body)
    }

    /// Runs `body` bracketed by a macro-call transition.
    pub fn with_macro_call<R, E>(
        &mut self,
        macro_home: Identity,
        body: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        self.enter_macro_call(macro_home);
        self.scoped(body)
    }

    /// Runs `body` bracketed by a nested-content delegation.
    pub fn with_nested_content<R, E>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<IdentityError>,
    {
        self.enter_nested_content()?;
        self.scoped(body)
    }

    /// Runs `body` bracketed by an interpreted-sub-template transition.
    pub fn with_interpreted<R, E>(
        &mut self,
        supplied_name: Option<&str>,
        body: impl FnOnce(&mut Self) -> Result<R, E>,
    ) -> Result<R, E> {
        self.enter_interpreted(supplied_name);
        self.scoped(body)
    }

    /// Runs `body` and pops the frame the caller just pushed, on every exit
    /// path. Unwinding must not leave the frame behind: diagnostics read
    /// the projections while a render is being torn down.
    fn scoped<R, E>(&mut self, body: impl FnOnce(&mut Self) -> Result<R, E>) -> Result<R, E> {
        struct LeaveOnExit<'a>(&'a mut IdentityStack);

        impl Drop for LeaveOnExit<'_> {
            fn drop(&mut self) {
                let popped = self.0.overlays.pop();
                debug_assert!(popped.is_some(), "scoped frame was already popped");
                if let Some(frame) = popped {
                    log::trace!("leave {:?}", frame.kind);
                }
            }
        }

        let mut guard = LeaveOnExit(self);
        body(&mut *guard.0)
    }
}
