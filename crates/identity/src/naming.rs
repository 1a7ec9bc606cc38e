//! Synthesized naming for runtime-interpreted sub-templates.

/// Tokens used when synthesizing the name of an interpreted sub-template.
///
/// The defaults reproduce the names templates observe in production:
/// interpreting a string inside `page.ftl` without supplying a name yields
/// `page.ftl->anonymous_interpreted`.
#[derive(Debug, Clone)]
pub struct NamingOptions {
    /// Display stand-in for a nameless enclosing template.
    pub nameless_display: String,
    /// Tag stem used when no explicit name is supplied.
    pub anonymous_stem: String,
    /// Separator between the enclosing display name and the tag.
    pub separator: String,
}

impl Default for NamingOptions {
    fn default() -> Self {
        NamingOptions {
            nameless_display: "nameless_template".to_string(),
            anonymous_stem: "anonymous_interpreted".to_string(),
            separator: "->".to_string(),
        }
    }
}

/// Allocates anonymous tags unique within one render.
///
/// Explicitly supplied names bypass the allocator and carry no uniqueness
/// guarantee; collisions there are the caller's responsibility.
#[derive(Debug, Default)]
pub(crate) struct AnonymousTags {
    allocated: u32,
}

impl AnonymousTags {
    /// Returns the next tag. The first tag is the bare stem; later ones
    /// append the allocation count, so repeated interpretation inside one
    /// render cannot produce colliding names.
    pub(crate) fn allocate(&mut self, options: &NamingOptions) -> String {
        self.allocated += 1;
        if self.allocated == 1 {
            options.anonymous_stem.clone()
        } else {
            format!("{}{}", options.anonymous_stem, self.allocated)
        }
    }
}
