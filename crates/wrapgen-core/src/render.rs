//! Rendering of type descriptors into minimally-qualified source text.
//!
//! Rendering writes the simple name of every node and records the imports
//! that make those simple names valid in the target namespace. Names that
//! need no import are claimed in the registry as well, so a later import
//! can never shadow them; whichever type reaches a simple name first keeps
//! it and the other is written fully qualified. The registry deduplicates,
//! so rendering the same tree twice changes nothing.
//!
//! ```
//! use wrapgen_core::{ImportRegistry, TypeDescriptor, render};
//!
//! let ty = TypeDescriptor::parse("java.util.Map<java.lang.String, a.c.Item>").unwrap();
//! let mut imports = ImportRegistry::new();
//!
//! assert_eq!(render(&ty, "a.b", &mut imports), "Map<String, Item>");
//! assert_eq!(imports.iter().collect::<Vec<_>>(), ["a.c.Item", "java.util.Map"]);
//! ```

use crate::descriptor::TypeDescriptor;
use crate::imports::{ImportPolicy, ImportRegistry, Registration};

/// Renders descriptors for a file in a fixed namespace.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    namespace: &'a str,
    policy: &'a ImportPolicy,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(namespace: &'a str, policy: &'a ImportPolicy) -> Self {
        Self { namespace, policy }
    }

    /// Namespace of the file being generated
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Render `ty`, registering every import it needs.
    pub fn render(&self, ty: &TypeDescriptor, registry: &mut ImportRegistry) -> String {
        let mut out = String::new();
        self.render_into(ty, registry, &mut out);
        out
    }

    fn render_into(&self, ty: &TypeDescriptor, registry: &mut ImportRegistry, out: &mut String) {
        if let Some(bound) = &ty.bound {
            out.push_str("? ");
            out.push_str(bound.kind.keyword());
            out.push(' ');
            self.render_into(&bound.ty, registry, out);
            return;
        }

        out.push_str(self.display_name(ty, registry));

        if !ty.type_arguments.is_empty() {
            out.push('<');
            for (i, arg) in ty.type_arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.render_into(arg, registry, out);
            }
            out.push('>');
        }

        for _ in 0..ty.array_dims {
            out.push_str("[]");
        }
    }

    fn display_name<'t>(&self, ty: &'t TypeDescriptor, registry: &mut ImportRegistry) -> &'t str {
        let Some(qualified) = ty.qualified_name.as_deref() else {
            return &ty.raw_name;
        };

        let registration = if ty.import_required(self.policy, self.namespace) {
            registry.register(qualified)
        } else {
            registry.claim(qualified)
        };

        match registration {
            Registration::Conflict { existing } => {
                tracing::debug!(
                    qualified,
                    existing = existing.as_str(),
                    "simple name already in use, using qualified name"
                );
                qualified
            }
            Registration::Added | Registration::Present => &ty.raw_name,
        }
    }
}

/// Render `ty` for `namespace` with the default import policy.
pub fn render(ty: &TypeDescriptor, namespace: &str, registry: &mut ImportRegistry) -> String {
    let policy = ImportPolicy::default();
    TypeRenderer::new(namespace, &policy).render(ty, registry)
}
