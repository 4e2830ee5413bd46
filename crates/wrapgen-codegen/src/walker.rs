//! Member traversal
//!
//! Traversal state is carried in a [`WalkContext`] passed by value, so the
//! depth of the class being visited is always explicit at each call.

use crate::assembler::ClassHandler;
use crate::generator::Generator;
use crate::model::{ClassDecl, Element};
use std::sync::Arc;
use wrapgen_core::GenResult;

/// Depth of the outermost class; deeper (nested) classes are not processed
pub const MAX_CLASS_DEPTH: usize = 1;

/// Where the walker currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkContext<'a> {
    /// Class whose file is being generated
    pub class_name: &'a str,
    /// 1 for a top-level class, 2 for a class nested in it, ...
    pub depth: usize,
}

impl<'a> WalkContext<'a> {
    pub fn root(class_name: &'a str) -> Self {
        Self {
            class_name,
            depth: 1,
        }
    }

    /// Context for a class nested one level deeper
    pub fn nested(self, class_name: &'a str) -> Self {
        Self {
            class_name,
            depth: self.depth + 1,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.depth > MAX_CLASS_DEPTH
    }
}

/// Hand one member to the matching generator hook
pub fn dispatch<G>(
    generator: &mut G,
    handler: &mut ClassHandler,
    element: &Element,
    ctx: WalkContext<'_>,
) -> GenResult<()>
where
    G: Generator + ?Sized,
{
    match element {
        Element::Class(nested) => {
            let inner = ctx.nested(&nested.name);
            if inner.is_nested() {
                tracing::debug!(
                    class = nested.name.as_str(),
                    depth = inner.depth,
                    "skipping nested class"
                );
                return Ok(());
            }
            walk_members(generator, handler, nested, inner)
        }
        Element::Method(method) => generator.process_method(handler, method, ctx),
        Element::Field(field) => generator.process_field(handler, field, ctx),
    }
}

/// Dispatch every member of `class` in declaration order
///
/// Stops at the first error; the caller abandons the class.
pub fn walk_members<G>(
    generator: &mut G,
    handler: &mut ClassHandler,
    class: &ClassDecl,
    ctx: WalkContext<'_>,
) -> GenResult<()>
where
    G: Generator + ?Sized,
{
    for member in &class.members {
        dispatch(generator, handler, member, ctx)?;
    }
    Ok(())
}

/// What to do with a superclass that the rule's predicate accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperclassAction {
    /// Fold the superclass's methods into the current file
    FoldMethods,
    /// Generate the superclass as its own file after the current one
    GenerateSeparately,
    FoldAndGenerate,
}

impl SuperclassAction {
    pub fn folds(self) -> bool {
        matches!(
            self,
            SuperclassAction::FoldMethods | SuperclassAction::FoldAndGenerate
        )
    }

    pub fn generates(self) -> bool {
        matches!(
            self,
            SuperclassAction::GenerateSeparately | SuperclassAction::FoldAndGenerate
        )
    }
}

type SuperclassPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides which superclasses take part in generation, and how
#[derive(Clone)]
pub struct SuperclassRule {
    predicate: SuperclassPredicate,
    action: SuperclassAction,
}

impl SuperclassRule {
    /// Apply `action` to superclasses whose qualified name satisfies `predicate`
    pub fn new<P>(action: SuperclassAction, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            action,
        }
    }

    /// Never process superclasses
    pub fn never() -> Self {
        Self::new(SuperclassAction::FoldMethods, |_| false)
    }

    /// Apply `action` to superclasses in or below namespace `prefix`
    pub fn within_namespace(action: SuperclassAction, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(action, move |superclass| {
            superclass
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn applies(&self, superclass: &str) -> bool {
        (self.predicate)(superclass)
    }

    pub fn action(&self) -> SuperclassAction {
        self.action
    }
}

impl Default for SuperclassRule {
    fn default() -> Self {
        Self::never()
    }
}

impl std::fmt::Debug for SuperclassRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperclassRule")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}
