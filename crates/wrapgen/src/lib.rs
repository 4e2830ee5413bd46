//! # wrapgen
//!
//! Source generation for wrapper classes, built around a generic
//! type-descriptor resolver.
//!
//! wrapgen takes descriptors such as `java.util.Map<java.lang.String,
//! java.util.List<a.c.Item>>` and produces:
//! - the minimally-qualified rendering for a target namespace
//!   (`Map<String, List<Item>>`)
//! - the set of imports that rendering needs, each exactly once
//!
//! On top of the resolver it assembles complete source files from a class
//! model, one file per class.
//!
//! ## Quick Start
//!
//! ```
//! use wrapgen::prelude::*;
//!
//! let ty = TypeDescriptor::parse("java.util.Map<java.lang.String, a.c.Item>").unwrap();
//! let mut imports = ImportRegistry::new();
//!
//! assert_eq!(render(&ty, "a.b", &mut imports), "Map<String, Item>");
//! assert_eq!(imports.import_lines(), ["import a.c.Item;", "import java.util.Map;"]);
//! ```
//!
//! ## Writing a Generator
//!
//! ```
//! use wrapgen::prelude::*;
//!
//! /// Emits one constant per getter
//! struct ConstantsGenerator;
//!
//! impl Generator for ConstantsGenerator {
//!     fn start_class(
//!         &mut self,
//!         class: &ClassDecl,
//!         factory: &dyn OutputFactory,
//!     ) -> GenResult<Option<ClassHandler>> {
//!         let split = wrapgen::naming::split_class_name(&class.name)?;
//!         let name = format!("{}Fields", split.simple_name);
//!         let mut handler = ClassHandler::open(
//!             factory,
//!             format!("{}.{name}", split.namespace),
//!             ImportPolicy::default(),
//!         )?;
//!         handler.start_namespace(split.namespace);
//!         handler.open_type(format!("public final class {name} {{"));
//!         Ok(Some(handler))
//!     }
//!
//!     fn process_method(
//!         &mut self,
//!         handler: &mut ClassHandler,
//!         method: &MethodDecl,
//!         _ctx: WalkContext<'_>,
//!     ) -> GenResult<()> {
//!         if let Ok(split) = method.accessor() {
//!             handler.add_field(format!(
//!                 "    public static final String {} = \"{}\";",
//!                 split.uc_field_name.to_uppercase(),
//!                 split.field_name()
//!             ));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let model = ClassModel::from_toml_str(r#"
//! [[classes]]
//! name = "a.b.Person"
//!
//! [[classes.members]]
//! kind = "method"
//! name = "getName"
//! return_type = "java.lang.String"
//! "#).unwrap();
//!
//! let output = MemoryOutput::new();
//! let report = Driver::new(ConstantsGenerator, &output).run(&model);
//!
//! assert!(report.is_success());
//! assert!(output
//!     .content("a.b.PersonFields")
//!     .unwrap()
//!     .contains("public static final String NAME = \"name\";"));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wrapgen_core`] - Descriptor parsing, import policy, rendering, naming
//! - [`wrapgen_codegen`] - Class model, file assembly, traversal, generators
//! - [`wrapgen_logging`] - Tracing layer and host diagnostic callback

// Re-export core types
pub use wrapgen_core::{
    BoundKind, GenError, GenResult, GeneratorConfig, ImportPolicy, ImportRegistry, LogLevel,
    Registration, TypeDescriptor, TypeRenderer, WildcardBound, naming, render,
};

// Re-export generation types
pub use wrapgen_codegen::{
    ClassDecl, ClassHandler, ClassModel, DirectoryOutput, Driver, Element, FieldDecl,
    GeneratedFile, Generator, MemoryOutput, MethodDecl, OutputFactory, RunReport,
    SuperclassAction, SuperclassRule, WalkContext, WrapperGenerator,
};

// Re-export logging
pub use wrapgen_logging::{DiagnosticCallback, DiagnosticManager, init_logging, set_level};

pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use wrapgen::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Resolver: `TypeDescriptor`, `ImportPolicy`, `ImportRegistry`, `render`
/// - Generation: `Generator`, `ClassHandler`, `Driver`, `ClassModel`
/// - Errors: `GenError`, `GenResult`
pub mod prelude {
    pub use crate::{
        ClassDecl, ClassHandler, ClassModel, Driver, GenError, GenResult, GeneratorConfig,
        Generator, ImportPolicy, ImportRegistry, LogLevel, MemoryOutput, MethodDecl,
        OutputFactory, TypeDescriptor, WalkContext, WrapperGenerator, render,
    };
}
