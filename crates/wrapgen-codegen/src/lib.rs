//! wrapgen-codegen - Wrapper-class generation from a class model
//!
//! The pipeline, per class:
//!
//! ```text
//! ClassModel (TOML/JSON)
//!     ↓
//!  [Driver] ── SuperclassRule
//!     ↓
//!  [walker::dispatch] over Element { Class, Method, Field }
//!     ↓
//!  [Generator] hooks ── TypeRenderer (imports)
//!     ↓
//!  [ClassHandler] / GeneratedFile
//!     ↓
//!  OutputSink (directory or memory)
//! ```
//!
//! # Example
//!
//! ```
//! use wrapgen_codegen::{ClassModel, Driver, MemoryOutput, WrapperGenerator};
//!
//! let model = ClassModel::from_toml_str(r#"
//! [[classes]]
//! name = "a.b.Person"
//!
//! [[classes.members]]
//! kind = "method"
//! name = "getTags"
//! return_type = "java.util.List<java.lang.String>"
//! "#).unwrap();
//!
//! let output = MemoryOutput::new();
//! let report = Driver::new(WrapperGenerator::default(), &output).run(&model);
//!
//! assert!(report.is_success());
//! let text = output.content("a.b.PersonWrapper").unwrap();
//! assert!(text.contains("import java.util.List;"));
//! assert!(text.contains("public List<String> getTags() {"));
//! ```

pub mod assembler;
pub mod driver;
pub mod generator;
pub mod model;
pub mod sink;
pub mod walker;

pub use assembler::{ClassHandler, GeneratedFile, MethodSignature, Parameter, generate_signature};
pub use driver::{ClassFailure, Driver, RunReport};
pub use generator::{
    DEFAULT_WRAPPER_SUFFIX, Generator, OPTION_WRAPPER_SUFFIX, WrapperGenerator,
};
pub use model::{ClassDecl, ClassModel, Element, FieldDecl, MemberKind, MethodDecl, ParamDecl};
pub use sink::{DirectoryOutput, MemoryOutput, OutputFactory, OutputSink, output_path};
pub use walker::{SuperclassAction, SuperclassRule, WalkContext, dispatch, walk_members};
