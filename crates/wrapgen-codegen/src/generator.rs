//! Generator hooks and the wrapper generator
//!
//! A [`Generator`] decides what to emit for each class. The
//! [`crate::driver::Driver`] owns traversal and calls these hooks in order:
//! `option` for each passthrough option, then per class `start_class`,
//! `process_method` / `process_field` per member, `end_class`, and finally
//! `processing_over`.

use crate::assembler::{BODY_INDENT, ClassHandler, MEMBER_INDENT};
use crate::model::{ClassDecl, FieldDecl, MemberKind, MethodDecl};
use crate::sink::OutputFactory;
use crate::walker::WalkContext;
use wrapgen_core::naming::{self, make_call_getter, make_call_setter};
use wrapgen_core::{GenResult, GeneratorConfig, ImportPolicy};

/// Passthrough option naming the suffix appended to wrapper class names
pub const OPTION_WRAPPER_SUFFIX: &str = "wrapperSuffix";

/// Suffix used when [`OPTION_WRAPPER_SUFFIX`] is not given
pub const DEFAULT_WRAPPER_SUFFIX: &str = "Wrapper";

/// Name of the wrapped instance inside generated wrappers
pub const ENTITY_FIELD: &str = "entity";

/// Per-class generation hooks
pub trait Generator {
    /// Receive an option not recognized by [`GeneratorConfig`]
    fn option(&mut self, _name: &str, _value: &str) {}

    /// Begin a class
    ///
    /// Returns `None` to skip the class without writing anything.
    fn start_class(
        &mut self,
        class: &ClassDecl,
        factory: &dyn OutputFactory,
    ) -> GenResult<Option<ClassHandler>>;

    fn process_method(
        &mut self,
        handler: &mut ClassHandler,
        method: &MethodDecl,
        ctx: WalkContext<'_>,
    ) -> GenResult<()>;

    fn process_field(
        &mut self,
        _handler: &mut ClassHandler,
        _field: &FieldDecl,
        _ctx: WalkContext<'_>,
    ) -> GenResult<()> {
        Ok(())
    }

    /// Finish a class; returns whether a file was written
    fn end_class(&mut self, handler: ClassHandler) -> GenResult<bool> {
        handler.end()
    }

    /// Called once after every class has been processed
    fn processing_over(&mut self) -> GenResult<()> {
        Ok(())
    }
}

/// Emits `FooWrapper` for class `Foo`: a class holding a `Foo` and
/// delegating every method to it
#[derive(Debug, Clone)]
pub struct WrapperGenerator {
    suffix: String,
    policy: ImportPolicy,
}

impl Default for WrapperGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl WrapperGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            suffix: config
                .option(OPTION_WRAPPER_SUFFIX)
                .unwrap_or(DEFAULT_WRAPPER_SUFFIX)
                .to_string(),
            policy: config.import_policy(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Simple name of the wrapper for a source class simple name
    pub fn wrapper_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}", self.suffix)
    }

    fn statement(&self, method: &MethodDecl, returns_value: bool) -> String {
        let param_names = || {
            method
                .parameters
                .iter()
                .map(|param| param.name.as_str())
                .collect::<Vec<_>>()
        };

        let accessor = method.accessor().ok();
        let call = match (method.member_kind(), accessor) {
            (MemberKind::Getter, Some(split)) if method.parameters.is_empty() => {
                make_call_getter(ENTITY_FIELD, &split.uc_field_name)
            }
            (MemberKind::Setter, Some(split)) if method.parameters.len() == 1 => {
                make_call_setter(ENTITY_FIELD, &split.uc_field_name, &method.parameters[0].name)
            }
            (MemberKind::Getter | MemberKind::Setter, _) => {
                tracing::warn!(
                    method = method.name.as_str(),
                    parameters = method.parameters.len(),
                    "accessor name with unexpected parameters, delegating as plain method"
                );
                format!("{ENTITY_FIELD}.{}({})", method.name, param_names().join(", "))
            }
            (MemberKind::Method, _) => {
                format!("{ENTITY_FIELD}.{}({})", method.name, param_names().join(", "))
            }
        };

        if returns_value {
            format!("return {call};")
        } else {
            format!("{call};")
        }
    }
}

impl Generator for WrapperGenerator {
    fn option(&mut self, name: &str, value: &str) {
        if name == OPTION_WRAPPER_SUFFIX {
            self.suffix = value.to_string();
        }
    }

    fn start_class(
        &mut self,
        class: &ClassDecl,
        factory: &dyn OutputFactory,
    ) -> GenResult<Option<ClassHandler>> {
        if !naming::non_generic(&class.name).contains('.') {
            tracing::debug!(class = class.name.as_str(), "default namespace, not generated");
            return Ok(None);
        }

        let split = naming::split_class_name(&class.name)?;
        let wrapper = self.wrapper_name(&split.simple_name);
        let output_name = format!("{}.{wrapper}", split.namespace);
        let mut handler = ClassHandler::open(factory, output_name.as_str(), self.policy.clone())?;

        handler.start_namespace(split.namespace.as_str());
        handler.claim_name(naming::non_generic(&class.name));
        handler.claim_name(&output_name);
        handler.open_type(format!("public class {wrapper} {{"));
        handler.add_field(format!(
            "{MEMBER_INDENT}private final {} {ENTITY_FIELD};",
            split.simple_name
        ));
        handler.add_constructor(format!(
            "{MEMBER_INDENT}public {wrapper}(final {simple} {ENTITY_FIELD}) {{\n\
             {BODY_INDENT}this.{ENTITY_FIELD} = {ENTITY_FIELD};\n\
             {MEMBER_INDENT}}}",
            simple = split.simple_name
        ));

        Ok(Some(handler))
    }

    fn process_method(
        &mut self,
        handler: &mut ClassHandler,
        method: &MethodDecl,
        ctx: WalkContext<'_>,
    ) -> GenResult<()> {
        let signature = method.signature()?;
        let header = handler.signature(&signature);
        let statement = self.statement(method, !signature.return_type.is_void());

        tracing::trace!(class = ctx.class_name, method = method.name.as_str(), "method");
        handler.add_method(format!(
            "{header}\n{BODY_INDENT}{statement}\n{MEMBER_INDENT}}}"
        ));
        Ok(())
    }
}
