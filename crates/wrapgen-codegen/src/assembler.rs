//! Assembly of generated source files.
//!
//! A [`GeneratedFile`] collects the fragments of one output file while the
//! members of a class are visited. Imports are discovered while rendering
//! member signatures, so nothing is written until the class is complete.
//!
//! Serialized layout:
//!
//! ```text
//! package a.b;
//!
//! import java.util.List;          (block and its blank line omitted
//!                                  when there are no imports)
//! public class FooWrapper {
//!     private final Foo entity;   (sorted, duplicates collapse)
//!
//!     public FooWrapper(...) {    (insertion order)
//!     }
//!
//!     public List<String> getTags() {
//!     }
//! }
//! ```

use crate::sink::{OutputFactory, OutputSink};
use std::collections::BTreeSet;
use wrapgen_core::{
    GenResult, ImportPolicy, ImportRegistry, Registration, TypeDescriptor, TypeRenderer,
};

/// Indentation of members inside the type body
pub const MEMBER_INDENT: &str = "    ";

/// Indentation of statements inside a member body
pub const BODY_INDENT: &str = "        ";

/// A method parameter with a parsed type
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeDescriptor,
}

/// Everything needed to write a method header
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeDescriptor,
    pub throws: Vec<TypeDescriptor>,
}

/// Fragments of one generated file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFile {
    namespace: Option<String>,
    imports: ImportRegistry,
    type_opening: Option<String>,
    fields: BTreeSet<String>,
    constructors: Vec<String>,
    methods: Vec<String>,
}

impl GeneratedFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace; only the first call has an effect
    ///
    /// Returns whether this call set it.
    pub fn start_namespace(&mut self, namespace: impl Into<String>) -> bool {
        if let Some(existing) = &self.namespace {
            tracing::debug!(namespace = existing.as_str(), "namespace already set");
            return false;
        }

        self.namespace = Some(namespace.into());
        true
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Set the type-opening line, e.g. `public class FooWrapper {`
    pub fn open_type(&mut self, line: impl Into<String>) {
        self.type_opening = Some(line.into());
    }

    pub fn register_import(&mut self, qualified: &str) -> Registration {
        self.imports.register(qualified)
    }

    /// Reserve the simple name of a type declared in or referenced by this
    /// file without an import; later clashing imports render fully qualified
    pub fn claim_name(&mut self, qualified: &str) -> Registration {
        self.imports.claim(qualified)
    }

    pub fn imports(&self) -> &ImportRegistry {
        &self.imports
    }

    pub fn add_field(&mut self, declaration: impl Into<String>) {
        self.fields.insert(declaration.into());
    }

    pub fn add_constructor(&mut self, body: impl Into<String>) {
        self.constructors.push(body.into());
    }

    pub fn add_method(&mut self, body: impl Into<String>) {
        self.methods.push(body.into());
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Render `ty` for this file's namespace, registering its imports
    pub fn render(&mut self, ty: &TypeDescriptor, policy: &ImportPolicy) -> String {
        let namespace = self.namespace.as_deref().unwrap_or_default();
        TypeRenderer::new(namespace, policy).render(ty, &mut self.imports)
    }

    /// The complete file text; empty when no namespace was ever set
    pub fn serialize(&self) -> String {
        let Some(namespace) = &self.namespace else {
            return String::new();
        };

        let mut out = format!("package {namespace};\n\n");

        if !self.imports.is_empty() {
            for line in self.imports.import_lines() {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }

        if let Some(opening) = &self.type_opening {
            out.push_str(opening);
            out.push('\n');
        }

        for field in &self.fields {
            out.push_str(field);
            out.push('\n');
        }

        for block in self.constructors.iter().chain(&self.methods) {
            out.push('\n');
            out.push_str(block);
            out.push('\n');
        }

        out.push_str("}\n");
        out
    }
}

/// Build a method header such as `    public Map<K, V> find(K key) throws IOException {`
///
/// The return type is rendered first, then parameters, then failure types,
/// so imports are registered in that order. Parameters after the first are
/// wrapped onto continuation lines aligned with the opening parenthesis.
pub fn generate_signature(
    file: &mut GeneratedFile,
    policy: &ImportPolicy,
    signature: &MethodSignature,
) -> String {
    let return_type = file.render(&signature.return_type, policy);

    let prefix = format!("{MEMBER_INDENT}public {return_type} {}(", signature.name);
    let pad = " ".repeat(prefix.chars().count());
    let mut out = prefix;

    for (i, param) in signature.parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
            out.push_str(&pad);
        }
        let ty = file.render(&param.ty, policy);
        out.push_str(&ty);
        out.push(' ');
        out.push_str(&param.name);
    }

    out.push(')');

    if !signature.throws.is_empty() {
        let throws: Vec<String> = signature
            .throws
            .iter()
            .map(|ty| file.render(ty, policy))
            .collect();
        out.push('\n');
        out.push_str(BODY_INDENT);
        out.push_str(MEMBER_INDENT);
        out.push_str("throws ");
        out.push_str(&throws.join(", "));
    }

    out.push_str(" {");
    out
}

/// One generated file bound to its output sink
///
/// The sink is acquired by [`ClassHandler::open`] and released by
/// [`ClassHandler::end`], or on drop if the class is abandoned.
#[derive(Debug)]
pub struct ClassHandler {
    output_name: String,
    file: GeneratedFile,
    policy: ImportPolicy,
    sink: OutputSink,
}

impl ClassHandler {
    /// Acquire the sink for `output_name` and start an empty file
    pub fn open(
        factory: &dyn OutputFactory,
        output_name: impl Into<String>,
        policy: ImportPolicy,
    ) -> GenResult<Self> {
        let output_name = output_name.into();
        let sink = factory.create(&output_name)?;

        Ok(Self {
            output_name,
            file: GeneratedFile::new(),
            policy,
            sink,
        })
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn file(&self) -> &GeneratedFile {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut GeneratedFile {
        &mut self.file
    }

    pub fn policy(&self) -> &ImportPolicy {
        &self.policy
    }

    pub fn start_namespace(&mut self, namespace: impl Into<String>) -> bool {
        self.file.start_namespace(namespace)
    }

    pub fn open_type(&mut self, line: impl Into<String>) {
        self.file.open_type(line);
    }

    pub fn claim_name(&mut self, qualified: &str) -> Registration {
        self.file.claim_name(qualified)
    }

    pub fn add_field(&mut self, declaration: impl Into<String>) {
        self.file.add_field(declaration);
    }

    pub fn add_constructor(&mut self, body: impl Into<String>) {
        self.file.add_constructor(body);
    }

    pub fn add_method(&mut self, body: impl Into<String>) {
        self.file.add_method(body);
    }

    /// Render `ty` into this file, registering its imports
    pub fn render(&mut self, ty: &TypeDescriptor) -> String {
        self.file.render(ty, &self.policy)
    }

    /// Method header for `signature`, see [`generate_signature`]
    pub fn signature(&mut self, signature: &MethodSignature) -> String {
        generate_signature(&mut self.file, &self.policy, signature)
    }

    /// Serialize the file into the sink and release it
    ///
    /// Returns whether anything was written; a file whose namespace was
    /// never set writes nothing.
    pub fn end(mut self) -> GenResult<bool> {
        let text = self.file.serialize();
        let written = !text.is_empty();

        if written {
            self.sink.write_str(&text)?;
        }
        self.sink.close()?;

        tracing::debug!(output = self.output_name.as_str(), written, "class end");
        Ok(written)
    }
}

#[cfg(test)]
#[path = "assembler/assembler_tests.rs"]
mod assembler_tests;
