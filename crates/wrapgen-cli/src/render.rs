//! Render command implementation

use anyhow::{Context, Result};
use wrapgen_core::{
    DEFAULT_IMPLICIT_NAMESPACES, ImportPolicy, ImportRegistry, TypeDescriptor, TypeRenderer,
};

/// A rendered descriptor and the imports it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub imports: Vec<String>,
}

/// Run the render command
pub fn run(descriptor: &str, namespace: &str, implicit: &[String]) -> Result<()> {
    let rendered = render_descriptor(descriptor, namespace, implicit)?;

    println!("{}", rendered.text);
    for import in &rendered.imports {
        println!("import {import};");
    }

    Ok(())
}

/// Render `descriptor` for a file in `namespace`
///
/// `implicit` adds always-available namespaces to the defaults.
pub fn render_descriptor(descriptor: &str, namespace: &str, implicit: &[String]) -> Result<Rendered> {
    let ty = TypeDescriptor::parse(descriptor)
        .with_context(|| format!("Failed to parse descriptor: {descriptor}"))?;

    let policy = ImportPolicy::new(
        DEFAULT_IMPLICIT_NAMESPACES
            .iter()
            .map(|ns| ns.to_string())
            .chain(implicit.iter().cloned()),
    );

    let mut registry = ImportRegistry::new();
    let text = TypeRenderer::new(namespace, &policy).render(&ty, &mut registry);

    Ok(Rendered {
        text,
        imports: registry.iter().map(str::to_string).collect(),
    })
}
