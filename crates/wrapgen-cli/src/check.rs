//! Check command implementation

use anyhow::{Context, Result};
use wrapgen_codegen::{ClassModel, Element};

/// Counts reported for a valid model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    pub classes: usize,
    pub methods: usize,
    pub fields: usize,
}

/// Check command implementation
pub fn run(input: &str) -> Result<()> {
    println!("Checking class model: {}", input);

    let summary = check_model(input)?;

    println!("✓ Classes: {}", summary.classes);
    println!("✓ Methods: {}", summary.methods);
    println!("✓ Fields: {}", summary.fields);
    println!("\nClass model is valid!");

    Ok(())
}

/// Load and validate a model file
pub fn check_model(input: &str) -> Result<ModelSummary> {
    let model = ClassModel::from_file(input)
        .with_context(|| format!("Failed to load class model: {input}"))?;
    model.validate().context("Invalid class model")?;

    let mut summary = ModelSummary {
        classes: model.classes.len(),
        methods: 0,
        fields: 0,
    };

    for member in model.classes.iter().flat_map(|class| &class.members) {
        match member {
            Element::Method(_) => summary.methods += 1,
            Element::Field(_) => summary.fields += 1,
            Element::Class(_) => {}
        }
    }

    Ok(summary)
}
