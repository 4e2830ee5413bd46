//! Generate command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;
use wrapgen_codegen::{
    ClassModel, DirectoryOutput, Driver, RunReport, SuperclassAction, SuperclassRule,
    WrapperGenerator,
};
use wrapgen_core::{GeneratorConfig, LogLevel, OPTION_DEBUG, OPTION_RESOURCE_PATH};
use wrapgen_logging::DiagnosticManager;

/// Superclass handling selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuperAction {
    /// Fold superclass methods into the subclass wrapper
    Fold,
    /// Generate a separate wrapper for the superclass
    Separate,
    /// Fold and generate separately
    Both,
}

impl From<SuperAction> for SuperclassAction {
    fn from(action: SuperAction) -> Self {
        match action {
            SuperAction::Fold => SuperclassAction::FoldMethods,
            SuperAction::Separate => SuperclassAction::GenerateSeparately,
            SuperAction::Both => SuperclassAction::FoldAndGenerate,
        }
    }
}

/// Arguments of `wrapgen generate`
#[derive(Debug, Clone)]
pub struct Request {
    pub input: String,
    pub output: String,
    pub options: Vec<String>,
    pub debug: bool,
    pub resource_path: Option<String>,
    pub super_namespace: Option<String>,
    pub super_action: SuperAction,
}

/// Run the generate command
pub fn run(request: &Request) -> Result<()> {
    let report = execute(request)?;

    println!("✓ Generated: {}", report.generated.len());
    if !report.skipped.is_empty() {
        println!("  Skipped: {}", report.skipped.join(", "));
    }

    let warnings = DiagnosticManager::global().warning_count();
    if warnings > 0 {
        println!("  Warnings: {warnings}");
    }

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("✗ {}: {}", failure.class, failure.error);
        }
        anyhow::bail!("{} class(es) failed", report.failures.len());
    }

    Ok(())
}

/// Load the model, merge options and run the wrapper generator
pub fn execute(request: &Request) -> Result<RunReport> {
    let model = ClassModel::from_file(&request.input)
        .with_context(|| format!("Failed to load class model: {}", request.input))?;

    let config = build_config(&model, request)?;
    wrapgen_logging::set_level(LogLevel::for_debug(config.debug));

    let output = DirectoryOutput::new(Path::new(&request.output));
    let mut driver = Driver::new(WrapperGenerator::new(&config), &output);
    driver.configure(&config);

    if let Some(namespace) = &request.super_namespace {
        let rule = SuperclassRule::within_namespace(request.super_action.into(), namespace);
        driver = driver.with_superclass_rule(rule);
    }

    tracing::debug!(classes = model.classes.len(), output = request.output.as_str(), "generate");
    Ok(driver.run(&model))
}

/// Model options first, then command-line options on top
pub fn build_config(model: &ClassModel, request: &Request) -> Result<GeneratorConfig> {
    let mut config = model.config();

    for option in &request.options {
        let (name, value) = parse_option(option)?;
        config.apply_option(name, value);
    }

    if request.debug {
        config.apply_option(OPTION_DEBUG.to_string(), "true".to_string());
    }

    if let Some(path) = &request.resource_path {
        config.apply_option(OPTION_RESOURCE_PATH.to_string(), path.clone());
    }

    Ok(config)
}

/// Split `key=value`
pub fn parse_option(option: &str) -> Result<(String, String)> {
    match option.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => anyhow::bail!("Invalid option '{}', expected KEY=VALUE", option),
    }
}
