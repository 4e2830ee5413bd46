//! Runs a generator over a class model

use crate::assembler::ClassHandler;
use crate::generator::Generator;
use crate::model::{ClassDecl, ClassModel};
use crate::sink::OutputFactory;
use crate::walker::{SuperclassRule, WalkContext, walk_members};
use std::collections::BTreeSet;
use wrapgen_core::{GenError, GenResult, GeneratorConfig};

/// A class whose generation was aborted
#[derive(Debug)]
pub struct ClassFailure {
    /// Empty when the failure came from `processing_over`
    pub class: String,
    pub error: GenError,
}

/// Outcome of [`Driver::run`]
#[derive(Debug, Default)]
pub struct RunReport {
    /// Qualified names of classes whose file was written
    pub generated: Vec<String>,
    /// Classes the generator declined or that produced no output
    pub skipped: Vec<String>,
    pub failures: Vec<ClassFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a [`Generator`] class by class
///
/// Each class is generated in isolation: a failure aborts that class only
/// and is recorded in the [`RunReport`].
pub struct Driver<'f, G> {
    generator: G,
    factory: &'f dyn OutputFactory,
    rule: SuperclassRule,
}

impl<'f, G: Generator> Driver<'f, G> {
    pub fn new(generator: G, factory: &'f dyn OutputFactory) -> Self {
        Self {
            generator,
            factory,
            rule: SuperclassRule::default(),
        }
    }

    pub fn with_superclass_rule(mut self, rule: SuperclassRule) -> Self {
        self.rule = rule;
        self
    }

    /// Hand passthrough options to the generator
    pub fn configure(&mut self, config: &GeneratorConfig) {
        for (name, value) in &config.options {
            self.generator.option(name, value);
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Generate every class in `model`, then call `processing_over`
    pub fn run(&mut self, model: &ClassModel) -> RunReport {
        let mut report = RunReport::default();
        let mut visited = BTreeSet::new();

        for class in &model.classes {
            self.process_class(model, class, &mut visited, &mut report);
        }

        if let Err(e) = self.generator.processing_over() {
            tracing::error!("processing over failed: {}", e);
            report.failures.push(ClassFailure {
                class: String::new(),
                error: e,
            });
        }

        tracing::debug!(
            generated = report.generated.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "run complete"
        );
        report
    }

    fn process_class<'m>(
        &mut self,
        model: &'m ClassModel,
        class: &'m ClassDecl,
        visited: &mut BTreeSet<&'m str>,
        report: &mut RunReport,
    ) {
        if !visited.insert(class.name.as_str()) {
            tracing::debug!(class = class.name.as_str(), "already processed");
            return;
        }

        tracing::debug!(class = class.name.as_str(), depth = 1, "start class");

        match self.generate_class(model, class) {
            Ok(true) => report.generated.push(class.name.clone()),
            Ok(false) => report.skipped.push(class.name.clone()),
            Err(e) => {
                tracing::error!(class = class.name.as_str(), "class generation aborted: {}", e);
                report.failures.push(ClassFailure {
                    class: class.name.clone(),
                    error: e,
                });
            }
        }

        if !self.rule.action().generates() {
            return;
        }

        let Some(superclass) = class.superclass.as_deref() else {
            return;
        };

        if !self.rule.applies(superclass) {
            return;
        }

        match model.find(superclass) {
            Some(superclass) => self.process_class(model, superclass, visited, report),
            None => {
                tracing::debug!(superclass, "superclass not in model, skipped");
            }
        }
    }

    fn generate_class(&mut self, model: &ClassModel, class: &ClassDecl) -> GenResult<bool> {
        let Some(mut handler) = self.generator.start_class(class, self.factory)? else {
            return Ok(false);
        };

        let ctx = WalkContext::root(&class.name);
        walk_members(&mut self.generator, &mut handler, class, ctx)?;

        if self.rule.action().folds() {
            self.fold_superclasses(model, class, &mut handler, ctx)?;
        }

        tracing::debug!(class = class.name.as_str(), "end class");
        self.generator.end_class(handler)
    }

    fn fold_superclasses(
        &mut self,
        model: &ClassModel,
        class: &ClassDecl,
        handler: &mut ClassHandler,
        ctx: WalkContext<'_>,
    ) -> GenResult<()> {
        let mut seen = BTreeSet::new();
        let mut next = class.superclass.as_deref();

        while let Some(name) = next {
            if !self.rule.applies(name) || !seen.insert(name) {
                break;
            }

            let Some(superclass) = model.find(name) else {
                tracing::debug!(superclass = name, "superclass not in model, skipped");
                break;
            };

            tracing::debug!(class = ctx.class_name, superclass = name, "process super");
            for method in superclass.methods() {
                self.generator.process_method(handler, method, ctx)?;
            }

            next = superclass.superclass.as_deref();
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "driver/driver_tests.rs"]
mod driver_tests;
