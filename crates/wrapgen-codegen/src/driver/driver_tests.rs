#![allow(non_snake_case)]

use super::*;
use crate::generator::WrapperGenerator;
use crate::sink::MemoryOutput;
use crate::walker::SuperclassAction;

const MODEL: &str = r#"
[[classes]]
name = "org.example.Person"
superclass = "org.example.Entity"

[[classes.members]]
kind = "method"
name = "getName"
return_type = "java.lang.String"

[[classes]]
name = "org.example.Broken"

[[classes.members]]
kind = "method"
name = "getItems"
return_type = "java.util.List<org.other.Item"

[[classes]]
name = "org.example.Entity"
superclass = "org.example.Root"

[[classes.members]]
kind = "method"
name = "getId"
return_type = "long"

[[classes]]
name = "org.example.Root"

[[classes.members]]
kind = "method"
name = "getCreated"
return_type = "java.time.Instant"
"#;

fn model() -> ClassModel {
    ClassModel::from_toml_str(MODEL).unwrap()
}

#[test]
fn Driver___run___failing_class_does_not_affect_others() {
    let output = MemoryOutput::new();
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    let report = driver.run(&model());

    assert_eq!(
        report.generated,
        vec![
            "org.example.Person",
            "org.example.Entity",
            "org.example.Root"
        ]
    );
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].class, "org.example.Broken");
    assert!(matches!(
        report.failures[0].error,
        GenError::MalformedType { .. }
    ));
    assert!(!report.is_success());
}

#[test]
fn Driver___run___failed_class_sink_released() {
    let output = MemoryOutput::new();
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    driver.run(&model());

    assert_eq!(output.release_count("org.example.BrokenWrapper"), 1);
}

#[test]
fn Driver___run___refused_output_recorded_as_failure() {
    let output = MemoryOutput::new();
    output.refuse("org.example.PersonWrapper");
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    let report = driver.run(&model());

    let failed: Vec<&str> = report.failures.iter().map(|f| f.class.as_str()).collect();
    assert_eq!(failed, vec!["org.example.Person", "org.example.Broken"]);
    assert!(matches!(
        report.failures[0].error,
        GenError::ResourceAcquisition { .. }
    ));
}

#[test]
fn Driver___run___default_namespace_class_skipped() {
    let output = MemoryOutput::new();
    let model = ClassModel::from_toml_str("[[classes]]\nname = \"Loose\"\n").unwrap();
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    let report = driver.run(&model);

    assert_eq!(report.skipped, vec!["Loose"]);
    assert!(report.generated.is_empty());
    assert!(output.names().is_empty());
}

#[test]
fn Driver___run___foreign_type_sharing_class_name_stays_qualified() {
    let output = MemoryOutput::new();
    let model = ClassModel::from_toml_str(
        r#"
[[classes]]
name = "a.b.Foo"

[[classes.members]]
kind = "method"
name = "getOther"
return_type = "a.c.Foo"
"#,
    )
    .unwrap();
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    let report = driver.run(&model);

    assert!(report.is_success(), "{:?}", report.failures);
    let expected = "\
package a.b;

public class FooWrapper {
    private final Foo entity;

    public FooWrapper(final Foo entity) {
        this.entity = entity;
    }

    public a.c.Foo getOther() {
        return entity.getOther();
    }
}
";
    assert_eq!(output.content("a.b.FooWrapper").as_deref(), Some(expected));
}

#[test]
fn Driver___run___empty_simple_name_recorded_as_failure() {
    let output = MemoryOutput::new();
    let model = ClassModel::from_toml_str("[[classes]]\nname = \"a.\"\n").unwrap();
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    let report = driver.run(&model);

    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        GenError::InvalidIdentifier(_)
    ));
    assert!(output.names().is_empty());
}

#[test]
fn Driver___fold_methods___superclass_chain_folded_into_class() {
    let output = MemoryOutput::new();
    let rule = SuperclassRule::within_namespace(SuperclassAction::FoldMethods, "org.example");
    let mut driver = Driver::new(WrapperGenerator::default(), &output).with_superclass_rule(rule);

    driver.run(&model());

    let person = output.content("org.example.PersonWrapper").unwrap();
    assert!(person.contains("public String getName()"));
    assert!(person.contains("public long getId()"));
    assert!(person.contains("public Instant getCreated()"));
    assert!(person.contains("import java.time.Instant;"));
    let name_at = person.find("getName").unwrap();
    let id_at = person.find("getId").unwrap();
    assert!(name_at < id_at);
}

#[test]
fn Driver___fold_methods___predicate_stops_chain() {
    let output = MemoryOutput::new();
    let rule = SuperclassRule::new(SuperclassAction::FoldMethods, |name| {
        name == "org.example.Entity"
    });
    let mut driver = Driver::new(WrapperGenerator::default(), &output).with_superclass_rule(rule);

    driver.run(&model());

    let person = output.content("org.example.PersonWrapper").unwrap();
    assert!(person.contains("getId"));
    assert!(!person.contains("getCreated"));
}

#[test]
fn Driver___generate_separately___superclass_generated_once() {
    let output = MemoryOutput::new();
    let model = ClassModel::from_toml_str(
        r#"
[[classes]]
name = "a.Child"
superclass = "a.Parent"

[[classes]]
name = "a.Parent"
superclass = "a.Missing"

[[classes.members]]
kind = "method"
name = "getId"
return_type = "long"
"#,
    )
    .unwrap();
    let rule = SuperclassRule::within_namespace(SuperclassAction::GenerateSeparately, "a");
    let mut driver = Driver::new(WrapperGenerator::default(), &output).with_superclass_rule(rule);

    let report = driver.run(&model);

    assert_eq!(report.generated, vec!["a.Child", "a.Parent"]);
    assert!(report.is_success());
    let child = output.content("a.ChildWrapper").unwrap();
    assert!(!child.contains("getId"));
    assert_eq!(output.release_count("a.ParentWrapper"), 1);
}

#[test]
fn Driver___cyclic_superclasses___terminate() {
    let output = MemoryOutput::new();
    let model = ClassModel::from_toml_str(
        r#"
[[classes]]
name = "a.A"
superclass = "a.B"

[[classes]]
name = "a.B"
superclass = "a.A"
"#,
    )
    .unwrap();
    let rule = SuperclassRule::within_namespace(SuperclassAction::FoldAndGenerate, "a");
    let mut driver = Driver::new(WrapperGenerator::default(), &output).with_superclass_rule(rule);

    let report = driver.run(&model);

    assert_eq!(report.generated, vec!["a.A", "a.B"]);
}

#[test]
fn Driver___configure___passes_options_to_generator() {
    let output = MemoryOutput::new();
    let config = GeneratorConfig::from_options([("wrapperSuffix", "Proxy")]);
    let mut driver = Driver::new(WrapperGenerator::default(), &output);

    driver.configure(&config);
    driver.run(&model());

    assert_eq!(driver.generator().suffix(), "Proxy");
    assert!(output.content("org.example.PersonProxy").is_some());
}

#[test]
fn Driver___run___calls_processing_over_once() {
    struct Counting {
        over: usize,
    }

    impl Generator for Counting {
        fn start_class(
            &mut self,
            _class: &ClassDecl,
            _factory: &dyn OutputFactory,
        ) -> GenResult<Option<ClassHandler>> {
            Ok(None)
        }

        fn process_method(
            &mut self,
            _handler: &mut ClassHandler,
            _method: &crate::model::MethodDecl,
            _ctx: WalkContext<'_>,
        ) -> GenResult<()> {
            Ok(())
        }

        fn processing_over(&mut self) -> GenResult<()> {
            self.over += 1;
            Ok(())
        }
    }

    let output = MemoryOutput::new();
    let mut driver = Driver::new(Counting { over: 0 }, &output);

    let report = driver.run(&model());

    assert_eq!(driver.into_generator().over, 1);
    assert_eq!(report.skipped.len(), 4);
}
