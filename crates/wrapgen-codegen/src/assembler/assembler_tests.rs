#![allow(non_snake_case)]

use super::*;
use crate::sink::MemoryOutput;

fn ty(descriptor: &str) -> TypeDescriptor {
    TypeDescriptor::parse(descriptor).unwrap()
}

fn param(name: &str, descriptor: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: ty(descriptor),
    }
}

fn signature(name: &str, params: Vec<Parameter>, ret: &str, throws: &[&str]) -> MethodSignature {
    MethodSignature {
        name: name.to_string(),
        parameters: params,
        return_type: ty(ret),
        throws: throws.iter().map(|t| ty(t)).collect(),
    }
}

// GeneratedFile

#[test]
fn GeneratedFile___without_namespace___serializes_empty() {
    let mut file = GeneratedFile::new();
    file.add_field("    int x;");
    file.add_method("    void run() {}");

    assert_eq!(file.serialize(), "");
}

#[test]
fn GeneratedFile___serialize___fixed_section_order() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");
    file.open_type("public class FooWrapper {");
    file.add_method("    public void b() {\n    }");
    file.add_field("    private final Foo entity;");
    file.add_constructor("    public FooWrapper() {\n    }");
    file.register_import("java.util.List");
    file.add_method("    public void a() {\n    }");

    let expected = "\
package a.b;

import java.util.List;

public class FooWrapper {
    private final Foo entity;

    public FooWrapper() {
    }

    public void b() {
    }

    public void a() {
    }
}
";
    assert_eq!(file.serialize(), expected);
}

#[test]
fn GeneratedFile___no_imports___omits_import_block() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");
    file.open_type("public class Empty {");

    assert_eq!(file.serialize(), "package a.b;\n\npublic class Empty {\n}\n");
}

#[test]
fn GeneratedFile___serialize_twice___identical_output() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");
    file.register_import("x.y.Z");
    file.add_field("    int x;");

    assert_eq!(file.serialize(), file.serialize());
}

#[test]
fn GeneratedFile___duplicate_fields___collapse() {
    let mut file = GeneratedFile::new();
    file.add_field("    private int count;");
    file.add_field("    private int count;");

    assert_eq!(file.field_count(), 1);
}

#[test]
fn GeneratedFile___duplicate_methods___both_kept_in_order() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a");
    file.add_method("    public void run() {\n    }");
    file.add_method("    public void run() {\n    }");

    assert_eq!(file.method_count(), 2);
    assert_eq!(file.serialize().matches("public void run()").count(), 2);
}

#[test]
fn GeneratedFile___fields___sorted() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a");
    file.add_field("    int b;");
    file.add_field("    int a;");

    let text = file.serialize();

    assert!(text.find("int a;").unwrap() < text.find("int b;").unwrap());
}

#[test]
fn GeneratedFile___start_namespace___only_first_call_counts() {
    let mut file = GeneratedFile::new();

    assert!(file.start_namespace("a.b"));
    assert!(!file.start_namespace("c.d"));
    assert_eq!(file.namespace(), Some("a.b"));
}

#[test]
fn GeneratedFile___register_import___deduplicates() {
    let mut file = GeneratedFile::new();

    file.register_import("java.util.List");
    file.register_import("java.util.List");

    assert_eq!(file.imports().len(), 1);
}

#[test]
fn GeneratedFile___render___uses_file_namespace() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");
    let policy = ImportPolicy::default();

    let rendered = file.render(&ty("java.util.List<a.b.Item>"), &policy);

    assert_eq!(rendered, "List<Item>");
    assert!(file.imports().contains("java.util.List"));
    assert!(!file.imports().contains("a.b.Item"));
}

// generate_signature

#[test]
fn generate_signature___no_parameters___single_line() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");

    let header = generate_signature(
        &mut file,
        &ImportPolicy::default(),
        &signature("getName", vec![], "java.lang.String", &[]),
    );

    assert_eq!(header, "    public String getName() {");
    assert!(file.imports().is_empty());
}

#[test]
fn generate_signature___parameters___aligned_continuation_lines() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");

    let header = generate_signature(
        &mut file,
        &ImportPolicy::default(),
        &signature(
            "put",
            vec![param("key", "a.b.Key"), param("value", "x.Value")],
            "void",
            &[],
        ),
    );

    let pad = " ".repeat("    public void put(".len());
    assert_eq!(header, format!("    public void put(Key key,\n{pad}Value value) {{"));
    assert!(file.imports().contains("x.Value"));
}

#[test]
fn generate_signature___throws___appends_failure_clause() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");

    let header = generate_signature(
        &mut file,
        &ImportPolicy::default(),
        &signature(
            "load",
            vec![],
            "void",
            &["java.io.IOException", "a.b.LoadException"],
        ),
    );

    assert_eq!(
        header,
        "    public void load()\n            throws IOException, LoadException {"
    );
    assert!(file.imports().contains("java.io.IOException"));
    assert!(!file.imports().contains("a.b.LoadException"));
}

#[test]
fn generate_signature___nested_generics___registers_each_import_once() {
    let mut file = GeneratedFile::new();
    file.start_namespace("a.b");

    let header = generate_signature(
        &mut file,
        &ImportPolicy::default(),
        &signature(
            "index",
            vec![param("items", "java.util.List<x.Item>")],
            "java.util.Map<x.Item, java.util.List<x.Item>>",
            &[],
        ),
    );

    assert!(header.starts_with("    public Map<Item, List<Item>> index(List<Item> items)"));
    let imports: Vec<&str> = file.imports().iter().collect();
    assert_eq!(imports, vec!["java.util.List", "java.util.Map", "x.Item"]);
}

// ClassHandler

#[test]
fn ClassHandler___end___writes_and_releases_sink() {
    let output = MemoryOutput::new();
    let mut handler =
        ClassHandler::open(&output, "a.b.FooWrapper", ImportPolicy::default()).unwrap();
    handler.start_namespace("a.b");
    handler.open_type("public class FooWrapper {");
    let rendered = handler.render(&ty("java.util.Set<a.b.Foo>"));

    let written = handler.end().unwrap();

    assert!(written);
    assert_eq!(rendered, "Set<Foo>");
    assert_eq!(output.release_count("a.b.FooWrapper"), 1);
    let text = output.content("a.b.FooWrapper").unwrap();
    assert!(text.starts_with("package a.b;\n\nimport java.util.Set;\n"));
}

#[test]
fn ClassHandler___end_without_namespace___writes_nothing() {
    let output = MemoryOutput::new();
    let handler = ClassHandler::open(&output, "a.Nothing", ImportPolicy::default()).unwrap();

    let written = handler.end().unwrap();

    assert!(!written);
    assert_eq!(output.content("a.Nothing").as_deref(), Some(""));
    assert_eq!(output.release_count("a.Nothing"), 1);
}

#[test]
fn ClassHandler___dropped_midway___sink_still_released() {
    let output = MemoryOutput::new();
    {
        let mut handler =
            ClassHandler::open(&output, "a.Broken", ImportPolicy::default()).unwrap();
        handler.start_namespace("a");
    }

    assert_eq!(output.release_count("a.Broken"), 1);
}

#[test]
fn ClassHandler___open_refused___resource_acquisition_error() {
    let output = MemoryOutput::new();
    output.refuse("a.Denied");

    let result = ClassHandler::open(&output, "a.Denied", ImportPolicy::default());

    assert!(matches!(
        result,
        Err(wrapgen_core::GenError::ResourceAcquisition { .. })
    ));
}
