#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const PERSON_TOML: &str = r#"
[options]
wrapperSuffix = "Proxy"
debug = "true"

[[classes]]
name = "org.example.Person"
superclass = "org.example.Entity"

[[classes.members]]
kind = "field"
name = "name"
type = "java.lang.String"

[[classes.members]]
kind = "method"
name = "getName"
return_type = "java.lang.String"

[[classes.members]]
kind = "method"
name = "setTags"
parameters = [{ name = "val", type = "java.util.List<java.lang.String>" }]

[[classes.members]]
kind = "class"
name = "org.example.Person.Address"

[[classes]]
name = "org.example.Entity"
"#;

fn method(name: &str) -> MethodDecl {
    MethodDecl {
        name: name.to_string(),
        parameters: vec![],
        return_type: "void".to_string(),
        throws: vec![],
    }
}

fn class(name: &str, members: Vec<Element>) -> ClassDecl {
    ClassDecl {
        name: name.to_string(),
        superclass: None,
        members,
    }
}

// Loading

#[test]
fn ClassModel___from_toml_str___parses_classes_and_members_in_order() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    assert_eq!(model.classes.len(), 2);
    let person = &model.classes[0];
    assert_eq!(person.name, "org.example.Person");
    assert_eq!(person.superclass.as_deref(), Some("org.example.Entity"));
    assert_eq!(person.members.len(), 4);
    assert!(matches!(person.members[0], Element::Field(_)));
    assert!(matches!(person.members[1], Element::Method(_)));
    assert!(matches!(person.members[3], Element::Class(_)));
}

#[test]
fn ClassModel___from_toml_str___method_defaults_to_void_without_parameters() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    let Element::Method(set_tags) = &model.classes[0].members[2] else {
        panic!("expected method");
    };
    assert_eq!(set_tags.return_type, "void");
    assert!(set_tags.throws.is_empty());
    assert_eq!(set_tags.parameters[0].ty, "java.util.List<java.lang.String>");
}

#[test]
fn ClassModel___from_json_str___parses_tagged_members() {
    let json = r#"{
        "classes": [{
            "name": "a.b.Foo",
            "members": [
                { "kind": "method", "name": "size", "return_type": "int" },
                { "kind": "field", "name": "count", "type": "long" }
            ]
        }]
    }"#;

    let model = ClassModel::from_json_str(json).unwrap();

    assert!(model.options.is_empty());
    assert_eq!(model.classes[0].members.len(), 2);
}

#[test]
fn ClassModel___from_toml_str___unknown_kind_is_config_error() {
    let toml = r#"
[[classes]]
name = "a.b.Foo"

[[classes.members]]
kind = "constructor"
name = "Foo"
"#;

    let result = ClassModel::from_toml_str(toml);

    assert!(matches!(result, Err(GenError::Config(_))));
}

#[test]
fn ClassModel___from_file___missing_file_is_config_error() {
    let result = ClassModel::from_file("/nonexistent/model.toml");

    assert!(matches!(result, Err(GenError::Config(_))));
}

#[test]
fn ClassModel___config___reads_options_table() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    let config = model.config();

    assert!(config.debug);
    assert_eq!(config.option("wrapperSuffix"), Some("Proxy"));
}

#[test]
fn ClassModel___find___looks_up_by_qualified_name() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    assert!(model.find("org.example.Entity").is_some());
    assert!(model.find("Entity").is_none());
}

// Validation

#[test]
fn ClassModel___validate___accepts_well_formed_model() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    assert!(model.validate().is_ok());
}

#[test]
fn ClassModel___validate___rejects_duplicate_classes() {
    let model = ClassModel {
        options: BTreeMap::new(),
        classes: vec![class("a.b.Foo", vec![]), class("a.b.Foo", vec![])],
    };

    let err = model.validate().unwrap_err();

    assert!(err.to_string().contains("duplicate class"));
}

#[test]
fn ClassModel___validate___rejects_unqualified_class_name() {
    let model = ClassModel {
        options: BTreeMap::new(),
        classes: vec![class("Foo", vec![])],
    };

    assert!(matches!(
        model.validate(),
        Err(GenError::InvalidIdentifier(_))
    ));
}

#[test]
fn ClassModel___validate___rejects_malformed_parameter_type() {
    let mut bad = method("setItems");
    bad.parameters.push(ParamDecl {
        name: "val".to_string(),
        ty: "java.util.List<a.Item".to_string(),
    });
    let model = ClassModel {
        options: BTreeMap::new(),
        classes: vec![class("a.b.Foo", vec![Element::Method(bad)])],
    };

    assert!(matches!(
        model.validate(),
        Err(GenError::MalformedType { .. })
    ));
}

#[test]
fn ClassModel___validate___checks_nested_classes() {
    let nested = class(
        "a.b.Foo.Inner",
        vec![Element::Field(FieldDecl {
            name: "x".to_string(),
            ty: "a.Map<a.K>>".to_string(),
        })],
    );
    let model = ClassModel {
        options: BTreeMap::new(),
        classes: vec![class("a.b.Foo", vec![Element::Class(nested)])],
    };

    assert!(model.validate().is_err());
}

// Methods

#[test]
fn MethodDecl___signature___parses_all_descriptors() {
    let decl = MethodDecl {
        name: "find".to_string(),
        parameters: vec![ParamDecl {
            name: "key".to_string(),
            ty: "a.Key".to_string(),
        }],
        return_type: "java.util.Map<a.Key, a.Value>".to_string(),
        throws: vec!["java.io.IOException".to_string()],
    };

    let signature = decl.signature().unwrap();

    assert_eq!(signature.name, "find");
    assert_eq!(signature.parameters[0].ty.raw_name, "Key");
    assert_eq!(signature.return_type.type_arguments.len(), 2);
    assert_eq!(signature.throws[0].raw_name, "IOException");
}

#[test_case("getName", MemberKind::Getter ; "getter")]
#[test_case("setName", MemberKind::Setter ; "setter")]
#[test_case("getter", MemberKind::Method ; "lower case after get")]
#[test_case("get", MemberKind::Method ; "bare get")]
#[test_case("reset", MemberKind::Method ; "plain method")]
#[test_case("settle", MemberKind::Method ; "set prefix without upper case")]
fn MethodDecl___member_kind___classifies_by_name(name: &str, expected: MemberKind) {
    assert_eq!(method(name).member_kind(), expected);
}

#[test]
fn MethodDecl___accessor___fails_for_plain_method() {
    let result = method("reset").accessor();

    assert!(matches!(result, Err(GenError::InvalidMemberName(_))));
}

#[test]
fn ClassDecl___methods___skips_fields_and_nested_classes() {
    let model = ClassModel::from_toml_str(PERSON_TOML).unwrap();

    let names: Vec<&str> = model.classes[0]
        .methods()
        .map(|m| m.name.as_str())
        .collect();

    assert_eq!(names, vec!["getName", "setTags"]);
}
