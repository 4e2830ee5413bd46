//! Serialized class model
//!
//! The class model stands in for the compiler's reflective element tree: a
//! list of classes, each with an ordered list of members. It is loaded from
//! TOML or JSON:
//!
//! ```toml
//! [options]
//! wrapperSuffix = "Wrapper"
//!
//! [[classes]]
//! name = "org.example.Person"
//! superclass = "org.example.Entity"
//!
//! [[classes.members]]
//! kind = "method"
//! name = "getName"
//! return_type = "java.lang.String"
//!
//! [[classes.members]]
//! kind = "method"
//! name = "setTags"
//! parameters = [{ name = "val", type = "java.util.List<java.lang.String>" }]
//! ```

use crate::assembler::{MethodSignature, Parameter};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use wrapgen_core::naming::{self, AccessorKind, SplitMethodName};
use wrapgen_core::{GenError, GenResult, GeneratorConfig, TypeDescriptor};

/// A set of classes to generate from, plus the options to run with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    #[serde(default)]
    pub options: BTreeMap<String, String>,

    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

/// A declared class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Fully-qualified name
    pub name: String,

    #[serde(default)]
    pub superclass: Option<String>,

    /// Members in declaration order
    #[serde(default)]
    pub members: Vec<Element>,
}

/// A member of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Class(ClassDecl),
    Method(MethodDecl),
    Field(FieldDecl),
}

/// A declared method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<ParamDecl>,

    #[serde(default = "void_type")]
    pub return_type: String,

    /// Declared failure types
    #[serde(default)]
    pub throws: Vec<String>,
}

fn void_type() -> String {
    "void".to_string()
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

/// A declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

/// Classification of a method by the accessor naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Getter,
    Setter,
    Method,
}

impl ClassModel {
    /// Load a model, choosing the format from the file extension
    ///
    /// `.json` files are read as JSON; everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("cannot read model {path:?}: {e}")))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse a model from TOML text
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(|e| GenError::Config(format!("invalid model: {e}")))
    }

    /// Parse a model from JSON text
    pub fn from_json_str(content: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Look up a top-level class by qualified name
    pub fn find(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Configuration built from the model's `[options]` table
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::from_options(self.options.clone())
    }

    /// Check that every class name is qualified and unique and that every
    /// descriptor in the model parses
    pub fn validate(&self) -> GenResult<()> {
        let mut seen = BTreeSet::new();

        for class in &self.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(GenError::Config(format!(
                    "duplicate class in model: {}",
                    class.name
                )));
            }
            class.validate()?;
        }

        Ok(())
    }
}

impl ClassDecl {
    /// The class name as a descriptor
    pub fn descriptor(&self) -> GenResult<TypeDescriptor> {
        TypeDescriptor::parse(&self.name)
    }

    /// Methods in declaration order, ignoring other members
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            Element::Method(method) => Some(method),
            _ => None,
        })
    }

    fn validate(&self) -> GenResult<()> {
        naming::split_class_name(&self.name)?;
        self.descriptor()?;

        if let Some(superclass) = &self.superclass {
            TypeDescriptor::parse(superclass)?;
        }

        for member in &self.members {
            match member {
                Element::Class(nested) => nested.validate()?,
                Element::Method(method) => {
                    method.signature()?;
                }
                Element::Field(field) => {
                    field.descriptor()?;
                }
            }
        }

        Ok(())
    }
}

impl MethodDecl {
    /// Parse every descriptor of this method into a signature
    pub fn signature(&self) -> GenResult<MethodSignature> {
        let parameters = self
            .parameters
            .iter()
            .map(|param| {
                Ok(Parameter {
                    name: param.name.clone(),
                    ty: TypeDescriptor::parse(&param.ty)?,
                })
            })
            .collect::<GenResult<Vec<_>>>()?;

        let throws = self
            .throws
            .iter()
            .map(|ty| TypeDescriptor::parse(ty))
            .collect::<GenResult<Vec<_>>>()?;

        Ok(MethodSignature {
            name: self.name.clone(),
            parameters,
            return_type: TypeDescriptor::parse(&self.return_type)?,
            throws,
        })
    }

    /// Classify by name only; never fails
    pub fn member_kind(&self) -> MemberKind {
        match naming::split_accessor(&self.name) {
            Ok(split) => match split.kind {
                AccessorKind::Getter => MemberKind::Getter,
                AccessorKind::Setter => MemberKind::Setter,
            },
            Err(_) => MemberKind::Method,
        }
    }

    /// Split the name by the accessor convention
    ///
    /// Fails with [`GenError::InvalidMemberName`] for names that do not
    /// follow it.
    pub fn accessor(&self) -> GenResult<SplitMethodName> {
        naming::split_accessor(&self.name)
    }
}

impl FieldDecl {
    pub fn descriptor(&self) -> GenResult<TypeDescriptor> {
        TypeDescriptor::parse(&self.ty)
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
