//! Naming helpers: qualified-name splitting and accessor conventions.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `a.b.Foo` | [`namespace_of`] | `a.b` |
//! | `a.b.Foo<X>` | [`split_class_name`] | `a.b` + `Foo` |
//! | `getDisplayName` | [`split_accessor`] | getter, `DisplayName` |
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`decapitalize`] | `word` |

use crate::error::{GenError, GenResult};

/// Namespace of a fully-qualified name: everything before the final `.`.
///
/// Fails with [`GenError::InvalidIdentifier`] for a bare name.
///
/// # Examples
///
/// ```
/// use wrapgen_core::naming::namespace_of;
///
/// assert_eq!(namespace_of("a.b.Foo").unwrap(), "a.b");
/// assert!(namespace_of("Foo").is_err());
/// ```
pub fn namespace_of(qualified: &str) -> GenResult<&str> {
    match qualified.rfind('.') {
        Some(pos) if pos > 0 => Ok(&qualified[..pos]),
        _ => Err(GenError::InvalidIdentifier(qualified.to_string())),
    }
}

/// The type name without its type arguments.
pub fn non_generic(ty: &str) -> &str {
    let ty = ty.trim();
    if !ty.ends_with('>') {
        return ty;
    }

    match ty.find('<') {
        Some(pos) => ty[..pos].trim_end(),
        None => ty,
    }
}

/// A class name split into its namespace and simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitClassName {
    pub namespace: String,
    pub simple_name: String,
}

/// Split a (possibly generic) class descriptor into namespace and simple name.
///
/// Fails with [`GenError::InvalidIdentifier`] for a bare name or an empty
/// simple name (`a.`).
pub fn split_class_name(ty: &str) -> GenResult<SplitClassName> {
    let class_name = non_generic(ty);
    let namespace = namespace_of(class_name)?;
    let simple_name = &class_name[namespace.len() + 1..];

    if simple_name.is_empty() {
        return Err(GenError::InvalidIdentifier(ty.to_string()));
    }

    Ok(SplitClassName {
        namespace: namespace.to_string(),
        simple_name: simple_name.to_string(),
    })
}

/// Whether an accessor reads or writes its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// A `get`/`set` method name split into kind and property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMethodName {
    pub kind: AccessorKind,
    /// Property name with its first character upper-cased (`DisplayName`).
    pub uc_field_name: String,
    pub method_name: String,
}

impl SplitMethodName {
    pub fn is_setter(&self) -> bool {
        self.kind == AccessorKind::Setter
    }

    /// Property name as a field would spell it (`displayName`).
    pub fn field_name(&self) -> String {
        decapitalize(&self.uc_field_name)
    }
}

/// Split an accessor method name by the `get`/`set` + upper-case convention.
///
/// # Examples
///
/// ```
/// use wrapgen_core::naming::{split_accessor, AccessorKind};
///
/// let split = split_accessor("setDisplayName").unwrap();
/// assert_eq!(split.kind, AccessorKind::Setter);
/// assert_eq!(split.uc_field_name, "DisplayName");
///
/// assert!(split_accessor("getter").is_err());
/// assert!(split_accessor("fetchName").is_err());
/// ```
pub fn split_accessor(method_name: &str) -> GenResult<SplitMethodName> {
    let (kind, rest) = if let Some(rest) = method_name.strip_prefix("get") {
        (AccessorKind::Getter, rest)
    } else if let Some(rest) = method_name.strip_prefix("set") {
        (AccessorKind::Setter, rest)
    } else {
        return Err(GenError::InvalidMemberName(method_name.to_string()));
    };

    match rest.chars().next() {
        Some(first) if first.is_uppercase() => Ok(SplitMethodName {
            kind,
            uc_field_name: rest.to_string(),
            method_name: method_name.to_string(),
        }),
        _ => Err(GenError::InvalidMemberName(method_name.to_string())),
    }
}

/// Call expression for a getter: `obj.getName()`.
pub fn make_call_getter(obj_ref: &str, uc_field_name: &str) -> String {
    format!("{obj_ref}.get{uc_field_name}()")
}

/// Call expression for a setter: `obj.setName(val)`.
pub fn make_call_setter(obj_ref: &str, uc_field_name: &str, val: &str) -> String {
    format!("{obj_ref}.set{uc_field_name}({val})")
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use wrapgen_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
