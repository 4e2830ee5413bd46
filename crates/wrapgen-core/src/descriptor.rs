//! Type descriptors and the descriptor-string parser.
//!
//! A descriptor is the canonical textual form of a declared type, as the
//! compiler prints it:
//!
//! ```text
//! Name     ::= Identifier ('.' Identifier)*
//! Type     ::= Name ['<' TypeArgs '>'] ('[' ']')*
//!            | '?' [('extends' | 'super') Type]
//!            | Primitive ('[' ']')*
//! TypeArgs ::= Type (',' Type)*
//! ```
//!
//! Parsing never guesses: an unbalanced bracket, an empty argument or a
//! stray character is reported as [`GenError::MalformedType`].
//!
//! # Examples
//!
//! ```
//! use wrapgen_core::TypeDescriptor;
//!
//! let ty = TypeDescriptor::parse("java.util.Map<java.lang.String, java.util.List<a.b.Item>>").unwrap();
//!
//! assert_eq!(ty.raw_name, "Map");
//! assert_eq!(ty.qualified_name.as_deref(), Some("java.util.Map"));
//! assert_eq!(ty.type_arguments.len(), 2);
//! assert_eq!(ty.type_arguments[1].type_arguments[0].raw_name, "Item");
//! ```

use crate::error::{GenError, GenResult};
use crate::imports::ImportPolicy;
use std::fmt;
use std::str::FromStr;

/// Primitive keywords (and `void`); these never carry a qualified name.
pub const PRIMITIVES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// A parsed type: simple name, qualified name and ordered type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Simple name as it appears in rendered output (`Map`, `int`, `?`).
    pub raw_name: String,

    /// Fully-qualified name; `None` for primitives, `void` and wildcards.
    pub qualified_name: Option<String>,

    /// Type arguments in declaration order.
    pub type_arguments: Vec<TypeDescriptor>,

    /// Number of trailing `[]` pairs.
    pub array_dims: usize,

    /// Bound of a wildcard argument (`? extends T`, `? super T`).
    pub bound: Option<WildcardBound>,
}

/// The bound attached to a wildcard argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub ty: Box<TypeDescriptor>,
}

/// Direction of a wildcard bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Extends,
    Super,
}

impl BoundKind {
    /// The keyword introducing the bound
    pub fn keyword(&self) -> &'static str {
        match self {
            BoundKind::Extends => "extends",
            BoundKind::Super => "super",
        }
    }
}

impl TypeDescriptor {
    /// Parse a descriptor string.
    pub fn parse(descriptor: &str) -> GenResult<Self> {
        parse_type(descriptor)
    }

    /// A primitive or `void`.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            raw_name: name.into(),
            qualified_name: None,
            type_arguments: Vec::new(),
            array_dims: 0,
            bound: None,
        }
    }

    /// A declared (non-primitive) type from its qualified name.
    ///
    /// The simple name is the last `.`-separated segment.
    pub fn declared(qualified: impl Into<String>) -> Self {
        let qualified = qualified.into();
        let raw_name = match qualified.rfind('.') {
            Some(pos) => qualified[pos + 1..].to_string(),
            None => qualified.clone(),
        };

        Self {
            raw_name,
            qualified_name: Some(qualified),
            type_arguments: Vec::new(),
            array_dims: 0,
            bound: None,
        }
    }

    /// An unbounded (`?`) or bounded wildcard.
    pub fn wildcard(bound: Option<(BoundKind, TypeDescriptor)>) -> Self {
        Self {
            raw_name: "?".to_string(),
            qualified_name: None,
            type_arguments: Vec::new(),
            array_dims: 0,
            bound: bound.map(|(kind, ty)| WildcardBound {
                kind,
                ty: Box::new(ty),
            }),
        }
    }

    /// Replace the type arguments.
    pub fn with_arguments(mut self, arguments: Vec<TypeDescriptor>) -> Self {
        self.type_arguments = arguments;
        self
    }

    /// Set the number of array dimensions.
    pub fn with_array_dims(mut self, dims: usize) -> Self {
        self.array_dims = dims;
        self
    }

    /// True for primitives and `void`.
    pub fn is_primitive(&self) -> bool {
        self.qualified_name.is_none() && !self.is_wildcard()
    }

    /// True for `void` only.
    pub fn is_void(&self) -> bool {
        self.is_primitive() && self.raw_name == "void" && self.array_dims == 0
    }

    pub fn is_wildcard(&self) -> bool {
        self.raw_name == "?" && self.qualified_name.is_none()
    }

    /// True when the type carries type arguments.
    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// Namespace of the qualified name, if it has one.
    pub fn namespace(&self) -> Option<&str> {
        let qualified = self.qualified_name.as_deref()?;
        qualified.rfind('.').map(|pos| &qualified[..pos])
    }

    /// Whether this node (not its arguments) needs an import in `namespace`.
    pub fn import_required(&self, policy: &ImportPolicy, namespace: &str) -> bool {
        policy.should_import(self.qualified_name.as_deref(), namespace)
    }

    /// Every qualified name in the tree, in pre-order, duplicates included.
    pub fn qualified_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_qualified_names(&mut names);
        names
    }

    fn collect_qualified_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(qualified) = self.qualified_name.as_deref() {
            names.push(qualified);
        }
        if let Some(bound) = &self.bound {
            bound.ty.collect_qualified_names(names);
        }
        for arg in &self.type_arguments {
            arg.collect_qualified_names(names);
        }
    }
}

impl FromStr for TypeDescriptor {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the fully-qualified descriptor form.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.qualified_name, &self.bound) {
            (Some(qualified), _) => write!(f, "{qualified}")?,
            (None, Some(bound)) => write!(f, "? {} {}", bound.kind.keyword(), bound.ty)?,
            (None, None) => write!(f, "{}", self.raw_name)?,
        }

        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }

        for _ in 0..self.array_dims {
            write!(f, "[]")?;
        }

        Ok(())
    }
}

fn parse_type(text: &str) -> GenResult<TypeDescriptor> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenError::malformed(text, "empty type"));
    }

    if let Some(rest) = text.strip_prefix('?') {
        return parse_wildcard(text, rest);
    }

    let (element, array_dims) = strip_array_suffix(text)?;
    let ty = if PRIMITIVES.contains(&element) {
        TypeDescriptor::primitive(element)
    } else if element.ends_with('>') {
        parse_generic(element)?
    } else {
        parse_name(element)?
    };

    Ok(ty.with_array_dims(array_dims))
}

/// Strip `[]` pairs from the end, returning the element text and the count.
fn strip_array_suffix(text: &str) -> GenResult<(&str, usize)> {
    let mut element = text;
    let mut dims = 0;

    while let Some(rest) = element.strip_suffix(']') {
        element = rest
            .trim_end()
            .strip_suffix('[')
            .ok_or_else(|| GenError::malformed(text, "unmatched `]`"))?
            .trim_end();
        dims += 1;
    }

    if element.is_empty() {
        return Err(GenError::malformed(text, "array suffix without element type"));
    }

    Ok((element, dims))
}

fn parse_wildcard(text: &str, rest: &str) -> GenResult<TypeDescriptor> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(TypeDescriptor::wildcard(None));
    }

    let (kind, bound) = if let Some(bound) = rest.strip_prefix("extends ") {
        (BoundKind::Extends, bound)
    } else if let Some(bound) = rest.strip_prefix("super ") {
        (BoundKind::Super, bound)
    } else {
        return Err(GenError::malformed(
            text,
            "wildcard bound must start with `extends` or `super`",
        ));
    };

    Ok(TypeDescriptor::wildcard(Some((kind, parse_type(bound)?))))
}

fn parse_generic(text: &str) -> GenResult<TypeDescriptor> {
    let open = text
        .find('<')
        .ok_or_else(|| GenError::malformed(text, "`>` without matching `<`"))?;
    let close = matching_close(text, open)?;

    if close != text.len() - 1 {
        return Err(GenError::malformed(
            text,
            format!("unexpected text after `>`: `{}`", &text[close + 1..]),
        ));
    }

    let head = text[..open].trim_end();
    if PRIMITIVES.contains(&head) {
        return Err(GenError::malformed(
            text,
            format!("`{head}` cannot take type arguments"),
        ));
    }

    let arguments = split_arguments(&text[open + 1..close])?
        .into_iter()
        .map(parse_type)
        .collect::<GenResult<Vec<_>>>()?;

    Ok(parse_name(head)?.with_arguments(arguments))
}

/// Index of the `>` closing the `<` at `open`.
fn matching_close(text: &str, open: usize) -> GenResult<usize> {
    let mut depth = 0usize;

    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + idx);
                }
            }
            _ => {}
        }
    }

    Err(GenError::malformed(&text[open..], "unclosed `<`"))
}

/// Split an argument list on the commas that sit at bracket depth zero.
fn split_arguments(list: &str) -> GenResult<Vec<&str>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in list.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| GenError::malformed(list, "`>` without matching `<`"))?;
            }
            ',' if depth == 0 => {
                arguments.push(&list[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(GenError::malformed(list, "unclosed `<`"));
    }
    arguments.push(&list[start..]);

    if arguments.iter().any(|arg| arg.trim().is_empty()) {
        return Err(GenError::malformed(list, "empty type argument"));
    }

    Ok(arguments)
}

fn parse_name(text: &str) -> GenResult<TypeDescriptor> {
    if text.is_empty() {
        return Err(GenError::malformed(text, "missing type name"));
    }

    for segment in text.split('.') {
        if !is_identifier(segment) {
            return Err(GenError::malformed(
                text,
                format!("invalid name segment `{segment}`"),
            ));
        }
    }

    Ok(TypeDescriptor::declared(text))
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
