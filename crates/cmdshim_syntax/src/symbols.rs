//! Resolved symbol definitions.
//!
//! Symbols carry the semantic facts the generator filters on and re-emits: accessibility, return and parameter
//! types, declared annotations, and the containing namespace. They are produced by a
//! [`crate::model::SemanticModel`] on demand and are never cached across units.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use cmdshim_core::lang::well_known::GLOBAL_ALIAS;

// ============================================================================
// Types
// ============================================================================

/// Coarse classification of a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Array,
    TypeParameter,
}

/// A reference to a resolved type.
///
/// For [`TypeKind::Array`] the reference names the *element* type; the `[]` suffix is added at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Metadata name, e.g. `System.Threading.Tasks.Task`.
    pub name: String,
    /// Fully qualified display spelling when it differs from `global::<name>` (e.g. `int`, `string`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: None,
            kind: TypeKind::Class,
        }
    }

    /// A keyword type such as `int` whose display spelling is not namespace-qualified.
    pub fn keyword(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: Some(display.into()),
            kind: TypeKind::Struct,
        }
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// An array whose elements are `element`.
    pub fn array_of(element: TypeRef) -> Self {
        Self {
            kind: TypeKind::Array,
            ..element
        }
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }

    /// The fully qualified display spelling (`global::Namespace.Type` unless overridden).
    pub fn fully_qualified(&self) -> Cow<'_, str> {
        match &self.display {
            Some(display) => Cow::Borrowed(display.as_str()),
            None => Cow::Owned(format!("{GLOBAL_ALIAS}{}", self.name)),
        }
    }
}

/// The namespace a declaration lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceRef {
    /// Dotted namespace name; empty for the global namespace.
    pub name: String,
}

impl NamespaceRef {
    pub fn global() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }
}

/// Declared accessibility of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        self == Accessibility::Public
    }
}

// ============================================================================
// Annotation arguments
// ============================================================================

/// A compile-time constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    /// `typeof(T)`.
    Type(TypeRef),
}

impl fmt::Display for Literal {
    /// Render the literal the way it is spelled in source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write_float(f, *x),
            Literal::Char(c) => {
                let escaped = match c {
                    '\'' => "\\'".to_string(),
                    _ => escape_char(*c),
                };
                write!(f, "'{}'", escaped)
            }
            Literal::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        _ => f.write_str(&escape_char(c))?,
                    }
                }
                f.write_str("\"")
            }
            Literal::Type(ty) => write!(f, "typeof({})", ty.fully_qualified()),
        }
    }
}

/// `Debug` keeps the fractional part (`2.0`) and uses exponents (`1e20`), both valid double literals.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("double.NaN")
    } else if x == f64::INFINITY {
        f.write_str("double.PositiveInfinity")
    } else if x == f64::NEG_INFINITY {
        f.write_str("double.NegativeInfinity")
    } else {
        write!(f, "{:?}", x)
    }
}

fn escape_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        _ => c.to_string(),
    }
}

/// The value of one annotation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    Scalar(Literal),
    /// An enum member, e.g. `Remora.Commands.CommandType.Slash`.
    Enum { ty: TypeRef, member: String },
    Array(Vec<ArgValue>),
}

/// A `name = value` annotation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArg {
    pub name: String,
    pub value: ArgValue,
}

/// A declarative annotation as resolved by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub ty: TypeRef,
    #[serde(default)]
    pub positional: Vec<ArgValue>,
    #[serde(default)]
    pub named: Vec<NamedArg>,
}

impl Annotation {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    pub fn with_arg(mut self, value: ArgValue) -> Self {
        self.positional.push(value);
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.named.push(NamedArg {
            name: name.into(),
            value,
        });
        self
    }

    pub fn has_arguments(&self) -> bool {
        !self.positional.is_empty() || !self.named.is_empty()
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// A resolved function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    /// Declared with `params`.
    #[serde(default)]
    pub is_params: bool,
    /// Explicit default value; present exactly when the parameter is optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_params: false,
            default: None,
            annotations: Vec::new(),
        }
    }

    pub fn variadic(mut self) -> Self {
        self.is_params = true;
        self
    }

    pub fn with_default(mut self, value: Literal) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// A resolved class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSymbol {
    pub name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub namespace: NamespaceRef,
}

/// A resolved function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A symbol declared by a tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Class(ClassSymbol),
    Function(FunctionSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Class(c) => &c.name,
            Symbol::Function(f) => &f.name,
        }
    }
}
