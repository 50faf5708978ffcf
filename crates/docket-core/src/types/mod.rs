//! Type expressions and their linked rendering
//!
//! This module provides:
//! - Resolved type representation (`TypeNode`) and its formatter (`format`)
//! - Declared type-expression syntax (`TypeExpr`) and its formatter (`format_expr`)
//! - Formatter errors (`FormatError`)

mod error;
mod expr;
mod format;
mod writer;

pub use error::FormatError;
pub use expr::{format_expr, FunctionExpr, RecordEntry, TypeContext, TypeExpr};
pub use format::{format, format_opt};

use std::fmt;

use crate::link::LinkResolver;

/// A resolved type as produced by type analysis
///
/// The formatter only borrows these trees. Children are owned, so a tree is
/// always finite and every walk over it terminates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeNode {
    /// `boolean`
    Boolean,

    /// `number`
    Number,

    /// `string`
    String,

    /// `null`
    Null,

    /// `undefined`
    Void,

    /// The universal type, `*`
    All,

    /// The unknown type, `?`
    Unknown,

    /// Reference to a type by name whose declaration was not resolved
    Named(String),

    /// Instance of a declared class or interface
    Instance(String),

    /// Element of an enum, rendered as the enum's underlying type
    EnumElement(Box<TypeNode>),

    /// The anonymous `Function` supertype
    AnyFunction,

    /// Function signature
    Function(FunctionType),

    /// Structural record type, fields in declared order
    Record(Vec<RecordField>),

    /// Union of alternates in declared order
    Union(Vec<TypeNode>),

    /// Generic type applied to type arguments
    Templatized {
        /// The generic type
        base: Box<TypeNode>,
        /// Type arguments in declared order
        args: Vec<TypeNode>,
    },

    /// Template type variable such as `T`
    TemplateVar(String),

    /// Internal bottom type; never part of a well-formed type expression
    NoType,

    /// Internal bottom object type; never part of a well-formed type expression
    NoObject,
}

/// Function signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Constructor or receiver context
    pub context: Option<FunctionContext>,
    /// Parameters in declared order
    pub params: Vec<Param>,
    /// Declared return type, `None` when unspecified
    pub returns: Option<Box<TypeNode>>,
}

/// The `new:` / `this:` part of a function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionContext {
    /// Constructor producing instances of the type
    Constructor(Box<TypeNode>),
    /// Function invoked with `this` bound to the type
    This(Box<TypeNode>),
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    pub ty: TypeNode,
    pub optional: bool,
    pub variadic: bool,
}

impl Param {
    /// A required parameter
    #[must_use]
    pub fn new(ty: TypeNode) -> Self {
        Self {
            ty,
            optional: false,
            variadic: false,
        }
    }

    /// An optional parameter (`T=`)
    #[must_use]
    pub fn optional(ty: TypeNode) -> Self {
        Self {
            optional: true,
            ..Self::new(ty)
        }
    }

    /// A rest parameter (`...T`)
    #[must_use]
    pub fn variadic(ty: TypeNode) -> Self {
        Self {
            variadic: true,
            ..Self::new(ty)
        }
    }
}

/// A record field; `ty` is `None` when the field's type is not known
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordField {
    pub name: String,
    pub ty: Option<TypeNode>,
}

impl RecordField {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }

    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }
}

impl TypeNode {
    /// Create a union type
    #[must_use]
    pub fn union(alternates: impl IntoIterator<Item = TypeNode>) -> Self {
        Self::Union(alternates.into_iter().collect())
    }

    /// Create an instance type
    #[must_use]
    pub fn instance(name: impl Into<String>) -> Self {
        Self::Instance(name.into())
    }

    /// Create a named type reference
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a templatized type
    #[must_use]
    pub fn templatized(base: TypeNode, args: Vec<TypeNode>) -> Self {
        Self::Templatized {
            base: Box::new(base),
            args,
        }
    }

    /// Create a function type
    #[must_use]
    pub fn function(params: Vec<Param>, returns: Option<TypeNode>) -> Self {
        Self::Function(FunctionType {
            context: None,
            params,
            returns: returns.map(Box::new),
        })
    }

    /// Create a constructor type producing instances of `instance`
    #[must_use]
    pub fn constructor(instance: TypeNode, params: Vec<Param>) -> Self {
        Self::Function(FunctionType {
            context: Some(FunctionContext::Constructor(Box::new(instance))),
            params,
            returns: None,
        })
    }

    /// Create a record type
    #[must_use]
    pub fn record(fields: Vec<RecordField>) -> Self {
        Self::Record(fields)
    }

    /// Returns true if `null` is a member of this type
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeNode::Null | TypeNode::All | TypeNode::Unknown => true,
            TypeNode::Union(alternates) => alternates.iter().any(TypeNode::is_nullable),
            TypeNode::EnumElement(inner) => inner.is_nullable(),
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TypeNode::Null)
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, TypeNode::Void)
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, TypeNode::Unknown)
    }

    /// Short name of the variant, used in diagnostics
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            TypeNode::Boolean => "boolean",
            TypeNode::Number => "number",
            TypeNode::String => "string",
            TypeNode::Null => "null",
            TypeNode::Void => "undefined",
            TypeNode::All => "all",
            TypeNode::Unknown => "unknown",
            TypeNode::Named(_) => "named",
            TypeNode::Instance(_) => "instance",
            TypeNode::EnumElement(_) => "enum element",
            TypeNode::AnyFunction | TypeNode::Function(_) => "function",
            TypeNode::Record(_) => "record",
            TypeNode::Union(_) => "union",
            TypeNode::Templatized { .. } => "templatized",
            TypeNode::TemplateVar(_) => "template variable",
            TypeNode::NoType => "no type",
            TypeNode::NoObject => "no object",
        }
    }
}

/// Resolver used for unlinked text rendering
struct Unlinked;

impl LinkResolver for Unlinked {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}

impl fmt::Display for TypeNode {
    /// Writes the unlinked text form; internal placeholder types are an error
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = format::format_unlinked(self).map_err(|_| fmt::Error)?;
        write!(f, "{comment}")
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_expr(self, &Unlinked))
    }
}
