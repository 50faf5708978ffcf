//! Declared type expressions
//!
//! A [`TypeExpr`] is a type annotation as the author wrote it, before any
//! typedefs are expanded. Rendering it keeps the author's names and
//! modifiers (`!`, `?`, `=`, `...`) and links each name individually.

use super::writer::LinkedText;
use crate::comment::Comment;
use crate::link::LinkResolver;

/// A type annotation in its written form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A type name with optional template arguments, `Array<string>`
    Name {
        name: String,
        template_args: Vec<TypeExpr>,
    },

    /// Record type `{a: T, b}`
    Record(Vec<RecordEntry>),

    /// Non-nullable modifier `!T`
    NonNull(Box<TypeExpr>),

    /// Nullable modifier `?T`, or the bare unknown type `?`
    Nullable(Option<Box<TypeExpr>>),

    /// Optional parameter modifier `T=`
    Optional(Box<TypeExpr>),

    /// Rest parameter `...T`, or a bare `...`
    Rest(Option<Box<TypeExpr>>),

    /// The universal type `*`
    All,

    /// Empty array literal type `[]`
    EmptyArray,

    /// Union `(A|B)`
    Union(Vec<TypeExpr>),

    /// Unspecified type, such as a missing return type
    Empty,

    /// `void`
    Void,

    /// Function type
    Function(FunctionExpr),
}

/// A written function type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FunctionExpr {
    pub context: Option<TypeContext>,
    pub params: Vec<TypeExpr>,
    pub returns: Option<Box<TypeExpr>>,
}

/// The `new:` / `this:` context of a written function type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeContext {
    New(Box<TypeExpr>),
    This(Box<TypeExpr>),
}

/// A record entry; `ty` is `None` for `{name}` shorthand
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordEntry {
    pub name: String,
    pub ty: Option<TypeExpr>,
}

impl TypeExpr {
    /// A plain type name
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            template_args: Vec::new(),
        }
    }

    /// A type name applied to template arguments
    #[must_use]
    pub fn generic(name: impl Into<String>, template_args: Vec<TypeExpr>) -> Self {
        Self::Name {
            name: name.into(),
            template_args,
        }
    }

    #[must_use]
    pub fn non_null(inner: TypeExpr) -> Self {
        Self::NonNull(Box::new(inner))
    }

    #[must_use]
    pub fn nullable(inner: TypeExpr) -> Self {
        Self::Nullable(Some(Box::new(inner)))
    }

    #[must_use]
    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn rest(inner: TypeExpr) -> Self {
        Self::Rest(Some(Box::new(inner)))
    }
}

/// Render a written type expression, linking names through `resolver`
pub fn format_expr<R>(expr: &TypeExpr, resolver: &R) -> Comment
where
    R: LinkResolver + ?Sized,
{
    let mut writer = ExprWriter {
        resolver,
        out: LinkedText::new(),
    };
    writer.write(expr);
    writer.out.finish()
}

struct ExprWriter<'r, R: ?Sized> {
    resolver: &'r R,
    out: LinkedText,
}

impl<R> ExprWriter<'_, R>
where
    R: LinkResolver + ?Sized,
{
    fn write(&mut self, expr: &TypeExpr) {
        match expr {
            TypeExpr::Name {
                name,
                template_args,
            } => {
                self.write_name(name);
                if !template_args.is_empty() {
                    self.out.text("<");
                    self.write_list(template_args, ", ");
                    self.out.text(">");
                }
            }
            TypeExpr::Record(entries) => self.write_record(entries),
            TypeExpr::NonNull(inner) => {
                self.out.text("!");
                self.write(inner);
            }
            TypeExpr::Nullable(inner) => {
                self.out.text("?");
                if let Some(inner) = inner {
                    self.write(inner);
                }
            }
            TypeExpr::Optional(inner) => {
                self.write(inner);
                self.out.text("=");
            }
            TypeExpr::Rest(inner) => {
                self.out.text("...");
                if let Some(inner) = inner {
                    self.write(inner);
                }
            }
            TypeExpr::All => self.out.text("*"),
            TypeExpr::EmptyArray => self.out.text("[]"),
            TypeExpr::Union(alternates) => {
                self.out.text("(");
                self.write_list(alternates, "|");
                self.out.text(")");
            }
            TypeExpr::Empty => {}
            TypeExpr::Void => self.out.text("void"),
            TypeExpr::Function(function) => self.write_function(function),
        }
    }

    fn write_name(&mut self, name: &str) {
        match self.resolver.resolve(name) {
            Some(href) => self.out.link(name, href),
            None => self.out.text(name),
        }
    }

    fn write_list(&mut self, exprs: &[TypeExpr], separator: &str) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.out.text(separator);
            }
            self.write(expr);
        }
    }

    fn write_function(&mut self, function: &FunctionExpr) {
        self.out.text("function(");
        let mut first = true;
        if let Some(context) = &function.context {
            let (prefix, ty) = match context {
                TypeContext::New(ty) => ("new: ", ty),
                TypeContext::This(ty) => ("this: ", ty),
            };
            self.out.text(prefix);
            self.write(ty);
            first = false;
        }
        for param in &function.params {
            if !first {
                self.out.text(", ");
            }
            self.write(param);
            first = false;
        }
        self.out.text(")");

        match function.returns.as_deref() {
            None | Some(TypeExpr::Empty) => {}
            Some(returns) => {
                self.out.text(": ");
                self.write(returns);
            }
        }
    }

    fn write_record(&mut self, entries: &[RecordEntry]) {
        self.out.text("{");
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.out.text(", ");
            }
            self.out.text(unquote(&entry.name));
            self.out.text(": ");
            match &entry.ty {
                Some(ty) => self.write(ty),
                None => self.out.text("?"),
            }
        }
        self.out.text("}");
    }
}

/// Strip one pair of surrounding quotes from a record key
fn unquote(name: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{SymbolIndex, SymbolKind};

    fn index() -> SymbolIndex {
        let mut index = SymbolIndex::default();
        index.register("app.Model", SymbolKind::Class);
        index.register("app.Id", SymbolKind::Namespace);
        index
    }

    fn render(expr: &TypeExpr) -> String {
        format_expr(expr, &index()).text()
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(render(&TypeExpr::non_null(TypeExpr::name("app.Model"))), "!app.Model");
        assert_eq!(render(&TypeExpr::nullable(TypeExpr::name("string"))), "?string");
        assert_eq!(render(&TypeExpr::Nullable(None)), "?");
        assert_eq!(render(&TypeExpr::optional(TypeExpr::name("number"))), "number=");
        assert_eq!(render(&TypeExpr::rest(TypeExpr::name("number"))), "...number");
        assert_eq!(render(&TypeExpr::Rest(None)), "...");
        assert_eq!(render(&TypeExpr::All), "*");
        assert_eq!(render(&TypeExpr::EmptyArray), "[]");
        assert_eq!(render(&TypeExpr::Void), "void");
        assert_eq!(render(&TypeExpr::Empty), "");
    }

    #[test]
    fn test_union_keeps_every_alternate() {
        let expr = TypeExpr::Union(vec![
            TypeExpr::name("string"),
            TypeExpr::name("null"),
            TypeExpr::Void,
        ]);
        assert_eq!(render(&expr), "(string|null|void)");
    }

    #[test]
    fn test_names_are_linked_individually() {
        let expr = TypeExpr::generic(
            "Array",
            vec![TypeExpr::name("app.Model"), TypeExpr::name("Other")],
        );
        let comment = format_expr(&expr, &index());
        assert_eq!(comment.text(), "Array<app.Model, Other>");
        let links: Vec<&str> = comment.iter().filter_map(|t| t.href()).collect();
        assert_eq!(links, vec!["class_app_Model.html"]);
    }

    #[test]
    fn test_function_expression() {
        let expr = TypeExpr::Function(FunctionExpr {
            context: Some(TypeContext::New(Box::new(TypeExpr::name("app.Model")))),
            params: vec![
                TypeExpr::name("string"),
                TypeExpr::optional(TypeExpr::name("number")),
            ],
            returns: Some(Box::new(TypeExpr::Empty)),
        });
        assert_eq!(render(&expr), "function(new: app.Model, string, number=)");

        let expr = TypeExpr::Function(FunctionExpr {
            context: Some(TypeContext::This(Box::new(TypeExpr::name("app.Model")))),
            params: vec![],
            returns: Some(Box::new(TypeExpr::name("boolean"))),
        });
        assert_eq!(render(&expr), "function(this: app.Model): boolean");
    }

    #[test]
    fn test_record_expression() {
        let expr = TypeExpr::Record(vec![
            RecordEntry {
                name: "'quoted'".into(),
                ty: Some(TypeExpr::name("string")),
            },
            RecordEntry {
                name: "\"double\"".into(),
                ty: None,
            },
            RecordEntry {
                name: "id".into(),
                ty: Some(TypeExpr::name("app.Id")),
            },
        ]);
        assert_eq!(render(&expr), "{quoted: string, double: ?, id: app.Id}");
    }

    #[test]
    fn test_display_is_unlinked() {
        let expr = TypeExpr::nullable(TypeExpr::name("app.Model"));
        assert_eq!(expr.to_string(), "?app.Model");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("\"a\""), "a");
        assert_eq!(unquote("'a\""), "'a\"");
        assert_eq!(unquote("a"), "a");
    }
}
