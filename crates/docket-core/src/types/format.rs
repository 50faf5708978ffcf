//! Rendering of resolved types into linked comment tokens

use tracing::debug;

use super::writer::LinkedText;
use super::{FormatError, FunctionContext, FunctionType, RecordField, TypeNode, Unlinked};
use crate::comment::Comment;
use crate::link::LinkResolver;

/// Render `ty` as a token stream with named types linked through `resolver`
///
/// Native primitives link to their external reference pages. Internal
/// placeholder types, or a resolver without a link for a native primitive,
/// are fatal errors.
pub fn format<R>(ty: &TypeNode, resolver: &R) -> Result<Comment, FormatError>
where
    R: LinkResolver + ?Sized,
{
    let mut formatter = TypeFormatter::new(resolver, true);
    formatter.visit(ty)?;
    Ok(formatter.out.finish())
}

/// Render a type that may be absent; no type renders as an empty comment
pub fn format_opt<R>(ty: Option<&TypeNode>, resolver: &R) -> Result<Comment, FormatError>
where
    R: LinkResolver + ?Sized,
{
    match ty {
        Some(ty) => format(ty, resolver),
        None => Ok(Comment::new()),
    }
}

/// Render without any links, natives included
pub(super) fn format_unlinked(ty: &TypeNode) -> Result<Comment, FormatError> {
    let mut formatter = TypeFormatter::new(&Unlinked, false);
    formatter.visit(ty)?;
    Ok(formatter.out.finish())
}

struct TypeFormatter<'r, R: ?Sized> {
    resolver: &'r R,
    link_natives: bool,
    out: LinkedText,
}

impl<'r, R> TypeFormatter<'r, R>
where
    R: LinkResolver + ?Sized,
{
    fn new(resolver: &'r R, link_natives: bool) -> Self {
        Self {
            resolver,
            link_natives,
            out: LinkedText::new(),
        }
    }

    fn native(&mut self, name: &'static str) -> Result<(), FormatError> {
        if !self.link_natives {
            self.out.text(name);
            return Ok(());
        }
        let href = self
            .resolver
            .resolve_external(name)
            .ok_or(FormatError::MissingNativeLink(name))?;
        self.out.link(name, href);
        Ok(())
    }

    fn visit(&mut self, ty: &TypeNode) -> Result<(), FormatError> {
        match ty {
            TypeNode::Boolean => self.native("boolean")?,
            TypeNode::Number => self.native("number")?,
            TypeNode::String => self.native("string")?,
            TypeNode::Null => self.native("null")?,
            TypeNode::Void => self.native("undefined")?,
            TypeNode::All => self.out.text("*"),
            TypeNode::Unknown => self.out.text("?"),
            TypeNode::Named(name) => match self.resolver.resolve(name) {
                Some(href) if !href.is_empty() => self.out.link(name, href),
                _ => self.out.text(name),
            },
            TypeNode::Instance(name) => {
                let href = self
                    .resolver
                    .resolve(name)
                    .or_else(|| self.resolver.resolve_external(name));
                match href {
                    Some(href) if !href.is_empty() => self.out.link(name, href),
                    _ => self.out.text(name),
                }
            }
            TypeNode::EnumElement(inner) => self.visit(inner)?,
            TypeNode::AnyFunction => self.out.text("Function"),
            TypeNode::Function(function) => self.visit_function(function)?,
            TypeNode::Record(fields) => self.visit_record(fields)?,
            TypeNode::Union(alternates) => self.visit_union(alternates, false)?,
            TypeNode::Templatized { base, args } => {
                self.visit(base)?;
                self.out.text("<");
                self.visit_list(args, ", ")?;
                self.out.text(">");
            }
            TypeNode::TemplateVar(name) => self.out.text(name),
            TypeNode::NoType | TypeNode::NoObject => {
                return Err(FormatError::UnsupportedType(ty.kind_name()))
            }
        }
        Ok(())
    }

    fn visit_list(&mut self, types: &[TypeNode], separator: &str) -> Result<(), FormatError> {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                self.out.text(separator);
            }
            self.visit(ty)?;
        }
        Ok(())
    }

    fn visit_function(&mut self, function: &FunctionType) -> Result<(), FormatError> {
        self.out.text("function(");

        let context = match &function.context {
            Some(FunctionContext::Constructor(ty)) => Some(("new: ", ty)),
            Some(FunctionContext::This(ty)) if !ty.is_unknown() => Some(("this: ", ty)),
            _ => None,
        };
        if let Some((prefix, ty)) = context {
            self.out.text(prefix);
            self.visit(ty)?;
            if !function.params.is_empty() {
                self.out.text(", ");
            }
        }

        for (i, param) in function.params.iter().enumerate() {
            if i > 0 {
                self.out.text(", ");
            }
            if param.variadic {
                self.out.text("...");
            }
            match &param.ty {
                TypeNode::Union(alternates) => self.visit_union(alternates, param.optional)?,
                other => self.visit(other)?,
            }
            if param.optional {
                self.out.text("=");
            }
        }
        self.out.text(")");

        if let Some(returns) = &function.returns {
            self.out.text(": ");
            self.visit(returns)?;
        }
        Ok(())
    }

    fn visit_record(&mut self, fields: &[RecordField]) -> Result<(), FormatError> {
        self.out.text("{");
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.text(", ");
            }
            self.out.text(&field.name);
            self.out.text(": ");
            match &field.ty {
                Some(ty) => self.visit(ty)?,
                None => self.out.text("?"),
            }
        }
        self.out.text("}");
        Ok(())
    }

    /// Render a union, dropping `null` alternates in favor of a `?` prefix
    ///
    /// With `filter_void` set, `undefined` alternates are dropped as well; an
    /// optional parameter already says the value may be absent.
    fn visit_union(
        &mut self,
        alternates: &[TypeNode],
        filter_void: bool,
    ) -> Result<(), FormatError> {
        let nullable = alternates.iter().any(TypeNode::is_nullable);
        let kept: Vec<&TypeNode> = alternates
            .iter()
            .filter(|alt| !alt.is_null() && !(filter_void && alt.is_void()))
            .collect();

        if kept.len() < alternates.len() {
            debug!(
                alternates = alternates.len(),
                kept = kept.len(),
                filter_void,
                "simplifying union"
            );
        }

        let Some((first, rest)) = kept.split_first() else {
            // An optional parameter that can only be null or undefined.
            if filter_void && nullable {
                self.out.text("?");
                return Ok(());
            }
            // Every alternate was dropped; show the first one as written.
            return match alternates.first() {
                Some(alt) => self.visit(alt),
                None => Ok(()),
            };
        };

        if nullable {
            self.out.text("?");
        }
        if rest.is_empty() {
            return self.visit(first);
        }

        self.out.text("(");
        self.visit(first)?;
        for alt in rest {
            self.out.text("|");
            self.visit(alt)?;
        }
        self.out.text(")");
        Ok(())
    }
}
