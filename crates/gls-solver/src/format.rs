//! Textual rendering of types for hover and diagnostics.
//!
//! Rendering is never used for equality.

use crate::names;
use crate::types::{PrimitiveKind, SemanticType};
use std::fmt;

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self, NameStyle::Qualified)
    }
}

#[derive(Clone, Copy)]
enum NameStyle {
    Qualified,
    Simple,
}

/// Hover-friendly rendering with simple class names.
pub struct SimpleDisplay<'a>(&'a SemanticType);

impl fmt::Display for SimpleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self.0, NameStyle::Simple)
    }
}

impl SemanticType {
    /// Render with simple class names: `List<Integer>` rather than
    /// `java.util.List<java.lang.Integer>`.
    pub fn simple_display(&self) -> SimpleDisplay<'_> {
        SimpleDisplay(self)
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, ty: &SemanticType, style: NameStyle) -> fmt::Result {
    match ty {
        SemanticType::Known { fqn, type_args } => {
            match style {
                NameStyle::Qualified => f.write_str(fqn)?,
                NameStyle::Simple => f.write_str(names::simple_name(fqn))?,
            }
            if !type_args.is_empty() {
                f.write_str("<")?;
                write_joined(f, type_args, ", ", style)?;
                f.write_str(">")?;
            }
            Ok(())
        }
        SemanticType::Primitive { kind } => f.write_str(kind.keyword()),
        SemanticType::Dynamic { .. } => f.write_str("def"),
        SemanticType::Unknown { .. } => f.write_str("<unknown>"),
        SemanticType::Union { types } => write_joined(f, types.as_slice(), " | ", style),
        SemanticType::Null => f.write_str("null"),
        SemanticType::Array { component } => {
            write_type(f, component, style)?;
            f.write_str("[]")
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    types: &[SemanticType],
    separator: &str,
    style: NameStyle,
) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write_type(f, ty, style)?;
    }
    Ok(())
}
