//! Boundary between the calculators and the host's symbol layer.
//!
//! [`TypeContext`] is implemented outside the engine, typically by the
//! workspace index that knows declared types, fields and method
//! signatures. Calculators use it both to recurse into sub-expressions and
//! to resolve names.

use crate::node::ExprNode;
use gls_solver::SemanticType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    LocalVariable,
    Parameter,
    Field,
    Property,
}

/// A resolved variable, parameter or member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Declared type; `Dynamic` for untyped (`def`) declarations.
    pub ty: SemanticType,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
        }
    }
}

pub trait TypeContext {
    /// Type of a sub-expression. Implementations normally re-enter
    /// [`TypeCalculatorRegistry::calculate`](crate::TypeCalculatorRegistry::calculate).
    fn calculate_type(&self, node: &dyn ExprNode) -> SemanticType;

    /// Resolve a type name; `Unknown` when it cannot be resolved.
    fn resolve_type(&self, fqn: &str) -> SemanticType;

    fn lookup_symbol(&self, name: &str) -> Option<Symbol>;

    /// Overload-aware return type lookup; `None` when no method matches.
    fn get_method_return_type(
        &self,
        receiver: &SemanticType,
        method_name: &str,
        arg_types: &[SemanticType],
    ) -> Option<SemanticType>;

    fn get_field_type(&self, receiver: &SemanticType, field_name: &str) -> Option<SemanticType>;

    /// Whether the enclosing code is statically compiled. Calculators report
    /// `Unknown` rather than `Dynamic` for unresolved names in this mode.
    fn is_static_compilation(&self) -> bool;
}
