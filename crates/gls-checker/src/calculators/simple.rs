//! Calculators that need at most one context lookup.

use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::{SemanticType, names};

/// `"text ${value}"`
pub struct InterpolationCalculator;

impl TypeCalculator for InterpolationCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::GString
    }

    fn name(&self) -> &'static str {
        "InterpolationCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, _ctx: &dyn TypeContext) -> Option<SemanticType> {
        let interpolation = node.as_interpolation()?;
        interpolation.literal_parts()?;
        interpolation.values()?;
        Some(SemanticType::gstring())
    }
}

/// `{ args -> body }`
pub struct ClosureCalculator;

impl TypeCalculator for ClosureCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Closure
    }

    fn name(&self) -> &'static str {
        "ClosureCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, _ctx: &dyn TypeContext) -> Option<SemanticType> {
        (node.kind() == NodeKind::Closure).then(|| SemanticType::known(names::CLOSURE))
    }
}

/// A bare name bound to a local, parameter or member.
pub struct VariableCalculator;

impl TypeCalculator for VariableCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    fn name(&self) -> &'static str {
        "VariableCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let variable = node.as_variable()?;
        let name = variable.name();
        // TODO: type `this`/`super` once the context exposes the enclosing class.
        if matches!(name, "this" | "super") {
            return None;
        }
        if let Some(symbol) = ctx.lookup_symbol(name) {
            return Some(symbol.ty);
        }
        if ctx.is_static_compilation() {
            Some(SemanticType::unknown("unresolved variable"))
        } else {
            Some(SemanticType::dynamic(Some(name)))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/simple_tests.rs"]
mod tests;
