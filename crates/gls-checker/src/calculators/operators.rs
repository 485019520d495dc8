//! Branching, casting and unary operators.

use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::{SemanticType, lub2, numeric};

/// `primary ?: fallback`
pub struct ElvisCalculator;

impl TypeCalculator for ElvisCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Elvis
    }

    fn name(&self) -> &'static str {
        "ElvisCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let elvis = node.as_elvis()?;
        let primary = ctx.calculate_type(elvis.primary());
        let fallback = ctx.calculate_type(elvis.fallback());
        Some(lub2(&primary, &fallback))
    }
}

/// `condition ? when_true : when_false`
pub struct TernaryCalculator;

impl TypeCalculator for TernaryCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Ternary
    }

    fn name(&self) -> &'static str {
        "TernaryCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let ternary = node.as_ternary()?;
        let when_true = ctx.calculate_type(ternary.when_true());
        let when_false = ctx.calculate_type(ternary.when_false());
        Some(lub2(&when_true, &when_false))
    }
}

/// `operand as Target` and `(Target) operand`.
pub struct CastCalculator;

impl TypeCalculator for CastCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Cast
    }

    fn name(&self) -> &'static str {
        "CastCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let cast = node.as_cast()?;
        let target = ctx.resolve_type(cast.target_type());
        if target.is_unknown() {
            return Some(ctx.calculate_type(cast.operand()));
        }
        Some(target)
    }
}

/// Prefix and postfix unary operators.
pub struct UnaryCalculator;

impl TypeCalculator for UnaryCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Unary
    }

    fn name(&self) -> &'static str {
        "UnaryCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let unary = node.as_unary()?;
        match unary.operator() {
            "!" => Some(SemanticType::boolean()),
            "-" | "+" | "~" => {
                let operand = ctx.calculate_type(unary.operand());
                Some(numeric::promote_unary(&operand).unwrap_or(operand))
            }
            "++" | "--" => Some(ctx.calculate_type(unary.operand())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/operators_tests.rs"]
mod tests;
