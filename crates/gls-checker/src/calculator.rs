//! The calculator contract.
//!
//! A calculator types one expression shape. Returning `None` means "not
//! applicable here" and lets the next candidate (or the registry's default)
//! answer; it is not the same as returning `SemanticType::Unknown`, which is
//! a definite answer.

use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::SemanticType;

/// Priority of the built-in calculators. Register above it to override them.
pub const DEFAULT_PRIORITY: i32 = 0;

pub trait TypeCalculator: Send + Sync {
    /// The node kind this calculator claims.
    fn node_kind(&self) -> NodeKind;

    /// Higher runs first.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Name used in trace output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Type `node`, or decline with `None`.
    ///
    /// Must not panic on unexpected shapes: a missing shape is a `None`.
    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType>;
}

/// A calculator built from a closure.
pub struct CalculatorFn<F> {
    node_kind: NodeKind,
    priority: i32,
    calculate: F,
}

/// Wrap a closure as a [`TypeCalculator`] for `node_kind` at `priority`.
pub fn calculator_fn<F>(node_kind: NodeKind, priority: i32, calculate: F) -> CalculatorFn<F>
where
    F: Fn(&dyn ExprNode, &dyn TypeContext) -> Option<SemanticType> + Send + Sync,
{
    CalculatorFn {
        node_kind,
        priority,
        calculate,
    }
}

impl<F> TypeCalculator for CalculatorFn<F>
where
    F: Fn(&dyn ExprNode, &dyn TypeContext) -> Option<SemanticType> + Send + Sync,
{
    fn node_kind(&self) -> NodeKind {
        self.node_kind
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn name(&self) -> &'static str {
        "CalculatorFn"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        (self.calculate)(node, ctx)
    }
}
