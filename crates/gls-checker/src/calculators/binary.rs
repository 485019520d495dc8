use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::element_access::subscript_type;
use gls_solver::{SemanticType, lub2, names, numeric};
use tracing::trace;

/// How a binary operator derives its result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperatorClass {
    /// Comparison, logical, membership and regex-match tests.
    Boolean,
    /// `<=>`
    Compare,
    /// `=~`
    FindRegex,
    /// `+`, concatenates when either side is a string.
    Plus,
    /// `- * / % **` and bitwise `& | ^`.
    Arithmetic,
    /// `<< >> >>>`
    Shift,
    /// `=`
    Assign,
    /// `[` and `?[`
    Subscript,
}

impl BinaryOperatorClass {
    /// Classify `operator`. Compound assignments take the class of their
    /// arithmetic operator; unrecognised operators yield `None`.
    pub fn classify(operator: &str) -> Option<Self> {
        Self::classify_plain(operator).or_else(|| {
            let base = operator.strip_suffix('=')?;
            match Self::classify_plain(base)? {
                class @ (Self::Plus | Self::Arithmetic | Self::Shift) => Some(class),
                _ => None,
            }
        })
    }

    fn classify_plain(operator: &str) -> Option<Self> {
        let class = match operator {
            "==" | "!=" | "===" | "!==" | "<" | ">" | "<=" | ">=" | "&&" | "||" | "in"
            | "!in" | "instanceof" | "!instanceof" | "==~" => Self::Boolean,
            "<=>" => Self::Compare,
            "=~" => Self::FindRegex,
            "+" => Self::Plus,
            "-" | "*" | "/" | "%" | "**" | "&" | "|" | "^" => Self::Arithmetic,
            "<<" | ">>" | ">>>" => Self::Shift,
            "=" => Self::Assign,
            "[" | "?[" => Self::Subscript,
            _ => return None,
        };
        Some(class)
    }
}

/// `left <op> right`, including assignments and subscripts.
pub struct BinaryCalculator;

impl TypeCalculator for BinaryCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Binary
    }

    fn name(&self) -> &'static str {
        "BinaryCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let binary = node.as_binary()?;
        let operator = binary.operator();
        let Some(class) = BinaryOperatorClass::classify(operator) else {
            trace!(operator, "BinaryCalculator - unrecognised operator");
            return None;
        };

        let ty = match class {
            BinaryOperatorClass::Boolean => SemanticType::boolean(),
            BinaryOperatorClass::Compare => SemanticType::int(),
            BinaryOperatorClass::FindRegex => SemanticType::known(names::MATCHER),
            BinaryOperatorClass::Assign => ctx.calculate_type(binary.right()),
            BinaryOperatorClass::Plus => {
                let left = ctx.calculate_type(binary.left());
                let right = ctx.calculate_type(binary.right());
                if left.is_string_like() || right.is_string_like() {
                    SemanticType::string()
                } else {
                    lub2(&left, &right)
                }
            }
            BinaryOperatorClass::Arithmetic => {
                let left = ctx.calculate_type(binary.left());
                let right = ctx.calculate_type(binary.right());
                lub2(&left, &right)
            }
            BinaryOperatorClass::Shift => {
                // `list << item` keeps the receiver type.
                let left = ctx.calculate_type(binary.left());
                numeric::promote_unary(&left).unwrap_or(left)
            }
            BinaryOperatorClass::Subscript => {
                let receiver = ctx.calculate_type(binary.left());
                match subscript_type(&receiver) {
                    Some(element) => element,
                    None if receiver.is_dynamic() => SemanticType::dynamic(None),
                    None => return None,
                }
            }
        };
        Some(ty)
    }
}

#[cfg(test)]
#[path = "../../tests/binary_tests.rs"]
mod tests;
