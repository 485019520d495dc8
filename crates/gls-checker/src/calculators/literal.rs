use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, LiteralValue, NodeKind};
use gls_solver::{PrimitiveKind, SemanticType, names};

/// Constants: `42`, `'a'`, `"text"`, `1.5G`, `null`.
pub struct LiteralCalculator;

impl LiteralCalculator {
    pub fn type_of(value: LiteralValue<'_>) -> SemanticType {
        match value {
            LiteralValue::Null => SemanticType::Null,
            LiteralValue::Boolean(_) => SemanticType::boolean(),
            LiteralValue::Byte(_) => SemanticType::primitive(PrimitiveKind::Byte),
            LiteralValue::Char(_) => SemanticType::primitive(PrimitiveKind::Char),
            LiteralValue::Short(_) => SemanticType::primitive(PrimitiveKind::Short),
            LiteralValue::Int(_) => SemanticType::int(),
            LiteralValue::Long(_) => SemanticType::primitive(PrimitiveKind::Long),
            LiteralValue::Float(_) => SemanticType::primitive(PrimitiveKind::Float),
            LiteralValue::Double(_) => SemanticType::primitive(PrimitiveKind::Double),
            LiteralValue::BigInteger(_) => SemanticType::known(names::BIG_INTEGER),
            LiteralValue::BigDecimal(_) => SemanticType::known(names::BIG_DECIMAL),
            LiteralValue::String(_) => SemanticType::string(),
        }
    }
}

impl TypeCalculator for LiteralCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Literal
    }

    fn name(&self) -> &'static str {
        "LiteralCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, _ctx: &dyn TypeContext) -> Option<SemanticType> {
        let literal = node.as_literal()?;
        Some(Self::type_of(literal.value()))
    }
}

#[cfg(test)]
#[path = "../../tests/literal_tests.rs"]
mod tests;
