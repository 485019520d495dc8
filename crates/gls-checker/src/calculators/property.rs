use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::SemanticType;
use gls_solver::element_access::{iterable_element_type, map_value_type};

/// `receiver.name`, `receiver*.name` and bare `name`.
pub struct PropertyAccessCalculator;

impl PropertyAccessCalculator {
    /// Type of `name` read from a single receiver value.
    fn member_type(
        receiver: &SemanticType,
        name: &str,
        ctx: &dyn TypeContext,
    ) -> Option<SemanticType> {
        if let Some(ty) = ctx.get_field_type(receiver, name) {
            return Some(ty);
        }
        // `map.key` reads an entry.
        if let Some(value) = map_value_type(receiver) {
            return Some(value);
        }
        receiver.is_dynamic().then(|| SemanticType::dynamic(Some(name)))
    }
}

impl TypeCalculator for PropertyAccessCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::PropertyAccess
    }

    fn name(&self) -> &'static str {
        "PropertyAccessCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let property = node.as_property()?;
        let name = property.property_name();
        // Implicit `this`/owner resolution is left to the context.
        let receiver = match property.receiver() {
            Some(receiver) => ctx.calculate_type(receiver),
            None => SemanticType::unknown("Implicit receiver"),
        };

        if property.is_spread() {
            let element = iterable_element_type(&receiver)?;
            let member = Self::member_type(&element, name, ctx)?;
            return Some(SemanticType::list_of(member.boxed()));
        }
        Self::member_type(&receiver, name, ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/property_tests.rs"]
mod tests;
