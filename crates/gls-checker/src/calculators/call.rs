use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::SemanticType;
use gls_solver::element_access::iterable_element_type;
use smallvec::SmallVec;

/// `receiver.method(args)`, `receiver*.method(args)` and `method(args)`.
pub struct MethodCallCalculator;

impl MethodCallCalculator {
    fn unresolved(name: &str, ctx: &dyn TypeContext) -> SemanticType {
        if ctx.is_static_compilation() {
            SemanticType::unknown("unresolved method")
        } else {
            SemanticType::dynamic(Some(name))
        }
    }
}

impl TypeCalculator for MethodCallCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::MethodCall
    }

    fn name(&self) -> &'static str {
        "MethodCallCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let call = node.as_method_call()?;
        let name = call.method_name();
        let receiver = match call.receiver() {
            Some(receiver) => ctx.calculate_type(receiver),
            None => SemanticType::unknown("Implicit receiver"),
        };
        let arg_types: SmallVec<[SemanticType; 4]> = call
            .arguments()
            .into_iter()
            .map(|arg| ctx.calculate_type(arg))
            .collect();

        if call.is_spread() {
            let element = iterable_element_type(&receiver)?;
            let result = ctx
                .get_method_return_type(&element, name, &arg_types)
                .unwrap_or_else(|| Self::unresolved(name, ctx));
            return Some(SemanticType::list_of(result.boxed()));
        }

        Some(
            ctx.get_method_return_type(&receiver, name, &arg_types)
                .unwrap_or_else(|| Self::unresolved(name, ctx)),
        )
    }
}

/// `new TypeName(args)`
pub struct ConstructorCallCalculator;

impl TypeCalculator for ConstructorCallCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::ConstructorCall
    }

    fn name(&self) -> &'static str {
        "ConstructorCallCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let call = node.as_constructor_call()?;
        Some(ctx.resolve_type(call.type_name()))
    }
}

#[cfg(test)]
#[path = "../../tests/call_tests.rs"]
mod tests;
