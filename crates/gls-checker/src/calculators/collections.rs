//! Collection-building literals: `[a, b]`, `[k: v]` and `a..b`.

use crate::calculator::TypeCalculator;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::numeric::{NumericOperand, NumericRank};
use gls_solver::{SemanticType, lub, lub2, names};
use smallvec::SmallVec;

type ElementTypes = SmallVec<[SemanticType; 8]>;

/// Type argument for a unified element type. Generic arguments are always
/// references, and a collection of only `null` holds `Object`.
fn type_argument(element: SemanticType) -> SemanticType {
    if element.is_null() {
        SemanticType::object()
    } else {
        element.boxed()
    }
}

fn unify(types: &[SemanticType]) -> SemanticType {
    match lub(types) {
        Ok(ty) => type_argument(ty),
        // Empty literal.
        Err(_) => SemanticType::object(),
    }
}

/// `[a, b, c]`: `List<lub(elements)>`, `List<Object>` when empty.
pub struct ListLiteralCalculator;

impl TypeCalculator for ListLiteralCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::List
    }

    fn name(&self) -> &'static str {
        "ListLiteralCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let list = node.as_list()?;
        let element_types: ElementTypes = list
            .elements()
            .into_iter()
            .map(|element| ctx.calculate_type(element))
            .collect();
        Some(SemanticType::list_of(unify(&element_types)))
    }
}

/// `[k1: v1, k2: v2]`: `Map<lub(keys), lub(values)>`, `Map<Object, Object>`
/// when empty.
pub struct MapLiteralCalculator;

impl TypeCalculator for MapLiteralCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Map
    }

    fn name(&self) -> &'static str {
        "MapLiteralCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let map = node.as_map()?;
        let entries = map.entries();
        let mut key_types = ElementTypes::with_capacity(entries.len());
        let mut value_types = ElementTypes::with_capacity(entries.len());
        for entry in entries {
            key_types.push(ctx.calculate_type(entry.key));
            value_types.push(ctx.calculate_type(entry.value));
        }
        Some(SemanticType::map_of(unify(&key_types), unify(&value_types)))
    }
}

/// `start..end`: `IntRange` for integral bounds up to `int`, otherwise
/// `Range<lub(start, end)>`. Character bounds form a `Range<Character>`.
pub struct RangeCalculator;

impl RangeCalculator {
    fn is_int_like(ty: &SemanticType) -> bool {
        NumericOperand::of(ty).is_some_and(|operand| {
            matches!(
                operand.rank,
                NumericRank::Byte | NumericRank::Short | NumericRank::Int
            )
        })
    }
}

impl TypeCalculator for RangeCalculator {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Range
    }

    fn name(&self) -> &'static str {
        "RangeCalculator"
    }

    fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> Option<SemanticType> {
        let range = node.as_range()?;
        let start = ctx.calculate_type(range.start());
        let end = ctx.calculate_type(range.end());
        if Self::is_int_like(&start) && Self::is_int_like(&end) {
            return Some(SemanticType::known(names::INT_RANGE));
        }
        let bound = type_argument(lub2(&start, &end));
        Some(SemanticType::known_with_args(names::RANGE, vec![bound]))
    }
}

#[cfg(test)]
#[path = "../../tests/collections_tests.rs"]
mod tests;
