//! Least upper bound of a set of types.
//!
//! Used wherever several expressions unify into one value: list elements,
//! map keys and values, elvis/ternary branches and arithmetic operands.
//!
//! Rules, in precedence order:
//!
//! 1. Flatten unions, drop `null`, deduplicate. Nothing left gives `null`;
//!    one type left is returned as-is.
//! 2. Exactly `{String, GString}` gives `String`. This must run before the
//!    reference search, which would answer `CharSequence`.
//! 3. All numeric: promote through the rank lattice (see [`numeric`]).
//! 4. Fallback:
//!    - all primitive: all boolean gives `boolean`, some boolean gives the
//!      top type, otherwise numeric promotion;
//!    - all references: most specific common ancestor in the built-in
//!      hierarchy;
//!    - mixed: `Dynamic`/`Unknown` count as the top type and any primitive
//!      forces the top type.

use crate::hierarchy::class_hierarchy;
use crate::names;
use crate::numeric;
use crate::types::{PrimitiveKind, SemanticType};
use crate::TypeError;
use smallvec::SmallVec;
use tracing::trace;

/// Least upper bound of `types`.
///
/// A single type is returned unchanged. An empty slice is a programmer error.
pub fn lub(types: &[SemanticType]) -> Result<SemanticType, TypeError> {
    match types {
        [] => Err(TypeError::InvalidArgument(
            "cannot compute LUB of empty sequence",
        )),
        [single] => Ok(single.clone()),
        _ => Ok(compute_lub(types)),
    }
}

/// Least upper bound of two types.
pub fn lub2(a: &SemanticType, b: &SemanticType) -> SemanticType {
    compute_lub(&[a.clone(), b.clone()])
}

fn compute_lub(types: &[SemanticType]) -> SemanticType {
    let operands = collect_operands(types);

    let (rule, result) = match operands.as_slice() {
        [] => ("all-null", SemanticType::Null),
        [single] => ("monomorphic", single.clone()),
        _ => {
            if let Some(ty) = unify_string_like(&operands) {
                ("string-like", ty)
            } else if let Some(ty) = numeric::promote(&operands) {
                ("numeric", ty)
            } else {
                fallback(&operands)
            }
        }
    };

    trace!(operands = types.len(), rule, result = %result, "lub");
    result
}

/// Union members flattened, `null` removed, duplicates dropped.
fn collect_operands(types: &[SemanticType]) -> Vec<SemanticType> {
    let mut operands: Vec<SemanticType> = Vec::with_capacity(types.len());
    let mut push = |ty: &SemanticType| {
        if !ty.is_null() && !operands.contains(ty) {
            operands.push(ty.clone());
        }
    };
    for ty in types {
        match ty {
            SemanticType::Union { types: members } => members.iter().for_each(&mut push),
            other => push(other),
        }
    }
    operands
}

fn unify_string_like(operands: &[SemanticType]) -> Option<SemanticType> {
    let [a, b] = operands else {
        return None;
    };
    let is_pair = (a.is_known(names::STRING) && b.is_known(names::GSTRING))
        || (a.is_known(names::GSTRING) && b.is_known(names::STRING));
    is_pair.then(SemanticType::string)
}

fn fallback(operands: &[SemanticType]) -> (&'static str, SemanticType) {
    let primitives: SmallVec<[PrimitiveKind; 4]> =
        operands.iter().filter_map(SemanticType::as_primitive).collect();

    if primitives.len() == operands.len() {
        return ("primitive", unify_primitives(&primitives));
    }

    if !primitives.is_empty() {
        // Primitives never unify with references beyond the top type.
        return ("mixed", SemanticType::object());
    }

    let all_known = operands
        .iter()
        .all(|ty| matches!(ty, SemanticType::Known { .. }));
    if all_known {
        let knowns: SmallVec<[&SemanticType; 4]> = operands.iter().collect();
        return ("reference", unify_references(&knowns));
    }

    // Dynamic, Unknown and arrays stand in for the top type.
    let object = SemanticType::object();
    let knowns: SmallVec<[&SemanticType; 4]> = operands
        .iter()
        .map(|ty| match ty {
            SemanticType::Known { .. } => ty,
            _ => &object,
        })
        .collect();
    ("mixed", unify_references(&knowns))
}

fn unify_primitives(kinds: &[PrimitiveKind]) -> SemanticType {
    let booleans = kinds
        .iter()
        .filter(|kind| **kind == PrimitiveKind::Boolean)
        .count();
    if booleans == kinds.len() {
        return SemanticType::boolean();
    }
    if booleans > 0 {
        return SemanticType::object();
    }
    let operands: Vec<SemanticType> = kinds
        .iter()
        .map(|kind| SemanticType::primitive(*kind))
        .collect();
    numeric::promote(&operands).unwrap_or_else(SemanticType::object)
}

fn unify_references(knowns: &[&SemanticType]) -> SemanticType {
    let fqns: SmallVec<[&str; 4]> = knowns.iter().filter_map(|ty| ty.fqn()).collect();
    let ancestor = class_hierarchy().most_specific_common_ancestor(&fqns);

    // Same generic class everywhere: unify the arguments position by position.
    let arity = knowns.first().map_or(0, |ty| ty.type_args().len());
    let same_class = knowns
        .iter()
        .all(|ty| ty.fqn() == Some(ancestor.as_str()) && ty.type_args().len() == arity);
    if arity > 0 && same_class {
        let type_args = (0..arity)
            .map(|i| {
                let column: Vec<SemanticType> =
                    knowns.iter().map(|ty| ty.type_args()[i].clone()).collect();
                compute_lub(&column)
            })
            .collect();
        return SemanticType::known_with_args(ancestor, type_args);
    }

    SemanticType::known(ancestor)
}

#[cfg(test)]
#[path = "../tests/lub_tests.rs"]
mod tests;
