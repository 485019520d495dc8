//! Element types of collection-like values.
//!
//! These are AST-agnostic helpers for subscripts (`xs[0]`, `map['k']`),
//! spread access (`xs*.name`) and implicit map property access
//! (`map.key`). Only first-level type arguments are inspected.

use crate::hierarchy::class_hierarchy;
use crate::names;
use crate::types::SemanticType;

/// Element type produced by iterating `ty`.
///
/// `Iterable<T>` subclasses yield `T`, arrays yield their component and
/// maps yield their value type. Raw collections yield nothing.
pub fn iterable_element_type(ty: &SemanticType) -> Option<SemanticType> {
    match ty {
        SemanticType::Array { component } => Some((**component).clone()),
        SemanticType::Known { fqn, type_args } => {
            let hierarchy = class_hierarchy();
            match type_args.as_slice() {
                [element] if hierarchy.is_subclass_of(fqn, names::ITERABLE) => {
                    Some(element.clone())
                }
                [_, value] if hierarchy.is_subclass_of(fqn, names::MAP) => Some(value.clone()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Value type of a parameterized `Map` (or subclass).
pub fn map_value_type(ty: &SemanticType) -> Option<SemanticType> {
    let SemanticType::Known { fqn, type_args } = ty else {
        return None;
    };
    match type_args.as_slice() {
        [_, value] if class_hierarchy().is_subclass_of(fqn, names::MAP) => Some(value.clone()),
        _ => None,
    }
}

/// Result type of the subscript operator applied to `receiver`.
pub fn subscript_type(receiver: &SemanticType) -> Option<SemanticType> {
    if receiver.is_string_like() {
        return Some(SemanticType::string());
    }
    map_value_type(receiver).or_else(|| iterable_element_type(receiver))
}

#[cfg(test)]
#[path = "../tests/element_access_tests.rs"]
mod tests;
