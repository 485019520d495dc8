//! Calculator dispatch.
//!
//! The registry maps a [`NodeKind`] to the calculators that claim it, sorted
//! by descending priority (registration order among equals). It is built
//! once through [`TypeCalculatorRegistryBuilder`] and read-only afterwards,
//! so any number of threads may call [`TypeCalculatorRegistry::calculate`]
//! concurrently.

use crate::calculator::TypeCalculator;
use crate::calculators;
use crate::context::TypeContext;
use crate::node::{ExprNode, NodeKind};
use gls_solver::SemanticType;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::{debug, trace};

type CalculatorList = Box<[Arc<dyn TypeCalculator>]>;

pub struct TypeCalculatorRegistry {
    /// Kinds in first-registration order; each list sorted by priority.
    by_kind: IndexMap<NodeKind, CalculatorList, FxBuildHasher>,
}

impl TypeCalculatorRegistry {
    pub fn builder() -> TypeCalculatorRegistryBuilder {
        TypeCalculatorRegistryBuilder::new()
    }

    /// Registry holding the full built-in calculator set.
    pub fn standard() -> Self {
        Self::builder().with_standard_calculators().build()
    }

    /// Compute the type of `node`.
    ///
    /// Candidates for the node's kind run in priority order and the first
    /// `Some` wins. Never fails: with no candidate, or when every candidate
    /// declines, the result is `Unknown`.
    pub fn calculate(&self, node: &dyn ExprNode, ctx: &dyn TypeContext) -> SemanticType {
        let kind = node.kind();
        let Some(candidates) = self.by_kind.get(&kind) else {
            debug!(%kind, "TypeCalculatorRegistry::calculate - no calculator registered");
            return SemanticType::unknown("no calculator matched");
        };

        for calculator in candidates.iter() {
            match calculator.calculate(node, ctx) {
                Some(ty) => {
                    trace!(
                        %kind,
                        calculator = calculator.name(),
                        priority = calculator.priority(),
                        result = %ty,
                        "TypeCalculatorRegistry::calculate"
                    );
                    return ty;
                }
                None => trace!(
                    %kind,
                    calculator = calculator.name(),
                    "TypeCalculatorRegistry::calculate - declined"
                ),
            }
        }

        debug!(
            %kind,
            candidates = candidates.len(),
            "TypeCalculatorRegistry::calculate - every calculator declined"
        );
        SemanticType::unknown(format!("{kind} produced no result"))
    }

    /// Candidates for `kind`, highest priority first.
    pub fn calculators_for(&self, kind: NodeKind) -> &[Arc<dyn TypeCalculator>] {
        self.by_kind.get(&kind).map(|list| &list[..]).unwrap_or(&[])
    }

    /// Kinds with at least one calculator, in first-registration order.
    pub fn registered_kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.by_kind.keys().copied()
    }

    /// Total number of registered calculators.
    pub fn len(&self) -> usize {
        self.by_kind.values().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

#[derive(Default)]
pub struct TypeCalculatorRegistryBuilder {
    calculators: Vec<Arc<dyn TypeCalculator>>,
}

impl TypeCalculatorRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a calculator. Several calculators may claim the same kind.
    pub fn register(self, calculator: impl TypeCalculator + 'static) -> Self {
        self.register_shared(Arc::new(calculator))
    }

    /// Add a calculator that is shared with other registries.
    pub fn register_shared(mut self, calculator: Arc<dyn TypeCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    /// Add every built-in calculator at [`DEFAULT_PRIORITY`](crate::DEFAULT_PRIORITY).
    pub fn with_standard_calculators(self) -> Self {
        calculators::standard_calculators()
            .into_iter()
            .fold(self, Self::register_shared)
    }

    /// Freeze into an immutable registry.
    pub fn build(self) -> TypeCalculatorRegistry {
        let mut grouped: IndexMap<NodeKind, Vec<Arc<dyn TypeCalculator>>, FxBuildHasher> =
            IndexMap::default();
        for calculator in self.calculators {
            grouped
                .entry(calculator.node_kind())
                .or_default()
                .push(calculator);
        }

        let by_kind = grouped
            .into_iter()
            .map(|(kind, mut list)| {
                // Stable: equal priorities keep registration order.
                list.sort_by_key(|calculator| Reverse(calculator.priority()));
                (kind, list.into_boxed_slice())
            })
            .collect();

        let registry = TypeCalculatorRegistry { by_kind };
        debug!(
            kinds = registry.by_kind.len(),
            calculators = registry.len(),
            "TypeCalculatorRegistry::build"
        );
        registry
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
