//! Built-in class hierarchy.
//!
//! A fixed, hand-maintained table of direct supertypes for the reference
//! types the engine unifies most often: strings, boxed numerics and the
//! collection interfaces. Ancestor sets are derived from it on demand and
//! memoized in a concurrent map.
//!
//! Names outside the table have no known supertypes: their ancestor set is
//! the name itself plus the top type. User-defined hierarchies are the
//! symbol layer's business, so the engine does not guess at inheritance it
//! cannot see.

use crate::names::*;
use dashmap::DashMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::sync::{Arc, LazyLock};
use tracing::trace;

/// Reflexive, transitive set of ancestor names. Always contains the top type.
pub type AncestorSet = FxHashSet<String>;

const DIRECT_SUPERTYPES: &[(&str, &[&str])] = &[
    (OBJECT, &[]),
    // Strings
    (STRING, &[CHAR_SEQUENCE, COMPARABLE, SERIALIZABLE]),
    (GSTRING, &[CHAR_SEQUENCE, COMPARABLE, SERIALIZABLE]),
    (CHAR_SEQUENCE, &[]),
    (COMPARABLE, &[]),
    (SERIALIZABLE, &[]),
    // Numbers
    (NUMBER, &[]),
    (BYTE, &[NUMBER]),
    (SHORT, &[NUMBER]),
    (INTEGER, &[NUMBER]),
    (LONG, &[NUMBER]),
    (FLOAT, &[NUMBER]),
    (DOUBLE, &[NUMBER]),
    (BIG_INTEGER, &[NUMBER]),
    (BIG_DECIMAL, &[NUMBER]),
    (CHARACTER, &[COMPARABLE, SERIALIZABLE]),
    (BOOLEAN, &[COMPARABLE, SERIALIZABLE]),
    // Collections
    (ITERABLE, &[]),
    (COLLECTION, &[ITERABLE]),
    (LIST, &[COLLECTION]),
    (SET, &[COLLECTION]),
    (SORTED_SET, &[SET]),
    (QUEUE, &[COLLECTION]),
    (DEQUE, &[QUEUE]),
    (ARRAY_LIST, &[LIST, SERIALIZABLE]),
    (LINKED_LIST, &[LIST, DEQUE, SERIALIZABLE]),
    (HASH_SET, &[SET, SERIALIZABLE]),
    (LINKED_HASH_SET, &[HASH_SET]),
    (TREE_SET, &[SORTED_SET, SERIALIZABLE]),
    (MAP, &[]),
    (SORTED_MAP, &[MAP]),
    (HASH_MAP, &[MAP, SERIALIZABLE]),
    (LINKED_HASH_MAP, &[HASH_MAP]),
    (TREE_MAP, &[SORTED_MAP, SERIALIZABLE]),
    // Groovy runtime
    (CLOSURE, &[SERIALIZABLE]),
    (RANGE, &[LIST]),
    (INT_RANGE, &[RANGE, SERIALIZABLE]),
];

/// Preference order among well-known common ancestors, most specific first.
///
/// `List`/`Set`/`Map`/`Number` share the top tier; ties inside a tier fall
/// back to table order, which keeps results reproducible.
const ANCESTOR_PRIORITY: &[(&str, u8)] = &[
    (LIST, 0),
    (SET, 0),
    (MAP, 0),
    (NUMBER, 0),
    (COLLECTION, 1),
    (ITERABLE, 2),
    (CHAR_SEQUENCE, 3),
    (COMPARABLE, 4),
    (SERIALIZABLE, 5),
    (OBJECT, 6),
];

static BUILTIN: LazyLock<ClassHierarchy> = LazyLock::new(ClassHierarchy::builtin);

/// The process-wide built-in hierarchy.
pub fn class_hierarchy() -> &'static ClassHierarchy {
    &BUILTIN
}

pub struct ClassHierarchy {
    supertypes: FxHashMap<&'static str, &'static [&'static str]>,
    /// fqn -> ancestor set. Populated concurrently; a racing duplicate
    /// computation produces an identical value.
    ancestor_cache: DashMap<String, Arc<AncestorSet>>,
}

impl ClassHierarchy {
    /// Hierarchy over the built-in table.
    pub fn builtin() -> Self {
        Self {
            supertypes: DIRECT_SUPERTYPES.iter().copied().collect(),
            ancestor_cache: DashMap::new(),
        }
    }

    pub fn is_builtin_class(&self, fqn: &str) -> bool {
        self.supertypes.contains_key(fqn)
    }

    /// Direct supertypes of `fqn`; empty for names outside the table.
    pub fn direct_supertypes(&self, fqn: &str) -> &'static [&'static str] {
        self.supertypes.get(fqn).copied().unwrap_or(&[])
    }

    /// All ancestors of `fqn`, including itself and the top type.
    pub fn ancestors(&self, fqn: &str) -> Arc<AncestorSet> {
        if let Some(cached) = self.ancestor_cache.get(fqn) {
            return Arc::clone(cached.value());
        }

        let computed = Arc::new(self.compute_ancestors(fqn));
        trace!(
            fqn,
            ancestors = computed.len(),
            "ClassHierarchy::ancestors - cache miss"
        );
        self.ancestor_cache
            .entry(fqn.to_string())
            .or_insert_with(|| Arc::clone(&computed));
        computed
    }

    fn compute_ancestors(&self, fqn: &str) -> AncestorSet {
        let mut ancestors = AncestorSet::default();
        ancestors.insert(fqn.to_string());
        ancestors.insert(OBJECT.to_string());

        let mut pending: SmallVec<[&'static str; 8]> =
            self.direct_supertypes(fqn).iter().copied().collect();
        while let Some(next) = pending.pop() {
            if ancestors.insert(next.to_string()) {
                pending.extend(self.direct_supertypes(next).iter().copied());
            }
        }
        ancestors
    }

    /// Whether `sub` is `sup` or inherits from it according to the table.
    pub fn is_subclass_of(&self, sub: &str, sup: &str) -> bool {
        self.ancestors(sub).contains(sup)
    }

    /// Ancestors shared by every name in `fqns`. Always contains the top type.
    pub fn common_ancestors(&self, fqns: &[&str]) -> AncestorSet {
        let Some((first, rest)) = fqns.split_first() else {
            return std::iter::once(OBJECT.to_string()).collect();
        };

        let mut common: AncestorSet = (*self.ancestors(first)).clone();
        for fqn in rest {
            let ancestors = self.ancestors(fqn);
            common.retain(|name| ancestors.contains(name));
        }
        common.insert(OBJECT.to_string());
        common
    }

    /// The most specific ancestor shared by every name in `fqns`.
    ///
    /// Ancestors outside the priority table (concrete classes such as
    /// `HashMap`) are preferred, deepest first; then the priority table
    /// decides. The top type is the last resort.
    pub fn most_specific_common_ancestor(&self, fqns: &[&str]) -> String {
        let common = self.common_ancestors(fqns);

        let mut candidates: Vec<(AncestorRank, &String)> = common
            .iter()
            .map(|name| (self.rank(name), name))
            .collect();
        candidates.sort();

        candidates
            .first()
            .map(|(_, name)| (*name).clone())
            .unwrap_or_else(|| OBJECT.to_string())
    }

    fn rank(&self, fqn: &str) -> AncestorRank {
        match ANCESTOR_PRIORITY.iter().position(|(name, _)| *name == fqn) {
            Some(position) => AncestorRank::Listed {
                tier: ANCESTOR_PRIORITY[position].1,
                position,
            },
            None => AncestorRank::Unlisted {
                // Negated so that deeper (more ancestors) sorts first.
                shallowness: usize::MAX - self.ancestors(fqn).len(),
            },
        }
    }

    /// Number of memoized ancestor sets.
    pub fn cached_entries(&self) -> usize {
        self.ancestor_cache.len()
    }
}

/// Sort key for common-ancestor selection; smaller is more specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum AncestorRank {
    Unlisted { shallowness: usize },
    Listed { tier: u8, position: usize },
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
