//! Type algebra.
//!
//! [`SemanticType`] is the closed set of values produced by every calculator.
//! Values are immutable and transient: they are built fresh per query and
//! handed to the caller (completion, hover, diagnostics).

use crate::TypeError;
use crate::names;
use rustc_hash::FxHasher;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// The eight machine primitives.
///
/// Declaration order encodes promotion width: a wider numeric type has a
/// higher ordinal. `Boolean` never promotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Boolean)
    }

    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Char
                | PrimitiveKind::Short
                | PrimitiveKind::Int
                | PrimitiveKind::Long
        )
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    /// Source keyword (`int`, `boolean`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Fully-qualified name of the wrapper class.
    pub const fn boxed_fqn(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => names::BOOLEAN,
            PrimitiveKind::Byte => names::BYTE,
            PrimitiveKind::Char => names::CHARACTER,
            PrimitiveKind::Short => names::SHORT,
            PrimitiveKind::Int => names::INTEGER,
            PrimitiveKind::Long => names::LONG,
            PrimitiveKind::Float => names::FLOAT,
            PrimitiveKind::Double => names::DOUBLE,
        }
    }

    /// Inverse of [`PrimitiveKind::boxed_fqn`].
    pub fn from_boxed_fqn(fqn: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.boxed_fqn() == fqn)
    }
}

/// A best-effort static type.
///
/// Equality is structural for `Known`, `Primitive` and `Array`; `Union`
/// compares as a set; `Dynamic` and `Unknown` compare by variant only since
/// their payloads are diagnostic.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SemanticType {
    /// A resolved reference type with ordered generic arguments.
    Known {
        fqn: String,
        type_args: Vec<SemanticType>,
    },
    Primitive {
        kind: PrimitiveKind,
    },
    /// Intentionally unchecked, e.g. an untyped `def` declaration.
    Dynamic {
        hint: Option<String>,
    },
    /// Inference failed.
    Unknown {
        reason: String,
    },
    /// Possible types across divergent branches. Built only through
    /// [`SemanticType::union`], which guarantees two or more distinct members.
    Union {
        types: UnionMembers,
    },
    Null,
    Array {
        component: Box<SemanticType>,
    },
}

/// Members of a `Union`: at least two, pairwise distinct, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct UnionMembers(Box<[SemanticType]>);

impl UnionMembers {
    pub fn as_slice(&self) -> &[SemanticType] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SemanticType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ty: &SemanticType) -> bool {
        self.0.contains(ty)
    }
}

impl<'a> IntoIterator for &'a UnionMembers {
    type Item = &'a SemanticType;
    type IntoIter = std::slice::Iter<'a, SemanticType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for UnionMembers {
    fn eq(&self, other: &Self) -> bool {
        // Members are distinct, so equal length plus containment is set equality.
        self.len() == other.len() && self.iter().all(|ty| other.contains(ty))
    }
}

impl Eq for UnionMembers {}

impl Hash for UnionMembers {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: combine member hashes commutatively.
        let mut combined: u64 = 0;
        for member in self.iter() {
            let mut hasher = FxHasher::default();
            member.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        self.len().hash(state);
        combined.hash(state);
    }
}

impl PartialEq for SemanticType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                SemanticType::Known {
                    fqn: a,
                    type_args: a_args,
                },
                SemanticType::Known {
                    fqn: b,
                    type_args: b_args,
                },
            ) => a == b && a_args == b_args,
            (SemanticType::Primitive { kind: a }, SemanticType::Primitive { kind: b }) => a == b,
            (SemanticType::Dynamic { .. }, SemanticType::Dynamic { .. }) => true,
            (SemanticType::Unknown { .. }, SemanticType::Unknown { .. }) => true,
            (SemanticType::Union { types: a }, SemanticType::Union { types: b }) => a == b,
            (SemanticType::Null, SemanticType::Null) => true,
            (SemanticType::Array { component: a }, SemanticType::Array { component: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for SemanticType {}

impl Hash for SemanticType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            SemanticType::Known { fqn, type_args } => {
                fqn.hash(state);
                type_args.hash(state);
            }
            SemanticType::Primitive { kind } => kind.hash(state),
            SemanticType::Union { types } => types.hash(state),
            SemanticType::Array { component } => component.hash(state),
            SemanticType::Dynamic { .. } | SemanticType::Unknown { .. } | SemanticType::Null => {}
        }
    }
}

impl SemanticType {
    pub fn known(fqn: impl Into<String>) -> Self {
        SemanticType::Known {
            fqn: fqn.into(),
            type_args: Vec::new(),
        }
    }

    pub fn known_with_args(fqn: impl Into<String>, type_args: Vec<SemanticType>) -> Self {
        SemanticType::Known {
            fqn: fqn.into(),
            type_args,
        }
    }

    pub const fn primitive(kind: PrimitiveKind) -> Self {
        SemanticType::Primitive { kind }
    }

    pub fn object() -> Self {
        Self::known(names::OBJECT)
    }

    pub fn string() -> Self {
        Self::known(names::STRING)
    }

    pub fn gstring() -> Self {
        Self::known(names::GSTRING)
    }

    pub const fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    pub const fn int() -> Self {
        Self::primitive(PrimitiveKind::Int)
    }

    /// `java.util.List<element>`
    pub fn list_of(element: SemanticType) -> Self {
        Self::known_with_args(names::LIST, vec![element])
    }

    /// `java.util.Map<key, value>`
    pub fn map_of(key: SemanticType, value: SemanticType) -> Self {
        Self::known_with_args(names::MAP, vec![key, value])
    }

    pub fn dynamic(hint: Option<&str>) -> Self {
        SemanticType::Dynamic {
            hint: hint.map(str::to_string),
        }
    }

    pub fn unknown(reason: impl Into<String>) -> Self {
        SemanticType::Unknown {
            reason: reason.into(),
        }
    }

    pub fn array(component: SemanticType) -> Self {
        SemanticType::Array {
            component: Box::new(component),
        }
    }

    /// Build a union of two or more distinct types.
    ///
    /// Nested unions are flattened and duplicates dropped first. Fewer than
    /// two distinct members is an invariant violation: callers that end up
    /// with a single candidate must use it directly (see
    /// [`SemanticType::union_or_single`]).
    pub fn union(members: impl IntoIterator<Item = SemanticType>) -> Result<Self, TypeError> {
        let distinct = collect_distinct_members(members);
        if distinct.len() < 2 {
            return Err(TypeError::InvalidArgument(
                "union requires at least two distinct member types",
            ));
        }
        Ok(SemanticType::Union {
            types: UnionMembers(distinct.into_boxed_slice()),
        })
    }

    /// Like [`SemanticType::union`], but a single distinct member is returned
    /// as-is. Fails only on an empty input.
    pub fn union_or_single(
        members: impl IntoIterator<Item = SemanticType>,
    ) -> Result<Self, TypeError> {
        let mut distinct = collect_distinct_members(members);
        match distinct.len() {
            0 => Err(TypeError::InvalidArgument(
                "cannot build a union of an empty sequence",
            )),
            1 => Ok(distinct.remove(0)),
            _ => Ok(SemanticType::Union {
                types: UnionMembers(distinct.into_boxed_slice()),
            }),
        }
    }

    /// Fully-qualified name of a `Known` type.
    pub fn fqn(&self) -> Option<&str> {
        match self {
            SemanticType::Known { fqn, .. } => Some(fqn),
            _ => None,
        }
    }

    pub fn type_args(&self) -> &[SemanticType] {
        match self {
            SemanticType::Known { type_args, .. } => type_args,
            _ => &[],
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.fqn() == Some(name)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, SemanticType::Null)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, SemanticType::Unknown { .. })
    }

    pub const fn is_dynamic(&self) -> bool {
        matches!(self, SemanticType::Dynamic { .. })
    }

    pub const fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            SemanticType::Primitive { kind } => Some(*kind),
            _ => None,
        }
    }

    /// `String` or `GString`.
    pub fn is_string_like(&self) -> bool {
        matches!(self.fqn(), Some(names::STRING) | Some(names::GSTRING))
    }

    /// Primitive -> wrapper class; everything else unchanged.
    pub fn boxed(&self) -> SemanticType {
        match self {
            SemanticType::Primitive { kind } => SemanticType::known(kind.boxed_fqn()),
            other => other.clone(),
        }
    }

    /// Wrapper class -> primitive; everything else unchanged.
    pub fn unboxed(&self) -> SemanticType {
        if let SemanticType::Known { fqn, type_args } = self
            && type_args.is_empty()
            && let Some(kind) = PrimitiveKind::from_boxed_fqn(fqn)
        {
            return SemanticType::primitive(kind);
        }
        self.clone()
    }
}

fn collect_distinct_members(members: impl IntoIterator<Item = SemanticType>) -> Vec<SemanticType> {
    let mut distinct: Vec<SemanticType> = Vec::new();
    for member in members {
        match member {
            SemanticType::Union { types } => {
                for inner in types.0.into_vec() {
                    push_distinct(&mut distinct, inner);
                }
            }
            other => push_distinct(&mut distinct, other),
        }
    }
    distinct
}

fn push_distinct(distinct: &mut Vec<SemanticType>, ty: SemanticType) {
    if !distinct.contains(&ty) {
        distinct.push(ty);
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
