//! Numeric promotion lattice.
//!
//! Every numeric operand maps to a [`NumericRank`]. Primitives and their
//! wrapper classes share a rank; `BigInteger` and `BigDecimal` sit between
//! `long` and `float` and exist only in reference form.
//!
//! ```text
//! byte(1) < char(2) < short(3) < int(4) < long(5)
//!     < BigInteger(6) < BigDecimal(7) < float(8) < double(9)
//! ```

use crate::names;
use crate::types::{PrimitiveKind, SemanticType};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NumericRank {
    Byte = 1,
    Char = 2,
    Short = 3,
    Int = 4,
    Long = 5,
    BigInteger = 6,
    BigDecimal = 7,
    Float = 8,
    Double = 9,
}

impl NumericRank {
    /// Smallest rank an arithmetic result can have: sub-int operands widen.
    pub const MIN_PROMOTED: NumericRank = NumericRank::Int;

    pub const fn of_primitive(kind: PrimitiveKind) -> Option<NumericRank> {
        match kind {
            PrimitiveKind::Boolean => None,
            PrimitiveKind::Byte => Some(NumericRank::Byte),
            PrimitiveKind::Char => Some(NumericRank::Char),
            PrimitiveKind::Short => Some(NumericRank::Short),
            PrimitiveKind::Int => Some(NumericRank::Int),
            PrimitiveKind::Long => Some(NumericRank::Long),
            PrimitiveKind::Float => Some(NumericRank::Float),
            PrimitiveKind::Double => Some(NumericRank::Double),
        }
    }

    /// Rank of a reference type, if it is one of the numeric classes.
    pub fn of_reference(fqn: &str) -> Option<NumericRank> {
        match fqn {
            names::BIG_INTEGER => Some(NumericRank::BigInteger),
            names::BIG_DECIMAL => Some(NumericRank::BigDecimal),
            other => PrimitiveKind::from_boxed_fqn(other).and_then(Self::of_primitive),
        }
    }

    /// Primitive form, when the rank has one.
    pub const fn primitive(self) -> Option<PrimitiveKind> {
        match self {
            NumericRank::Byte => Some(PrimitiveKind::Byte),
            NumericRank::Char => Some(PrimitiveKind::Char),
            NumericRank::Short => Some(PrimitiveKind::Short),
            NumericRank::Int => Some(PrimitiveKind::Int),
            NumericRank::Long => Some(PrimitiveKind::Long),
            NumericRank::Float => Some(PrimitiveKind::Float),
            NumericRank::Double => Some(PrimitiveKind::Double),
            NumericRank::BigInteger | NumericRank::BigDecimal => None,
        }
    }

    pub const fn reference_fqn(self) -> &'static str {
        match self {
            NumericRank::Byte => names::BYTE,
            NumericRank::Char => names::CHARACTER,
            NumericRank::Short => names::SHORT,
            NumericRank::Int => names::INTEGER,
            NumericRank::Long => names::LONG,
            NumericRank::BigInteger => names::BIG_INTEGER,
            NumericRank::BigDecimal => names::BIG_DECIMAL,
            NumericRank::Float => names::FLOAT,
            NumericRank::Double => names::DOUBLE,
        }
    }

    pub const fn is_big(self) -> bool {
        matches!(self, NumericRank::BigInteger | NumericRank::BigDecimal)
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, NumericRank::Float | NumericRank::Double)
    }

    /// The type at this rank, boxed or primitive. Ranks without a primitive
    /// form are always references.
    pub fn to_type(self, boxed: bool) -> SemanticType {
        match self.primitive() {
            Some(kind) if !boxed => SemanticType::primitive(kind),
            _ => SemanticType::known(self.reference_fqn()),
        }
    }
}

/// A numeric operand: its rank and whether it was written as a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericOperand {
    pub rank: NumericRank,
    pub boxed: bool,
}

impl NumericOperand {
    pub fn of(ty: &SemanticType) -> Option<NumericOperand> {
        match ty {
            SemanticType::Primitive { kind } => NumericRank::of_primitive(*kind).map(|rank| {
                NumericOperand {
                    rank,
                    boxed: false,
                }
            }),
            SemanticType::Known { fqn, type_args } if type_args.is_empty() => {
                NumericRank::of_reference(fqn).map(|rank| NumericOperand { rank, boxed: true })
            }
            _ => None,
        }
    }
}

/// Promote a set of operands to one numeric type.
///
/// Returns `None` unless every operand is numeric; a single boolean or
/// non-numeric reference disqualifies the whole set.
///
/// - The result is at least `int`.
/// - Any `BigInteger`/`BigDecimal` operand combined with a floating-point
///   maximum yields `BigDecimal`.
/// - Otherwise the result is the maximum rank, boxed when some operand at
///   that rank was boxed.
pub fn promote(types: &[SemanticType]) -> Option<SemanticType> {
    let operands: SmallVec<[NumericOperand; 4]> =
        types.iter().map(NumericOperand::of).collect::<Option<_>>()?;
    let max_rank = operands.iter().map(|op| op.rank).max()?;

    if max_rank.is_floating_point() && operands.iter().any(|op| op.rank.is_big()) {
        return Some(SemanticType::known(names::BIG_DECIMAL));
    }

    if max_rank < NumericRank::MIN_PROMOTED {
        return Some(NumericRank::MIN_PROMOTED.to_type(false));
    }

    let boxed = operands
        .iter()
        .any(|op| op.rank == max_rank && op.boxed);
    Some(max_rank.to_type(boxed))
}

/// Unary numeric promotion: `byte`/`short`/`char` widen to `int`, other
/// numeric types are unchanged.
pub fn promote_unary(ty: &SemanticType) -> Option<SemanticType> {
    promote(std::slice::from_ref(ty))
}

#[cfg(test)]
#[path = "../tests/numeric_tests.rs"]
mod tests;
