//! Expression type inference over an external syntax tree.
//!
//! The host (completion, hover, diagnostics) asks a
//! [`TypeCalculatorRegistry`] for the type of an expression node. The
//! registry routes the node to the calculators registered for its
//! [`NodeKind`], highest priority first, and returns the first answer.
//! Calculators read nodes only through the shape traits in [`node`] and reach
//! the symbol layer only through [`TypeContext`], so any parser and any
//! symbol table can sit behind them.
//!
//! Pure type computation (the type algebra, LUB, the class hierarchy) lives
//! in `gls-solver`.

pub mod calculator;
pub mod calculators;
pub mod context;
pub mod node;
pub mod registry;

pub use calculator::{CalculatorFn, DEFAULT_PRIORITY, TypeCalculator, calculator_fn};
pub use context::{Symbol, SymbolKind, TypeContext};
pub use node::{
    BinaryShape, CastShape, ConstructorCallShape, ElvisShape, ExprNode, InterpolationShape,
    ListShape, LiteralShape, LiteralValue, MapEntry, MapShape, MethodCallShape, NodeKind,
    PropertyShape, RangeShape, TernaryShape, UnaryShape, VariableShape,
};
pub use registry::{TypeCalculatorRegistry, TypeCalculatorRegistryBuilder};

// Test modules: individual calculators load their own tests via #[path].
#[cfg(test)]
#[path = "../tests/support/mod.rs"]
pub(crate) mod test_support;
#[cfg(test)]
#[path = "../tests/concurrent_tests.rs"]
mod concurrent_tests;
#[cfg(test)]
#[path = "../tests/integration_tests.rs"]
mod integration_tests;
