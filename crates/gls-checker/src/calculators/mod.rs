//! Built-in calculators, one per expression shape.
//!
//! Every calculator here registers at [`DEFAULT_PRIORITY`](crate::DEFAULT_PRIORITY)
//! and declines (`None`) when the node does not expose the shape it reads.

mod binary;
mod call;
mod collections;
mod literal;
mod operators;
mod property;
mod simple;

pub use binary::{BinaryCalculator, BinaryOperatorClass};
pub use call::{ConstructorCallCalculator, MethodCallCalculator};
pub use collections::{ListLiteralCalculator, MapLiteralCalculator, RangeCalculator};
pub use literal::LiteralCalculator;
pub use operators::{CastCalculator, ElvisCalculator, TernaryCalculator, UnaryCalculator};
pub use property::PropertyAccessCalculator;
pub use simple::{ClosureCalculator, InterpolationCalculator, VariableCalculator};

use crate::calculator::TypeCalculator;
use std::sync::Arc;

/// The full built-in set, in registration order.
pub fn standard_calculators() -> Vec<Arc<dyn TypeCalculator>> {
    vec![
        Arc::new(LiteralCalculator),
        Arc::new(BinaryCalculator),
        Arc::new(ListLiteralCalculator),
        Arc::new(MapLiteralCalculator),
        Arc::new(PropertyAccessCalculator),
        Arc::new(ElvisCalculator),
        Arc::new(InterpolationCalculator),
        Arc::new(ClosureCalculator),
        Arc::new(TernaryCalculator),
        Arc::new(VariableCalculator),
        Arc::new(MethodCallCalculator),
        Arc::new(ConstructorCallCalculator),
        Arc::new(CastCalculator),
        Arc::new(UnaryCalculator),
        Arc::new(RangeCalculator),
    ]
}
