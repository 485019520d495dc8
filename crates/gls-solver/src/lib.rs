//! AST-agnostic type computation for the gls type engine.
//!
//! This crate knows nothing about syntax trees. It provides:
//!
//! - **Type algebra**: [`SemanticType`] and [`PrimitiveKind`], the closed set
//!   of values every calculator produces
//! - **Numeric promotion**: the rank lattice used for arithmetic operands
//! - **Class hierarchy**: a fixed table of built-in reference types with a
//!   concurrent ancestor-set cache
//! - **LUB**: the least-upper-bound computation used wherever several
//!   expressions unify to one type
//! - **Element access**: element and value types of collection-like values
//!
//! All tables are read-only after first use and every entry point is safe
//! to call from many threads at once.
pub mod element_access;
mod error;
mod format;
pub mod hierarchy;
pub mod lub;
pub mod names;
pub mod numeric;
pub mod types;

pub use error::TypeError;
pub use format::SimpleDisplay;
pub use hierarchy::{AncestorSet, ClassHierarchy, class_hierarchy};
pub use lub::{lub, lub2};
pub use numeric::NumericRank;
pub use types::{PrimitiveKind, SemanticType, UnionMembers};
