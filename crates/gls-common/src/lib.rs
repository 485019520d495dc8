//! Common infrastructure shared by the gls crates.
//!
//! - Tracing subscriber configuration (`tracing_config`)

// Tracing output setup for hosts embedding the engine
pub mod tracing_config;
pub use tracing_config::{LogFormat, TracingSettings, init_tracing};
