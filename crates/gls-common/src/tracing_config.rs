//! Logging setup for hosts that embed the type engine.
//!
//! Two environment variables drive it:
//!
//! - `GLS_LOG` holds filter directives in `RUST_LOG` syntax and wins over
//!   `RUST_LOG` when both are set. With neither set nothing is installed.
//! - `GLS_LOG_FORMAT` picks the output: `text` (default), `tree` for an
//!   indented view of nested calculator dispatch, or `json`.
//!
//! ```bash
//! GLS_LOG=gls_checker::registry=trace GLS_LOG_FORMAT=tree my-language-server
//! GLS_LOG=gls_solver::hierarchy=trace my-language-server
//! ```
//!
//! Reading the environment ([`TracingSettings::from_env`]) is separate from
//! installing the subscriber ([`TracingSettings::install`]), so hosts can
//! build settings from their own configuration instead.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub const LOG_FILTER_VAR: &str = "GLS_LOG";
pub const LOG_FORMAT_VAR: &str = "GLS_LOG_FORMAT";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat text lines.
    #[default]
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unrecognised names fall back to [`LogFormat::Text`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// What to install: filter directives (if logging is enabled at all) and
/// the output format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingSettings {
    pub filter_directives: Option<String>,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter_directives = lookup(LOG_FILTER_VAR).or_else(|| lookup(FALLBACK_FILTER_VAR));
        let format = lookup(LOG_FORMAT_VAR)
            .map(|name| LogFormat::parse(&name))
            .unwrap_or_default();
        Self {
            filter_directives,
            format,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.filter_directives.is_some()
    }

    fn output_layer(&self) -> BoxedLayer {
        match self.format {
            LogFormat::Tree => tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        }
    }

    /// Install the global subscriber. Returns `true` only when this call
    /// installed it: disabled settings and an already-present subscriber
    /// both leave the process untouched.
    ///
    /// Output goes to stderr so it never mixes with an editor protocol
    /// stream on stdout.
    pub fn install(&self) -> bool {
        let Some(directives) = self.filter_directives.as_deref() else {
            return false;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);
        Registry::default()
            .with(self.output_layer())
            .with(filter)
            .try_init()
            .is_ok()
    }
}

/// Install logging as configured by `GLS_LOG`/`RUST_LOG` and
/// `GLS_LOG_FORMAT`. Safe to call more than once.
pub fn init_tracing() {
    TracingSettings::from_env().install();
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
