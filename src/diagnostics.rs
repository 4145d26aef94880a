//! Developer-mode warnings emitted while resolving tags.

use std::fmt;
use std::sync::Mutex;

use crate::ir::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Lowercased tag collides with a component registered under other casing.
    MisCasedComponent { tag: String, expected: String },
    /// Neither a registered component nor an element the host recognizes.
    UnknownElement { tag: String },
}

impl Warning {
    pub fn tag(&self) -> &str {
        match self {
            Warning::MisCasedComponent { tag, .. } => tag,
            Warning::UnknownElement { tag } => tag,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MisCasedComponent { tag, expected } => write!(
                f,
                "Unknown custom element: <{}> - did you mean <{}>? \
                 HTML is case-insensitive, remember to use kebab-case in templates.",
                tag, expected
            ),
            Warning::UnknownElement { tag } => write!(
                f,
                "Unknown custom element: <{}> - did you register the component correctly? \
                 For recursive components, make sure to provide the \"name\" option.",
                tag
            ),
        }
    }
}

/// Fire-and-forget diagnostic channel.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: Warning, location: &SourceLocation);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: Warning, location: &SourceLocation) {
        tracing::warn!(
            tag = warning.tag(),
            line = location.line,
            column = location.column,
            "{}",
            warning
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _warning: Warning, _location: &SourceLocation) {}
}

/// Keeps every warning in memory, e.g. for editor tooling or tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        match self.warnings.lock() {
            Ok(w) => w.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings().is_empty()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, warning: Warning, _location: &SourceLocation) {
        match self.warnings.lock() {
            Ok(mut w) => w.push(warning),
            Err(poisoned) => poisoned.into_inner().push(warning),
        }
    }
}
