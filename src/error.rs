use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_INVALID_OPTIONS: &str = "INVALID_OPTIONS";
pub const ERR_PARSE: &str = "PARSE_ERROR";
pub const ERR_DISCOVERY: &str = "DISCOVERY_ERROR";
pub const ERR_RESERVED_COMPONENT_ID: &str = "RESERVED_COMPONENT_ID";

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILER ERROR
// ═══════════════════════════════════════════════════════════════════════════════

/// Error raised by the compile-pass plumbing around tag resolution.
///
/// Resolution itself never fails; these come from option loading, template
/// parsing, component registration and discovery.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("[{code}] {message}")]
pub struct CompilerError {
    pub code: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub hints: Vec<String>,
}

impl CompilerError {
    pub fn new(code: &str, message: &str, file: &str, line: u32, column: u32) -> Self {
        Self::with_hints(code, message, file, line, column, vec![])
    }

    pub fn with_hints(
        code: &str,
        message: &str,
        file: &str,
        line: u32,
        column: u32,
        hints: Vec<String>,
    ) -> Self {
        CompilerError {
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
            line,
            column,
            hints,
        }
    }

    pub fn invalid_options(message: &str) -> Self {
        Self::new(ERR_INVALID_OPTIONS, message, "", 0, 0)
    }

    pub fn reserved_component_id(id: &str) -> Self {
        Self::with_hints(
            ERR_RESERVED_COMPONENT_ID,
            &format!(
                "Do not use built-in or reserved HTML elements as component id: {}",
                id
            ),
            "",
            0,
            0,
            vec!["Rename the component, e.g. use a hyphenated id like `my-list`.".to_string()],
        )
    }
}
