//! Error type for the fallible editor entry points.
//!
//! Pointer, wheel and key handling never fail; bad input there is a no-op.
//! Only configuration and tool selection can be rejected.

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
