use serde::{Deserialize, Serialize};

/// Configuration options that drive wrapper source generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeGenConfig {
    /// Indentation string used when pretty-printing generated Java.
    pub indent: String,
    /// Whether to emit a comment identifying the generator at the top of
    /// each file.
    pub include_generator_note: bool,
}

impl Default for CodeGenConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            include_generator_note: false,
        }
    }
}
