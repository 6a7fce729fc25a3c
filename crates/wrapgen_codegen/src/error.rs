use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while writing generated source to its destination.
///
/// Generation itself is total: `WrapperGenerator::generate` cannot fail for
/// a well-formed descriptor, so errors only appear at the output boundary.
#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("failed to write wrapper source to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create package directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write wrapper source to stream")]
    Stream {
        #[source]
        source: std::io::Error,
    },
}
