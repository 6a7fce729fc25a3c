use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading or resolving type metadata.
#[derive(Debug, Error)]
pub enum ReflectError {
    #[error("unknown type: {name}")]
    UnknownType { name: String },

    #[error("failed to read metadata file {path}")]
    MetadataIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metadata in {path}")]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
