/// Error types shared by the guideline tooling crates.
///
/// These cover reading and decoding the dependency lockfile. Application-specific
/// errors should be defined in each binary crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lockfile json: {0}")]
    Json(#[from] serde_json::Error),
}
