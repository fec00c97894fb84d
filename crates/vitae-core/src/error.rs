/// Errors that can occur in Vitae operations.
///
/// The scoring engine itself recovers from degenerate text inputs with
/// fallback values and `AnalysisFlag`s; these variants cover the genuinely
/// failing paths (catalog files, invalid calls).
#[derive(Debug, thiserror::Error)]
pub enum VitaeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for VitaeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VitaeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Catalog(err.to_string())
    }
}
