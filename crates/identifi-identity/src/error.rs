/// Identity-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("search failed: {0}")]
    Search(String),
}
