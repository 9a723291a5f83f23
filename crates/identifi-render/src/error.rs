/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("search failed: {0}")]
    Search(#[from] identifi_identity::IdentityError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
