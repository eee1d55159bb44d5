#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A storage backend fault surfaced through the field store interface.
    ///
    /// The in-memory registry never produces this; it exists so persistent
    /// backends have an error channel to the HTTP layer.
    #[error("Internal error: {0}")]
    Internal(String),
}
