#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request failed validation. The message is shown to the caller as-is.
    #[error("{0}")]
    Validation(String),
}
