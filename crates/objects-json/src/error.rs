/// Errors from the JSON helpers.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The input text is not valid JSON.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// The value could not be encoded.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// A positional value could not be converted to its parameter type.
    #[error("positional value {position} has the wrong shape: {source}")]
    Argument {
        /// Zero-based position of the offending value.
        position: usize,
        /// The underlying conversion failure.
        source: serde_json::Error,
    },
}
