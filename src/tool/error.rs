/// Errors raised by the geoprocessing tools.
///
/// Pre-condition violations are detected before any geometry is processed: when they are
/// raised, nothing was written to the output.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ToolError {
    /// The output already exists.
    #[error("the output `{0}` already exists.")]
    OutputExists(String),
    /// The input has more features than the tool accepts.
    #[error("the input has {count} features, more than the limit of {limit}.")]
    TooManyFeatures {
        /// The number of input features.
        count: usize,
        /// The maximum number of input features.
        limit: usize,
    },
    /// The output rejected a feature.
    #[error("the output rejected a feature: {0}")]
    Sink(String),
}
