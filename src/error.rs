use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors reported at the public API boundary.
///
/// All validation happens eagerly, before any weight, bias, or gradient
/// accumulator is touched, so a returned error means the network is exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The layer-size list cannot describe a network: fewer than two layers,
    /// or a layer with zero neurons.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// An input or target vector's length disagrees with the corresponding
    /// layer's neuron count.
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// `train` was called with zero examples; the batch average would divide
    /// by zero.
    #[error("training batch is empty")]
    EmptyBatch,
}
