pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use layers::dense::Layer;
pub use network::network::{Example, Network};
pub use loss::mse::MseLoss;
