pub mod network;

pub use network::{Example, Network};
