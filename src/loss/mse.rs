/// Mean squared error, used to monitor training progress.
///
/// The backward pass differentiates squared error directly (see
/// `Layer::compute_output_deltas`); this type only reports the scalar loss
/// for drivers and tests.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_vectors() {
        assert_eq!(MseLoss::loss(&[0.25, 0.75], &[0.25, 0.75]), 0.0);
    }

    #[test]
    fn averages_squared_differences() {
        // (1² + 3²) / 2 = 5
        assert!((MseLoss::loss(&[1.0, 0.0], &[0.0, 3.0]) - 5.0).abs() < 1e-12);
    }
}
