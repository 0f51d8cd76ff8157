/// Logistic sigmoid, `1 / (1 + e^-z)`, numerically stable for any finite `z`.
///
/// The naive form overflows `e^-z` for large negative `z`, so the negative
/// branch is rewritten as `e^z / (1 + e^z)`. Past |z| ≈ 745 the exponential
/// underflows and the quotient would round to exactly 0 or 1, so the result
/// is clamped back inside the open interval (0, 1).
pub fn sigmoid(z: f64) -> f64 {
    let a = if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    };
    a.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON)
}

/// Derivative of the sigmoid expressed through its output: `a * (1 - a)`.
///
/// The backward pass only ever has the activation `a = sigmoid(z)` at hand,
/// never `z` itself, so the derivative is taken in activation space.
pub fn sigmoid_derivative(a: f64) -> f64 {
    a * (1.0 - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_monotone() {
        assert!(sigmoid(-1.0) < sigmoid(0.0));
        assert!(sigmoid(0.0) < sigmoid(1.0));
    }

    #[test]
    fn sigmoid_survives_extreme_inputs() {
        for z in [-1e6, -750.0, 750.0, 1e6, f64::MIN, f64::MAX] {
            let a = sigmoid(z);
            assert!(a.is_finite(), "sigmoid({z}) not finite");
            assert!(a > 0.0 && a < 1.0, "sigmoid({z}) = {a} escaped (0, 1)");
        }
    }

    #[test]
    fn branches_agree_near_zero() {
        let pos = sigmoid(1e-12);
        let neg = sigmoid(-1e-12);
        assert!((pos - 0.5).abs() < 1e-9);
        assert!((neg - 0.5).abs() < 1e-9);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for z in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            let numeric = (sigmoid(z + h) - sigmoid(z - h)) / (2.0 * h);
            let analytic = sigmoid_derivative(sigmoid(z));
            assert!((numeric - analytic).abs() < 1e-8);
        }
    }
}
