use rand::Rng;

use crate::activation::activation::{sigmoid, sigmoid_derivative};
use crate::math::matrix::Matrix;

/// One fully-connected layer.
///
/// Neuron state lives in parallel vectors indexed by neuron position;
/// incoming connections live in two `(prev_size, size)` matrices, where row
/// `i` holds the weights from neuron `i` of the previous layer. The input
/// layer has no incoming connections, so its matrices have zero rows and its
/// biases, while initialized like any other layer's, never enter a
/// computation.
///
/// `activations`, `deltas`, and the two gradient buffers are transient
/// working state: activations are overwritten by every forward pass, deltas
/// by every backward pass, and gradients are zeroed at the start of each
/// training call and consumed by the parameter update at its end.
#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    pub activations: Vec<f64>,
    pub biases: Vec<f64>,
    pub deltas: Vec<f64>,
    pub bias_gradients: Vec<f64>,
    pub weights: Matrix,
    pub weight_gradients: Matrix,
}

impl Layer {
    /// Creates a layer of `size` neurons fed by `prev_size` neurons
    /// (`prev_size == 0` for the input layer). Biases and weights start as
    /// independent uniform draws from [-0.5, 0.5); everything else starts
    /// at zero.
    pub fn new<R: Rng + ?Sized>(size: usize, prev_size: usize, rng: &mut R) -> Layer {
        let biases = (0..size).map(|_| rng.gen::<f64>() - 0.5).collect();
        Layer {
            size,
            activations: vec![0.0; size],
            biases,
            deltas: vec![0.0; size],
            bias_gradients: vec![0.0; size],
            weights: Matrix::random(prev_size, size, rng),
            weight_gradients: Matrix::zeros(prev_size, size),
        }
    }

    /// Overwrites this layer's activations with caller-supplied values.
    /// Input-layer path: bias and weighted sum are bypassed entirely.
    pub fn load_input(&mut self, input: &[f64]) {
        self.activations.copy_from_slice(input);
    }

    /// Forward pass for one layer: `a_j = sigmoid(bias_j + Σ_i w_ij · prev_i)`.
    pub fn feed_from(&mut self, prev_activations: &[f64]) {
        self.activations.copy_from_slice(&self.biases);
        for (i, &prev) in prev_activations.iter().enumerate() {
            let row = self.weights.row(i);
            for (z, &w) in self.activations.iter_mut().zip(row) {
                *z += w * prev;
            }
        }
        for a in &mut self.activations {
            *a = sigmoid(*a);
        }
    }

    /// Output-layer deltas: derivative of squared error through the sigmoid,
    /// `delta_j = (a_j - t_j) · a_j · (1 - a_j)`.
    pub fn compute_output_deltas(&mut self, target: &[f64]) {
        for ((delta, &a), &t) in self
            .deltas
            .iter_mut()
            .zip(&self.activations)
            .zip(target)
        {
            *delta = (a - t) * sigmoid_derivative(a);
        }
    }

    /// Hidden-layer deltas, propagated back from the layer after this one:
    /// `delta_j = (Σ_k w_jk(next) · delta_k(next)) · a_j · (1 - a_j)`.
    pub fn propagate_deltas_from(&mut self, next: &Layer) {
        for (j, (delta, &a)) in self
            .deltas
            .iter_mut()
            .zip(&self.activations)
            .enumerate()
        {
            let sum: f64 = next
                .weights
                .row(j)
                .iter()
                .zip(&next.deltas)
                .map(|(&w, &d)| w * d)
                .sum();
            *delta = sum * sigmoid_derivative(a);
        }
    }

    /// Adds this example's gradient contribution to the batch accumulators:
    /// `wgrad_ij += delta_j · prev_i` and `bgrad_j += delta_j`.
    pub fn accumulate_gradients(&mut self, prev_activations: &[f64]) {
        for (i, &prev) in prev_activations.iter().enumerate() {
            for (j, &delta) in self.deltas.iter().enumerate() {
                self.weight_gradients[(i, j)] += delta * prev;
            }
        }
        for (bgrad, &delta) in self.bias_gradients.iter_mut().zip(&self.deltas) {
            *bgrad += delta;
        }
    }

    /// Zeroes the weight and bias gradient accumulators.
    pub fn reset_gradients(&mut self) {
        self.weight_gradients.clear();
        self.bias_gradients.fill(0.0);
    }

    /// Applies the batch-averaged gradients, `param -= (grad / count) · lr`,
    /// consuming each accumulator back to zero. Accumulators are therefore
    /// only ever nonzero inside a single training call.
    pub fn apply_gradients(&mut self, count: usize, learning_rate: f64) {
        let scale = learning_rate / count as f64;
        for (w, g) in self.weights.iter_mut().zip(self.weight_gradients.iter_mut()) {
            *w -= *g * scale;
            *g = 0.0;
        }
        for (b, g) in self.biases.iter_mut().zip(self.bias_gradients.iter_mut()) {
            *b -= *g * scale;
            *g = 0.0;
        }
    }
}
