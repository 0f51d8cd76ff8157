use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;

/// One training example: an input vector paired with the output the network
/// should learn to produce for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Example {
        Example { input, output }
    }
}

/// A fully-connected feedforward network of sigmoid neurons.
///
/// The topology is fixed at construction: every neuron in layer `i` connects
/// to every neuron in layer `i + 1`, and nothing is ever added or removed.
/// Weights and biases change only through [`Network::train`];
/// [`Network::predict`] touches nothing but the transient activations.
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with the given layer sizes, initializing weights and
    /// biases from the process-wide RNG. Use [`Network::from_seed`] when the
    /// run needs to be reproducible.
    pub fn new(layer_sizes: &[usize]) -> Result<Network> {
        Network::with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Builds a network whose initial parameters are fully determined by
    /// `seed`.
    pub fn from_seed(layer_sizes: &[usize], seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::with_rng(layer_sizes, &mut rng)
    }

    /// Builds a network drawing initial parameters from a caller-supplied
    /// generator.
    pub fn with_rng<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Network> {
        if layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "need an input and an output layer, got {} layer(s)",
                layer_sizes.len()
            )));
        }
        if let Some(i) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidTopology(format!(
                "layer {i} has zero neurons"
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut prev_size = 0;
        for &size in layer_sizes {
            layers.push(Layer::new(size, prev_size, rng));
            prev_size = size;
        }
        Ok(Network { layers })
    }

    /// Number of neurons in the input layer.
    pub fn input_size(&self) -> usize {
        self.layers[0].size
    }

    /// Number of neurons in the output layer.
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size
    }

    /// Runs a forward pass and returns the output layer's activations.
    ///
    /// Pure with respect to parameters: no weight, bias, or gradient
    /// accumulator changes, so repeated calls with the same input yield the
    /// same output until the next `train` call. The returned vector is a
    /// fresh copy; mutating it cannot reach into the network.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        expect_len(input.len(), self.input_size())?;
        self.forward(input);
        Ok(self.layers[self.layers.len() - 1].activations.clone())
    }

    /// Runs one full-batch gradient-descent step over `examples`.
    ///
    /// The cycle: zero the gradient accumulators, then for each example run
    /// forward, backward, and gradient accumulation, and finally apply the
    /// accumulated gradients averaged over the batch, scaled by
    /// `learning_rate`. Callers get stochastic or mini-batch behavior by
    /// partitioning their data across repeated calls.
    ///
    /// Every example's dimensions are validated before any pass runs, so a
    /// failed call leaves the network untouched.
    pub fn train(&mut self, examples: &[Example], learning_rate: f64) -> Result<()> {
        if examples.is_empty() {
            return Err(NetworkError::EmptyBatch);
        }
        let input_size = self.input_size();
        let output_size = self.output_size();
        for example in examples {
            expect_len(example.input.len(), input_size)?;
            expect_len(example.output.len(), output_size)?;
        }

        for layer in &mut self.layers {
            layer.reset_gradients();
        }

        for example in examples {
            self.forward(&example.input);
            self.backward(&example.output);
            self.accumulate_gradients();
        }

        // Layer 0 has no incoming connections and its bias never enters a
        // forward pass, so only layers 1.. carry live parameters.
        for layer in &mut self.layers[1..] {
            layer.apply_gradients(examples.len(), learning_rate);
        }
        Ok(())
    }

    /// Forward pass: load the input into layer 0, then feed each layer from
    /// the activations of the one before it.
    fn forward(&mut self, input: &[f64]) {
        self.layers[0].load_input(input);
        for l in 1..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(l);
            tail[0].feed_from(&head[l - 1].activations);
        }
    }

    /// Backward pass: output-layer deltas from the target, then hidden-layer
    /// deltas in reverse layer order. Input-layer deltas would feed no
    /// parameter, so layer 0 is skipped.
    fn backward(&mut self, target: &[f64]) {
        let last = self.layers.len() - 1;
        self.layers[last].compute_output_deltas(target);
        for l in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(l + 1);
            head[l].propagate_deltas_from(&tail[0]);
        }
    }

    /// Adds the current example's contribution to every gradient accumulator.
    fn accumulate_gradients(&mut self) {
        for l in 1..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(l);
            tail[0].accumulate_gradients(&head[l - 1].activations);
        }
    }
}

fn expect_len(actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(NetworkError::DimensionMismatch { expected, actual })
    }
}
