use std::ops::{Index, IndexMut};

use rand::Rng;

/// Dense row-major matrix of `f64`.
///
/// Backs the per-layer weight and weight-gradient storage: entry `(i, j)` of
/// a layer's weight matrix is the connection from neuron `i` of the previous
/// layer to neuron `j` of that layer. One flat allocation keeps the
/// weighted-sum inner loop on contiguous memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Matrix with every entry drawn independently and uniformly from
    /// [-0.5, 0.5).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for value in &mut res.data {
            *value = rng.gen::<f64>() - 0.5;
        }
        res
    }

    /// Resets every entry to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Row `i` as a slice; the inner loops iterate rows of the weight matrix
    /// against the previous layer's activations.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.data.iter_mut()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zeros_has_requested_shape_and_is_zero() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 4);
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn random_entries_stay_in_init_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(16, 16, &mut rng);
        assert!(m.iter().all(|&x| (-0.5..0.5).contains(&x)));
    }

    #[test]
    fn indexing_is_row_major() {
        let mut m = Matrix::zeros(2, 3);
        m[(1, 2)] = 42.0;
        assert_eq!(m[(1, 2)], 42.0);
        assert_eq!(m.row(1), &[0.0, 0.0, 42.0]);
    }

    #[test]
    fn clear_zeroes_without_reshaping() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = Matrix::random(4, 4, &mut rng);
        m.clear();
        assert_eq!(m.rows, 4);
        assert_eq!(m.cols, 4);
        assert!(m.iter().all(|&x| x == 0.0));
    }
}
