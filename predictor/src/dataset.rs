use ndarray::{Array1, Array2};

use crate::error::{PredictorErr, Result};

/// Number of features each sample carries (height, weight).
pub const FEATURES: usize = 2;

/// A single supervised sample: `(height, weight) -> target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    pub height: f64,
    pub weight: f64,
    pub target: f64,
}

impl TrainingSample {
    pub const fn new(height: f64, weight: f64, target: f64) -> Self {
        Self {
            height,
            weight,
            target,
        }
    }

    #[inline]
    pub fn features(&self) -> [f64; FEATURES] {
        [self.height, self.weight]
    }
}

const EMBEDDED: [TrainingSample; 5] = [
    TrainingSample::new(50., 1., 15.),
    TrainingSample::new(70., 2., 20.),
    TrainingSample::new(100., 3., 25.),
    TrainingSample::new(120., 4., 90.),
    TrainingSample::new(150., 5., 35.),
];

/// An immutable in-memory training set.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<TrainingSample>,
}

impl Dataset {
    /// Creates a new dataset from owned samples.
    ///
    /// # Errors
    /// `PredictorErr::EmptyDataset` if `samples` is empty.
    pub fn new(samples: Vec<TrainingSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(PredictorErr::EmptyDataset);
        }

        Ok(Self { samples })
    }

    /// The five rows the predictor ships with.
    pub fn embedded() -> Self {
        Self {
            samples: EMBEDDED.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// Returns the feature matrix, one row per sample.
    pub fn features(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), FEATURES), |(i, j)| {
            self.samples[i].features()[j]
        })
    }

    /// Returns the target column.
    pub fn targets(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.target).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_five_rows() {
        let dataset = Dataset::embedded();
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.samples()[3], TrainingSample::new(120., 4., 90.));
    }

    #[test]
    fn features_and_targets_line_up() {
        let dataset = Dataset::embedded();
        let x = dataset.features();
        let y = dataset.targets();

        assert_eq!(x.dim(), (5, FEATURES));
        assert_eq!(y.len(), 5);
        assert_eq!(x[[2, 0]], 100.);
        assert_eq!(x[[2, 1]], 3.);
        assert_eq!(y[2], 25.);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            Dataset::new(Vec::new()),
            Err(PredictorErr::EmptyDataset)
        ));
    }
}
