use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{
    error::{PredictorErr, Result},
    loss::{LossFn, Sse},
};

/// An ordinary least-squares linear model with an intercept term.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    intercept: f64,
    coefficients: Array1<f64>,
}

impl LinearRegression {
    /// Fits the model minimizing the squared error of `x` against `y`.
    ///
    /// The features and the target are centered first, so the intercept drops out of the normal
    /// equations and is recovered afterwards as `mean(y) - coefficients · mean(x)`. Each centered
    /// feature is then divided by its norm, so the system solved is the correlation matrix of the
    /// features no matter their units.
    ///
    /// # Arguments
    /// * `x` - The feature matrix, one row per sample.
    /// * `y` - The target of each sample.
    ///
    /// # Errors
    /// * `SizeMismatch` if `x` and `y` disagree on the amount of samples.
    /// * `EmptyDataset` if there are no samples.
    /// * `SingularSystem` if the features are linearly dependent.
    pub fn fit(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<Self> {
        let rows = x.nrows();
        if rows != y.len() {
            return Err(PredictorErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: rows,
            });
        }

        let x_mean = x.mean_axis(Axis(0)).ok_or(PredictorErr::EmptyDataset)?;
        let y_mean = y.mean().ok_or(PredictorErr::EmptyDataset)?;

        let xc = &x - &x_mean;
        let yc = y.mapv(|v| v - y_mean);

        // A column whose spread is rounding noise next to its magnitude is constant.
        let norms = xc.map_axis(Axis(0), |col| col.dot(&col).sqrt());
        let magnitudes = x.map_axis(Axis(0), |col| col.fold(0f64, |acc, v| acc.max(v.abs())));
        let floor = rows as f64 * f64::EPSILON;
        if norms
            .iter()
            .zip(&magnitudes)
            .any(|(&norm, &magnitude)| norm <= magnitude * floor)
        {
            return Err(PredictorErr::SingularSystem);
        }
        let xs = &xc / &norms;

        let gram = xs.t().dot(&xs);
        let moment = xs.t().dot(&yc);
        let coefficients = solve(gram, moment)? / &norms;
        let intercept = y_mean - coefficients.dot(&x_mean);

        debug!("fitted {rows} samples: intercept={intercept}, coefficients={coefficients}");

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    /// Builds a model from already known parameters.
    pub fn from_parts(intercept: f64, coefficients: Array1<f64>) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// Predicts the output for a single feature vector.
    pub fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(PredictorErr::SizeMismatch {
                a: "features",
                b: "coefficients",
                got: features.len(),
                expected: self.coefficients.len(),
            });
        }

        let weighted: f64 = features
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();

        Ok(self.intercept + weighted)
    }

    /// Predicts the output for every row of `x`.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(PredictorErr::SizeMismatch {
                a: "x",
                b: "coefficients",
                got: x.ncols(),
                expected: self.coefficients.len(),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }

    /// Coefficient of determination (R²) over the given samples.
    pub fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;
        let y_mean = y.mean().ok_or(PredictorErr::EmptyDataset)?;

        let residual = Sse.loss(y_pred.view(), y);
        let total = y.mapv(|v| (v - y_mean).powi(2)).sum();

        Ok(1. - residual / total)
    }
}

/// Smallest pivot accepted on a unit-diagonal system, i.e. the variance a feature must keep once
/// the others are accounted for.
const PIVOT_TOL: f64 = 1e-10;

/// Solves `a · w = b` through gaussian elimination with partial pivoting.
///
/// `a` must have a unit diagonal, so pivots are comparable across columns.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);

        if a[[pivot, col]].abs() <= PIVOT_TOL {
            return Err(PredictorErr::SingularSystem);
        }

        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                let delta = factor * a[[col, k]];
                a[[row, k]] -= delta;
            }
            let delta = factor * b[col];
            b[row] -= delta;
        }
    }

    let mut w = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * w[k]).sum();
        w[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(w)
}
