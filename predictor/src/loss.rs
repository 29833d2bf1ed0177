use ndarray::ArrayView1;

pub trait LossFn {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}

/// Sum of squared errors, the quantity least squares minimizes.
#[derive(Default, Clone, Copy)]
pub struct Sse;

impl LossFn for Sse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y).mapv(|x| x.powi(2)).sum()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn sse_sums_squared_residuals() {
        let y_pred = array![1., 2., 3., 4.];
        let y = array![1., 0., 3., 7.];

        assert_eq!(Sse.loss(y_pred.view(), y.view()), 13.);
    }

    #[test]
    fn perfect_prediction_has_zero_loss() {
        let y = array![15., 20., 25.];
        assert_eq!(Sse.loss(y.view(), y.view()), 0.);
    }
}
