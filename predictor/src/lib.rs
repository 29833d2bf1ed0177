pub mod dataset;
pub mod error;
pub mod input;
pub mod linear;
pub mod loss;

use std::io::{BufRead, Write};

use log::info;

pub use dataset::{Dataset, TrainingSample};
pub use error::{PredictorErr, Result};
pub use input::{Query, read_query};
pub use linear::LinearRegression;

/// Fits a model on `dataset`, asks for a query on `input` and writes the prediction to `output`.
///
/// # Returns
/// The predicted value, which is also written to `output` followed by a newline.
///
/// # Errors
/// Any fitting error, and `InvalidInput`/`UnexpectedEof` if the query can't be read. Nothing is
/// written after the prompts when the query is rejected.
pub fn run<R, W>(dataset: &Dataset, input: &mut R, output: &mut W) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    let model = LinearRegression::fit(dataset.features().view(), dataset.targets().view())?;
    info!(
        "model fitted on {} samples, intercept {}",
        dataset.len(),
        model.intercept()
    );

    let query = read_query(input, output)?;
    let prediction = model.predict_one(&query.features())?;
    writeln!(output, "{prediction}")?;

    Ok(prediction)
}
