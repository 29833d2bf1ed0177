use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire predictor crate.
pub type Result<T> = std::result::Result<T, PredictorErr>;

/// The predictor's error type.
#[derive(Debug)]
pub enum PredictorErr {
    /// A prompted value did not parse as a floating point number.
    InvalidInput {
        field: &'static str,
        value: String,
    },
    /// The input stream ended before the value was read.
    UnexpectedEof {
        field: &'static str,
    },
    Io(io::Error),
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    /// The normal equations have no unique solution.
    SingularSystem,
}

impl Display for PredictorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorErr::InvalidInput { field, value } => {
                write!(f, "invalid {field}: {value:?} is not a number")
            }
            PredictorErr::UnexpectedEof { field } => {
                write!(f, "input ended before a value for {field} was given")
            }
            PredictorErr::Io(e) => write!(f, "io error: {e}"),
            PredictorErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            PredictorErr::EmptyDataset => write!(f, "cannot fit a model on an empty dataset"),
            PredictorErr::SingularSystem => {
                write!(f, "the features are linearly dependent, no unique fit exists")
            }
        }
    }
}

impl Error for PredictorErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictorErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PredictorErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
