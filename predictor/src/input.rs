use std::io::{BufRead, Write};

use crate::error::{PredictorErr, Result};

/// A single `(height, weight)` pair read from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub height: f64,
    pub weight: f64,
}

impl Query {
    #[inline]
    pub fn features(&self) -> [f64; 2] {
        [self.height, self.weight]
    }
}

/// Prompts for the height and then the weight, parsing each as a float.
///
/// # Errors
/// `InvalidInput` on the first value that does not parse, `UnexpectedEof` if the input ends
/// before both values are read.
pub fn read_query<R, W>(input: &mut R, output: &mut W) -> Result<Query>
where
    R: BufRead,
    W: Write,
{
    let height = prompt(input, output, "cm", "height")?;
    let weight = prompt(input, output, "kg", "weight")?;

    Ok(Query { height, weight })
}

fn prompt<R, W>(input: &mut R, output: &mut W, label: &str, field: &'static str) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PredictorErr::UnexpectedEof { field });
    }

    let value = line.trim();
    parse_number(value).ok_or_else(|| PredictorErr::InvalidInput {
        field,
        value: value.to_string(),
    })
}

/// Parses a float, also accepting `_` as a digit separator (`1_000.5`) when it sits between two
/// digits.
fn parse_number(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });

    if !grouped {
        return None;
    }

    value.replace('_', "").parse().ok()
}
