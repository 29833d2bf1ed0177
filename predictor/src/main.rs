use std::io;

use anyhow::Result;

use predictor::Dataset;

fn main() -> Result<()> {
    env_logger::init();

    let dataset = Dataset::embedded();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    predictor::run(&dataset, &mut stdin, &mut stdout)?;
    Ok(())
}
