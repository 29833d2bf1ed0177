use std::io;

use anyhow::Result;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use loadgen::{HttpTransport, LoadConfig, LoadGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = LoadConfig::from_env()?;
    let rng = match config.seed() {
        Some(seed) => {
            info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut generator = LoadGenerator::new(config, HttpTransport::new(), rng);
    let mut stdout = io::stdout().lock();
    generator.run(&mut stdout).await?;

    Ok(())
}
