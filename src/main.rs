use anyhow::Result;
use list_reversal::{demo, logger};
use std::io;

fn main() -> Result<()> {
    logger::init();
    tracing::info!("starting list reversal demonstration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)?;

    Ok(())
}
