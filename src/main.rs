use anyhow::Context;
use demo_kit::driver;
use demo_kit::utils::logger;

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    driver::run().context("failed to write driver output")?;
    Ok(())
}
