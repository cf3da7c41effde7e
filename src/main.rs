use breakout_deploy::config::{BuildConfig, Cli};
use breakout_deploy::pipeline;
use breakout_deploy::tools::Toolchain;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = BuildConfig::from(Cli::parse());
    let tools = Toolchain::from_env();

    match pipeline::run(&config, &tools, Path::new(".")).await {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
