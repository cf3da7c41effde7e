use crate::config::BuildConfig;
use crate::tools::Toolchain;
use crate::{build, debug, flash, size};
use anyhow::Result;
use std::path::Path;
use std::process::ExitStatus;

/// Run the deployment pipeline in its fixed stage order: build, size report,
/// optional flash, optional debug session. Returns the process exit code:
/// that of the last external tool invoked after the build, or 0 when only the
/// size report ran. Build and conversion failures surface as errors and map
/// to exit code 1 in main.
pub async fn run(config: &BuildConfig, tools: &Toolchain, root: &Path) -> Result<i32> {
    if config.skip_build {
        // Caller-trusted contract: whatever binary is already on disk is used
        // as-is, with no freshness check.
        tracing::info!("build skipped, reusing {:?}", config.bin_path());
    } else {
        build::compile(tools, config, root).await?;
        build::convert(tools, config, root).await?;
    }

    let report = size::report(&root.join(config.bin_path())).await?;
    println!("{}: {}", config.bin_path().display(), report.display);

    let mut last_status: Option<ExitStatus> = None;

    if config.flash {
        last_status = Some(flash::program(tools, config, root).await?);
    }

    if config.debug_oocd {
        last_status = Some(debug::spawn_session(tools, config, root).await?);
    } else if let Some(port) = config.debug_channel() {
        last_status = Some(debug::attach_session(tools, config, root, port).await?);
    }

    Ok(last_status.map_or(0, |s| s.code().unwrap_or(1)))
}
