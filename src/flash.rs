use crate::config::{BuildConfig, FLASH_CFG};
use crate::error::StageError;
use crate::tools::Toolchain;
use anyhow::Result;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;

/// Program the board over OpenOCD. The flash config script does the actual
/// sequencing (reset, write, verify) against the BINFILE variable set here.
/// The exit status is returned but deliberately not checked; OpenOCD reports
/// its own failures on the console.
pub async fn program(tools: &Toolchain, config: &BuildConfig, root: &Path) -> Result<ExitStatus> {
    let bin = root.join(config.bin_path());

    tracing::info!("programming board from {:?} via {}", bin, FLASH_CFG);

    let status = Command::new(&tools.openocd)
        .arg("-d2")
        .arg("-c")
        .arg(format!("set BINFILE {}", bin.display()))
        .arg("-f")
        .arg(FLASH_CFG)
        .current_dir(root)
        .status()
        .await
        .map_err(|e| StageError::Spawn {
            tool: "openocd".to_string(),
            source: e,
        })?;

    Ok(status)
}
