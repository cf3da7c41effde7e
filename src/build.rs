use crate::config::{BuildConfig, Profile, TARGET};
use crate::error::StageError;
use crate::tools::Toolchain;
use anyhow::Result;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Compile the firmware for the board target. A non-zero compiler status
/// aborts the whole pipeline.
pub async fn compile(tools: &Toolchain, config: &BuildConfig, root: &Path) -> Result<()> {
    let mut cmd = Command::new(&tools.cargo);
    cmd.arg("build").arg("--target").arg(TARGET);
    if config.profile == Profile::Release {
        cmd.arg("--release");
    }

    tracing::info!(
        "compiling {} ({} profile)",
        config.bin_name,
        config.profile.dir_name()
    );

    let output = cmd
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| StageError::Spawn {
            tool: "cargo".to_string(),
            source: e,
        })?;

    if !output.status.success() {
        tracing::error!(
            "compile stage failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
        return Err(StageError::Compile {
            status: output.status,
        }
        .into());
    }

    Ok(())
}

/// Strip the ELF down to the raw flashable binary. Overwrites any previous
/// binary at the derived path; a non-zero status aborts like a compile failure.
pub async fn convert(tools: &Toolchain, config: &BuildConfig, root: &Path) -> Result<()> {
    let elf = root.join(config.elf_path());
    let bin = root.join(config.bin_path());

    tracing::debug!("objcopy -O binary {:?} -> {:?}", elf, bin);

    let output = Command::new(&tools.objcopy)
        .arg("-O")
        .arg("binary")
        .arg(&elf)
        .arg(&bin)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| StageError::Spawn {
            tool: "objcopy".to_string(),
            source: e,
        })?;

    if !output.status.success() {
        tracing::error!(
            "image conversion failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
        return Err(StageError::Convert {
            status: output.status,
        }
        .into());
    }

    Ok(())
}
