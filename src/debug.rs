use crate::config::{BuildConfig, DEBUG_CFG};
use crate::error::StageError;
use crate::tools::Toolchain;
use anyhow::Result;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;

const REMOTE_ADDR: &str = ":3333";

/// Strategy (a): spawn an OpenOCD debug server and a GDB client concurrently,
/// then wait for BOTH to exit. There is no readiness handshake between the
/// two; if GDB races ahead of the server the user re-issues the connect
/// command by hand. Both sessions are interactive and terminated by the user.
pub async fn spawn_session(
    tools: &Toolchain,
    config: &BuildConfig,
    root: &Path,
) -> Result<ExitStatus> {
    let elf = root.join(config.elf_path());

    tracing::info!("starting OpenOCD debug server ({})", DEBUG_CFG);

    // The server gets its own shell so it survives as an interactive console
    // alongside GDB.
    let mut server = Command::new("sh")
        .arg("-c")
        .arg(r#"exec "$0" "$@""#)
        .arg(&tools.openocd)
        .arg("-f")
        .arg(DEBUG_CFG)
        .current_dir(root)
        .spawn()
        .map_err(|e| StageError::Spawn {
            tool: "openocd".to_string(),
            source: e,
        })?;

    tracing::info!("attaching GDB to {}", REMOTE_ADDR);

    let mut client = Command::new(&tools.gdb)
        .arg(&elf)
        .arg("-ex")
        .arg(format!("target extended-remote {}", REMOTE_ADDR))
        .current_dir(root)
        .spawn()
        .map_err(|e| StageError::Spawn {
            tool: "gdb".to_string(),
            source: e,
        })?;

    // Wait for both children in either order before handing control back.
    let (server_status, client_status) = tokio::join!(server.wait(), client.wait());
    let server_status = server_status?;
    let client_status = client_status?;

    tracing::debug!(
        "debug session ended (server {}, client {})",
        server_status,
        client_status
    );

    Ok(client_status)
}

/// Strategy (b): attach GDB directly to a probe over the named port, no
/// server process. The probe speaks the remote protocol itself; the fixed
/// startup sequence scans the JTAG chain and attaches to the first device.
pub async fn attach_session(
    tools: &Toolchain,
    config: &BuildConfig,
    root: &Path,
    port: &str,
) -> Result<ExitStatus> {
    let elf = root.join(config.elf_path());

    tracing::info!("attaching GDB over {}", port);

    let status = Command::new(&tools.gdb)
        .arg(&elf)
        .arg("-ex")
        .arg(format!("target extended-remote {}", port))
        .arg("-ex")
        .arg("monitor jtag_scan")
        .arg("-ex")
        .arg("attach 1")
        .current_dir(root)
        .status()
        .await
        .map_err(|e| StageError::Spawn {
            tool: "gdb".to_string(),
            source: e,
        })?;

    Ok(status)
}
