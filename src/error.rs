use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures the orchestrator detects itself. Everything an external tool
/// reports interactively (flash errors, debugger errors) is not intercepted
/// and simply becomes the process exit status.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("firmware compile failed ({status})")]
    Compile { status: ExitStatus },

    #[error("image conversion failed ({status})")]
    Convert { status: ExitStatus },

    #[error("raw binary not found at {}; build it first or drop --no-build", .0.display())]
    MissingArtifact(PathBuf),

    #[error("failed to launch {tool}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}
