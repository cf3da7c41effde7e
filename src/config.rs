use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Instruction set / ABI of the breakout board MCU (ATSAMD21G, Cortex-M0+).
pub const TARGET: &str = "thumbv6m-none-eabi";

pub const DEFAULT_BIN_NAME: &str = "breakout";

/// OpenOCD script driving the actual programming sequence (reset, write, verify).
pub const FLASH_CFG: &str = "openocd-flash.cfg";

/// OpenOCD script bringing up the probe as a GDB debug server.
pub const DEBUG_CFG: &str = "openocd-debug.cfg";

#[derive(Parser, Debug)]
#[command(name = "breakout-deploy")]
#[command(about = "Build, flash and debug the breakout firmware", long_about = None)]
pub struct Cli {
    /// Serial port of the board; selects a direct GDB attach unless --debug-oocd is given
    pub com_port: Option<String>,

    /// Debug probe port for the direct GDB attach (falls back to COM_PORT)
    pub debug_port: Option<String>,

    /// Skip compile and conversion, reuse the existing raw binary
    #[arg(long)]
    pub no_build: bool,

    /// Base name of the firmware binary
    #[arg(long, default_value = DEFAULT_BIN_NAME)]
    pub bin_name: String,

    /// Program the board with OpenOCD after the size report
    #[arg(long)]
    pub flash: bool,

    /// Build the debug profile instead of release
    #[arg(long)]
    pub debug_build: bool,

    /// Debug through a spawned OpenOCD server plus GDB (takes precedence over
    /// the direct attach)
    #[arg(long)]
    pub debug_oocd: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }
}

/// Effective parameters for one orchestrator run. Built once from the CLI,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub bin_name: String,
    pub profile: Profile,
    pub com_port: Option<String>,
    pub debug_port: Option<String>,
    pub skip_build: bool,
    pub flash: bool,
    pub debug_oocd: bool,
}

impl From<Cli> for BuildConfig {
    fn from(cli: Cli) -> Self {
        Self {
            bin_name: cli.bin_name,
            profile: if cli.debug_build {
                Profile::Debug
            } else {
                Profile::Release
            },
            com_port: cli.com_port,
            debug_port: cli.debug_port,
            skip_build: cli.no_build,
            flash: cli.flash,
            debug_oocd: cli.debug_oocd,
        }
    }
}

impl BuildConfig {
    /// ELF produced by the compile stage, relative to the project root. Only
    /// the debugger needs it (for symbols); it is never flashed itself.
    pub fn elf_path(&self) -> PathBuf {
        ["target", TARGET, self.profile.dir_name(), &self.bin_name]
            .iter()
            .collect()
    }

    /// Raw flashable binary, relative to the project root.
    pub fn bin_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.bin", self.bin_name))
    }

    /// Port used by the direct-attach debug strategy, if one was named.
    pub fn debug_channel(&self) -> Option<&str> {
        self.debug_port.as_deref().or(self.com_port.as_deref())
    }
}
