use std::env;
use std::ffi::OsString;

/// Locations of the external tools the pipeline drives. Resolved once per run
/// and injected into every stage, so tests can point the pipeline at stub
/// executables.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub cargo: OsString,
    pub objcopy: OsString,
    pub openocd: OsString,
    pub gdb: OsString,
}

impl Toolchain {
    /// Environment overrides first (`CARGO`, `OBJCOPY`, `OPENOCD`, `GDB`),
    /// otherwise the well-known names resolved through PATH.
    pub fn from_env() -> Self {
        Self {
            cargo: resolve("CARGO", "cargo"),
            objcopy: resolve("OBJCOPY", "arm-none-eabi-objcopy"),
            openocd: resolve("OPENOCD", "openocd"),
            gdb: resolve("GDB", "arm-none-eabi-gdb"),
        }
    }
}

fn resolve(var: &str, default: &str) -> OsString {
    env::var_os(var)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| OsString::from(default))
}
