//! Deployment orchestrator for the breakout firmware.
//!
//! Turns the compiled ELF into a raw flashable binary, reports its size, and
//! optionally programs the board over OpenOCD or launches an interactive GDB
//! session. The compiler, OpenOCD and GDB are external tools; this crate only
//! sequences them.

pub mod build;
pub mod config;
pub mod debug;
pub mod error;
pub mod flash;
pub mod pipeline;
pub mod size;
pub mod tools;
