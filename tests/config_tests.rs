use breakout_deploy::config::{BuildConfig, Cli, Profile, TARGET};
use breakout_deploy::size::format_kib;
use clap::Parser;
use std::path::PathBuf;

fn resolve(args: &[&str]) -> BuildConfig {
    BuildConfig::from(Cli::try_parse_from(args).unwrap())
}

#[test]
fn test_defaults() {
    let config = resolve(&["breakout-deploy"]);

    assert_eq!(config.bin_name, "breakout");
    assert_eq!(config.profile, Profile::Release);
    assert_eq!(config.com_port, None);
    assert_eq!(config.debug_port, None);
    assert!(!config.skip_build);
    assert!(!config.flash);
    assert!(!config.debug_oocd);
    assert_eq!(config.debug_channel(), None);
}

#[test]
fn test_positional_ports() {
    let config = resolve(&["breakout-deploy", "COM3", "COM4"]);

    assert_eq!(config.com_port.as_deref(), Some("COM3"));
    assert_eq!(config.debug_port.as_deref(), Some("COM4"));
    // the probe port wins when both are named
    assert_eq!(config.debug_channel(), Some("COM4"));
}

#[test]
fn test_com_port_alone_selects_debug_channel() {
    let config = resolve(&["breakout-deploy", "/dev/ttyACM0"]);
    assert_eq!(config.debug_channel(), Some("/dev/ttyACM0"));
}

#[test]
fn test_all_flags() {
    let config = resolve(&[
        "breakout-deploy",
        "--no-build",
        "--flash",
        "--debug-build",
        "--debug-oocd",
        "--bin-name",
        "blinky",
    ]);

    assert!(config.skip_build);
    assert!(config.flash);
    assert!(config.debug_oocd);
    assert_eq!(config.profile, Profile::Debug);
    assert_eq!(config.bin_name, "blinky");
}

#[test]
fn test_derived_artifact_paths() {
    let release = resolve(&["breakout-deploy"]);
    assert_eq!(
        release.elf_path(),
        PathBuf::from(format!("target/{}/release/breakout", TARGET))
    );
    assert_eq!(release.bin_path(), PathBuf::from("breakout.bin"));

    let debug = resolve(&["breakout-deploy", "--debug-build", "--bin-name", "blinky"]);
    assert_eq!(
        debug.elf_path(),
        PathBuf::from(format!("target/{}/debug/blinky", TARGET))
    );
    assert_eq!(debug.bin_path(), PathBuf::from("blinky.bin"));
}

#[test]
fn test_format_kib_exact_values() {
    assert_eq!(format_kib(45312), "44.250 KiB");
    assert_eq!(format_kib(0), "0.000 KiB");
    assert_eq!(format_kib(1024), "1.000 KiB");
    assert_eq!(format_kib(1536), "1.500 KiB");
}

#[test]
fn test_format_kib_rounds_to_three_digits() {
    // 1023 / 1024 = 0.99902...
    assert_eq!(format_kib(1023), "0.999 KiB");
    // 45313 / 1024 = 44.25097...
    assert_eq!(format_kib(45313), "44.251 KiB");
}

#[test]
fn test_format_kib_thousands_separators() {
    assert_eq!(format_kib(10_485_760), "10,240.000 KiB");
    assert_eq!(format_kib(1_073_741_824), "1,048,576.000 KiB");
}
