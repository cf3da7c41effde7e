use crate::error::StageError;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub bytes: u64,
    pub display: String,
}

/// Measure the raw binary. Fails with a missing-artifact error when the file
/// is not there, which is the expected outcome of --no-build without a prior
/// successful build.
pub async fn report(bin: &Path) -> Result<SizeReport> {
    if !bin.exists() {
        return Err(StageError::MissingArtifact(bin.to_path_buf()).into());
    }

    let metadata = fs::metadata(bin).await?;
    let bytes = metadata.len();

    Ok(SizeReport {
        bytes,
        display: format_kib(bytes),
    })
}

/// Render a byte count as kibibytes with thousands separators and exactly
/// three decimal digits, e.g. 45312 -> "44.250 KiB".
pub fn format_kib(len: u64) -> String {
    let fixed = format!("{:.3}", len as f64 / 1024.0);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{} KiB", grouped, frac_part)
}
