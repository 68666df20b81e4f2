//! Plain-text report rendering and export.
//!
//! The export writes through a named temp file in the target directory and
//! persists it in one step, so a failed export never leaves partial output
//! at the target path.

use itertools::Itertools;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::SubnetError;
use crate::models::SubnetReport;
use crate::output::terminal::pad_label;

/// Render the report in a fixed line-per-field layout.
pub fn render_report(report: &SubnetReport) -> String {
    let fields = report.fields();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let now = chrono::Local::now();
    let header = format!(
        "--- IP Subnet Calculation ---\nGenerated on: {}\n{}\n",
        now.format("%Y-%m-%d %H:%M:%S"),
        "-".repeat(40)
    );

    let body = fields
        .iter()
        .map(|(label, value)| format!("{} : {}", pad_label(label, width), value))
        .join("\n");

    format!("{header}{body}\n")
}

/// Write the rendered report to `path`.
///
/// Refuses to overwrite an existing file unless `overwrite` is set; consent
/// comes from the calling shell.
pub fn export_report(
    report: &SubnetReport,
    path: &Path,
    overwrite: bool,
) -> Result<(), SubnetError> {
    log::info!("#Start export_report() path={}", path.display());

    let export_failed = |source: io::Error| SubnetError::ExportFailed {
        path: path.to_path_buf(),
        source,
    };

    if path.exists() && !overwrite {
        log::warn!("Refusing to overwrite existing file: {}", path.display());
        return Err(export_failed(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "file already exists and overwriting was not requested",
        )));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(export_failed)?;
    file.write_all(render_report(report).as_bytes())
        .map_err(export_failed)?;
    file.persist(path).map_err(|e| export_failed(e.error))?;

    log::info!("Report written to {}", path.display());
    Ok(())
}
