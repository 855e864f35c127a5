use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::usecase::ports::export::{ExportError, ExportSink};

/// Writes exports as `<dir>/<name>.csv`.
pub struct FsExportSink {
    pub dir: PathBuf,
}

impl FsExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for FsExportSink {
    fn deliver(&self, file_name: &str, payload: &str) -> Result<PathBuf, ExportError> {
        write_export_file(&self.dir, file_name, payload)
            .map_err(|err| ExportError::Deliver(format!("{err:#}")))
    }
}

/// File name for an export: path separators replaced, `.csv` appended unless
/// already present, `export` when nothing usable is left.
pub fn csv_file_name(base: &str) -> String {
    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect();
    let cleaned = if cleaned.is_empty() {
        "export".to_string()
    } else {
        cleaned
    };

    if cleaned.to_ascii_lowercase().ends_with(".csv") {
        cleaned
    } else {
        format!("{cleaned}.csv")
    }
}

pub fn write_export_file(dir: &Path, file_name: &str, payload: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export dir: {}", dir.display()))?;
    let path = dir.join(csv_file_name(file_name));
    std::fs::write(&path, payload)
        .with_context(|| format!("failed to write export: {}", path.display()))?;
    Ok(path)
}
