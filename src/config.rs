use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};

use crate::domain::table::filter::DEFAULT_SEARCH_DEBOUNCE;
use crate::domain::table::pagination::DEFAULT_PAGE_SIZE;

pub const EXPORT_DIR_ENV: &str = "ESTATE_EXPORT_DIR";
pub const SEARCH_DEBOUNCE_ENV: &str = "ESTATE_SEARCH_DEBOUNCE_MS";
pub const LOG_ENV: &str = "ESTATE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub export_dir: PathBuf,
    pub search_debounce: Duration,
    pub page_size: usize,
}

impl AppConfig {
    /// Resolves the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let export_dir = match lookup(EXPORT_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_export_dir()?,
        };

        let search_debounce = match lookup(SEARCH_DEBOUNCE_ENV) {
            Some(raw) => {
                let millis: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{SEARCH_DEBOUNCE_ENV} must be milliseconds: {raw}"))?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_SEARCH_DEBOUNCE,
        };

        Ok(Self {
            export_dir,
            search_debounce,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "estate-desk")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

/// The user's download folder, falling back to an `exports` dir under the
/// application data dir.
pub fn default_export_dir() -> Result<PathBuf> {
    if let Some(download_dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf)) {
        return Ok(download_dir);
    }
    Ok(project_dirs()?.data_local_dir().join("exports"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
