use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::infra::export::csv::{flatten_all, render_csv};
use crate::usecase::ports::export::{ExportError, ExportSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// `<prefix>-MMDD` for today's local date.
pub fn default_export_name(prefix: &str) -> String {
    export_name_for(prefix, Local::now().date_naive())
}

pub fn export_name_for(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}", date.format("%m%d"))
}

pub struct ExportService {
    sink: Arc<dyn ExportSink>,
}

impl ExportService {
    pub fn new(sink: Arc<dyn ExportSink>) -> Self {
        Self { sink }
    }

    /// Flattens `data`, renders it as CSV and hands it to the sink as
    /// `<filename>.csv`. Failures are returned as-is, never retried.
    pub fn export_to_csv<T: Serialize>(
        &self,
        data: &[T],
        filename: &str,
    ) -> Result<ExportOutcome, ExportError> {
        let table = flatten_all(data).map_err(|err| ExportError::Encode(format!("{err:#}")))?;
        let payload = render_csv(&table).map_err(|err| ExportError::Encode(format!("{err:#}")))?;

        match self.sink.deliver(filename, &payload) {
            Ok(path) => {
                info!(
                    path = %path.display(),
                    rows = table.rows.len(),
                    columns = table.columns.len(),
                    "csv export written"
                );
                Ok(ExportOutcome {
                    path,
                    rows: table.rows.len(),
                    columns: table.columns.len(),
                })
            }
            Err(err) => {
                warn!(filename, error = %err, "csv export failed");
                Err(err)
            }
        }
    }
}
