// file: src/exporter/json.rs
// description: json rendering and timestamped export files for search responses

use crate::error::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportEnvelope<'a, T: Serialize> {
    pub exported_at: String,
    pub kind: &'a str,
    pub query: &'a str,
    pub total: usize,
    pub records: &'a [T],
}

/// Renders records as the JSON array handed to the transport layer.
pub fn render<T: Serialize>(records: &[T], pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(rendered)
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `<kind>_<YYYYmmdd>_<HHMMSS>.json` and returns its path.
    pub fn export<T: Serialize>(
        &self,
        kind: &str,
        query: &str,
        records: &[T],
        pretty: bool,
    ) -> Result<PathBuf> {
        let now = Utc::now();
        let envelope = ExportEnvelope {
            exported_at: now.to_rfc3339(),
            kind,
            query,
            total: records.len(),
            records,
        };

        let body = if pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };

        let path = self
            .output_dir
            .join(format!("{}_{}.json", kind, now.format("%Y%m%d_%H%M%S")));
        fs::write(&path, body)?;

        info!("Exported {} {} records to {}", records.len(), kind, path.display());
        Ok(path)
    }
}
