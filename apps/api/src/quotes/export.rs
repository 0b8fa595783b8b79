//! Export Sink — append-only CSV log of produced quotes.

use std::fs::OpenOptions;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const HEADER: [&str; 3] = ["created_at", "type", "text"];

/// `created_at` label used for rows saved from the HTTP surface.
pub const WEB_LABEL: &str = "web";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteKind {
    Original,
    Famous,
}

impl QuoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteKind::Original => "original",
            QuoteKind::Famous => "famous",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: QuoteKind,
    pub text: String,
}

impl ExportRow {
    pub fn new(created_at: impl Into<String>, kind: QuoteKind, text: impl Into<String>) -> Self {
        Self {
            created_at: created_at.into(),
            kind,
            text: text.into(),
        }
    }
}

/// Appends `rows` to the CSV at `path`, creating parent directories and the
/// header row on first write. Existing rows are never touched.
///
/// Writes are not coordinated across processes.
pub fn append(rows: &[ExportRow], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer.write_record(HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!("Appended {} rows to {}", rows.len(), path.display());
    Ok(())
}
