use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] csv::Error),

    #[error("Failed to flush history: {0}")]
    Flush(#[source] io::Error),
}

/// Single-column CSV: the header row, then one row per entry.
/// Commas, quotes and newlines inside entries are quoted.
pub fn history_csv(header: &str, entries: &[String]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([header])?;
    for entry in entries {
        writer.write_record([entry])?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))
}

pub fn export_history(path: &Path, header: &str, entries: &[String]) -> Result<(), ExportError> {
    let bytes = history_csv(header, entries)?;
    fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Exported {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Dialogs on some platforms return the bare name the user typed
pub fn with_csv_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("csv");
    }
    path
}
