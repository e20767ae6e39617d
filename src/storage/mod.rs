// src/storage/mod.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::record::{field, ParsedRecord};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory for one document kind: /base_dir/<kind>/
    pub fn kind_dir(&self, record: &ParsedRecord) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(record.kind().label());

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        Ok(target_dir)
    }

    /// Saves the record as pretty JSON under `<kind>/<stem>.json`
    pub fn save_record(&self, record: &ParsedRecord, stem: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.kind_dir(record)?.join(format!("{}.json", stem));

        let json = serde_json::to_string_pretty(record)?;
        let mut file = fs::File::create(&file_path).map_err(StorageError::IoError)?;
        file.write_all(json.as_bytes()).map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves extraction metadata next to the record as `<stem>_meta.json`
    pub fn save_record_metadata(
        &self,
        record: &ParsedRecord,
        stem: &str,
        source: &Path,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.kind_dir(record)?.join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "kind": record.kind(),
            "registry": record.kind().registry_code(),
            "source": source.display().to_string(),
            "reg_number": record.text(field::REG_NUMBER).unwrap_or_default(),
            "field_count": record.len(),
            "empty_field_count": record.empty_field_count(),
            "amendment_count": record.amendments().map_or(0, |history| history.len()),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
