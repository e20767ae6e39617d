// src/batch.rs
//! Concurrent parsing of saved registry pages.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::document::DocumentKind;
use crate::extractors::parse_document;
use crate::record::ParsedRecord;
use crate::utils::error::AppError;

/// Result of parsing one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Page markup as read, empty if the file could not be read.
    pub html: String,
    pub result: Result<ParsedRecord, AppError>,
}

impl FileOutcome {
    /// File name without extension, used to name output files.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "record".to_string())
    }
}

/// Parses `paths` as documents of `kind`, at most `jobs` at a time.
///
/// Outcomes come back in input order whatever order the parses finish in.
pub async fn parse_files(paths: Vec<PathBuf>, kind: DocumentKind, jobs: usize) -> Vec<FileOutcome> {
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    tracing::debug!("Parsing {} files as {} with {} jobs", paths.len(), kind, jobs.max(1));

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let semaphore = Arc::clone(&semaphore);
            let task_path = path.clone();
            let handle = tokio::spawn(async move {
                match semaphore.acquire_owned().await {
                    Ok(_permit) => parse_file(task_path, kind).await,
                    Err(e) => FileOutcome {
                        path: task_path,
                        html: String::new(),
                        result: Err(AppError::Processing(format!("Job limiter closed: {}", e))),
                    },
                }
            });
            (path, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => FileOutcome {
                path,
                html: String::new(),
                result: Err(AppError::Processing(format!("Parse task failed: {}", e))),
            },
        };
        outcomes.push(outcome);
    }
    outcomes
}

/// Reads and parses one file; the parse itself runs on the blocking pool.
pub async fn parse_file(path: PathBuf, kind: DocumentKind) -> FileOutcome {
    let html = match read_page(&path).await {
        Ok(html) => html,
        Err(e) => {
            return FileOutcome { path, html: String::new(), result: Err(e) };
        }
    };

    let task_html = html.clone();
    let result = tokio::task::spawn_blocking(move || parse_document(&task_html, kind))
        .await
        .map_err(|e| AppError::Processing(format!("Parse task failed: {}", e)))
        .and_then(|parsed| parsed.map_err(AppError::from));

    FileOutcome { path, html, result }
}

async fn read_page(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await?;
    match String::from_utf8(bytes) {
        Ok(html) => Ok(html),
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
