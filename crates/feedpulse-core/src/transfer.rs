//! Import / Export
//!
//! The single "perform import/export" operation behind the transfer
//! wizards. `SimulatedTransfer` checks the request, waits, and reports
//! success without touching any file; a real implementation plugs in behind
//! the same trait.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FeedbackField, FeedbackItem};
use crate::filter::StatusFilter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("no file selected")]
    MissingFile,

    #[error("{0} is empty")]
    EmptyFile(String),

    #[error("no column is mapped to {0}")]
    UnmappedField(FeedbackField),

    #[error("nothing matches the export options")]
    NothingToExport,
}

/// Where imported feedback comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportSource {
    Csv,
    Excel,
    Email,
    Json,
    Xml,
}

impl ImportSource {
    pub const ALL: [ImportSource; 5] = [
        ImportSource::Csv,
        ImportSource::Excel,
        ImportSource::Email,
        ImportSource::Json,
        ImportSource::Xml,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImportSource::Csv => "CSV file",
            ImportSource::Excel => "Excel file",
            ImportSource::Email => "Email thread",
            ImportSource::Json => "JSON data",
            ImportSource::Xml => "XML data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
    Json,
    Xml,
    DataFeed,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Csv,
        ExportFormat::Excel,
        ExportFormat::Pdf,
        ExportFormat::Json,
        ExportFormat::Xml,
        ExportFormat::DataFeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV spreadsheet",
            ExportFormat::Excel => "Excel spreadsheet",
            ExportFormat::Pdf => "PDF report",
            ExportFormat::Json => "JSON",
            ExportFormat::Xml => "XML",
            ExportFormat::DataFeed => "Data feed",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Xml => "xml",
            ExportFormat::DataFeed => "jsonl",
        }
    }
}

/// The file the user picked; contents are never read
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
}

/// Source column → feedback field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldMapping {
    entries: Vec<(String, FeedbackField)>,
}

impl FieldMapping {
    /// Every field mapped from a column of the same name
    pub fn identity() -> Self {
        Self {
            entries: FeedbackField::ALL
                .into_iter()
                .map(|field| (field.as_str().to_string(), field))
                .collect(),
        }
    }

    /// Map `column` to `field`, replacing any earlier column for that field
    pub fn map(&mut self, column: impl Into<String>, field: FeedbackField) -> &mut Self {
        self.entries.retain(|(_, mapped)| *mapped != field);
        self.entries.push((column.into(), field));
        self
    }

    pub fn unmap(&mut self, field: FeedbackField) {
        self.entries.retain(|(_, mapped)| *mapped != field);
    }

    pub fn column_for(&self, field: FeedbackField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, mapped)| *mapped == field)
            .map(|(column, _)| column.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub source: ImportSource,
    pub file: FileHandle,
    pub mapping: FieldMapping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub source: ImportSource,
    pub file_name: String,
    pub mapped_fields: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub status: StatusFilter,
    pub include_content: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            include_content: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub options: ExportOptions,
    /// Snapshot of the collection when the export was requested
    pub items: Vec<FeedbackItem>,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub format: ExportFormat,
    pub file_name: String,
    pub record_count: usize,
}

/// Suspends for a while; lets the UI use browser timers and tests use none
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Sleeper for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Performs imports and exports
#[async_trait(?Send)]
pub trait TransferService {
    async fn request_import(&self, request: ImportRequest) -> Result<ImportResult, TransferError>;

    async fn request_export(&self, request: ExportRequest) -> Result<ExportResult, TransferError>;
}

pub struct SimulatedTransfer<Z> {
    sleeper: Z,
    delay: Duration,
}

impl<Z: Sleeper> SimulatedTransfer<Z> {
    pub fn new(sleeper: Z, delay: Duration) -> Self {
        Self { sleeper, delay }
    }
}

fn check_import(request: &ImportRequest) -> Result<(), TransferError> {
    if request.file.name.trim().is_empty() {
        return Err(TransferError::MissingFile);
    }
    if request.file.size_bytes == 0 {
        return Err(TransferError::EmptyFile(request.file.name.clone()));
    }
    for field in FeedbackField::REQUIRED {
        if request.mapping.column_for(field).is_none() {
            return Err(TransferError::UnmappedField(field));
        }
    }
    Ok(())
}

/// `feedpulse-export-YYYYMMDD.<ext>`
pub fn export_file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!("feedpulse-export-{}.{}", at.format("%Y%m%d"), format.extension())
}

#[async_trait(?Send)]
impl<Z: Sleeper> TransferService for SimulatedTransfer<Z> {
    async fn request_import(&self, request: ImportRequest) -> Result<ImportResult, TransferError> {
        check_import(&request)?;
        log::info!(
            "Importing {} ({}) from {}",
            request.file.name,
            request.file.size_bytes,
            request.source.label()
        );
        self.sleeper.sleep(self.delay).await;

        Ok(ImportResult {
            source: request.source,
            file_name: request.file.name,
            mapped_fields: request.mapping.len(),
        })
    }

    async fn request_export(&self, request: ExportRequest) -> Result<ExportResult, TransferError> {
        let record_count = request
            .items
            .iter()
            .filter(|item| request.options.status.matches(item.status))
            .count();
        if record_count == 0 {
            return Err(TransferError::NothingToExport);
        }
        log::info!("Exporting {} records as {}", record_count, request.format.label());
        self.sleeper.sleep(self.delay).await;

        Ok(ExportResult {
            format: request.format,
            file_name: export_file_name(request.format, request.requested_at),
            record_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed_feedbacks, FeedbackStatus};
    use chrono::TimeZone;

    fn transfer() -> SimulatedTransfer<NoDelay> {
        SimulatedTransfer::new(NoDelay, Duration::from_millis(1500))
    }

    fn csv_import() -> ImportRequest {
        ImportRequest {
            source: ImportSource::Csv,
            file: FileHandle {
                name: "feedback.csv".to_string(),
                size_bytes: 2048,
            },
            mapping: FieldMapping::identity(),
        }
    }

    /// Sleeps on the tokio clock so the delay is observable
    struct TokioSleeper;

    #[async_trait(?Send)]
    impl Sleeper for TokioSleeper {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    #[tokio::test]
    async fn test_import_succeeds() {
        let result = transfer().request_import(csv_import()).await.unwrap();
        assert_eq!(result.file_name, "feedback.csv");
        assert_eq!(result.source, ImportSource::Csv);
        assert_eq!(result.mapped_fields, FeedbackField::ALL.len());
    }

    #[tokio::test]
    async fn test_import_needs_a_file() {
        let mut request = csv_import();
        request.file = FileHandle::default();
        assert_eq!(transfer().request_import(request).await, Err(TransferError::MissingFile));
    }

    #[tokio::test]
    async fn test_import_needs_content_mapping() {
        let mut request = csv_import();
        request.mapping.unmap(FeedbackField::Content);
        assert_eq!(
            transfer().request_import(request).await,
            Err(TransferError::UnmappedField(FeedbackField::Content))
        );
    }

    #[tokio::test]
    async fn test_import_rejects_empty_file() {
        let mut request = csv_import();
        request.file.size_bytes = 0;
        assert!(matches!(
            transfer().request_import(request).await,
            Err(TransferError::EmptyFile(_))
        ));
    }

    #[tokio::test]
    async fn test_export_counts_filtered_items() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let request = ExportRequest {
            format: ExportFormat::Csv,
            options: ExportOptions {
                status: StatusFilter::Only(FeedbackStatus::New),
                include_content: false,
            },
            items: seed_feedbacks(at),
            requested_at: at,
        };
        let result = transfer().request_export(request).await.unwrap();
        assert_eq!(result.record_count, 2);
        assert_eq!(result.file_name, "feedpulse-export-20250601.csv");
    }

    #[tokio::test]
    async fn test_export_with_no_matches_fails() {
        let request = ExportRequest {
            format: ExportFormat::Pdf,
            options: ExportOptions {
                status: StatusFilter::Only(FeedbackStatus::Resolved),
                ..ExportOptions::default()
            },
            items: seed_feedbacks(Utc::now()),
            requested_at: Utc::now(),
        };
        assert_eq!(transfer().request_export(request).await, Err(TransferError::NothingToExport));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_waits_for_delay() {
        let transfer = SimulatedTransfer::new(TokioSleeper, Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        transfer.request_import(csv_import()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn test_mapping_replaces_column() {
        let mut mapping = FieldMapping::default();
        mapping.map("Company", FeedbackField::ClientName);
        mapping.map("Customer", FeedbackField::ClientName);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.column_for(FeedbackField::ClientName), Some("Customer"));
    }
}
