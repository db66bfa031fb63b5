use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from original file name to formatted drawable document.
///
/// Insertion order is the order files were accepted, which is what a host UI
/// displays; it carries no other meaning. Keys are unique: converting two
/// files with the same name within one batch keeps the first position and
/// the last document (last write wins).
pub type ConversionResult = IndexMap<String, String>;

/// A file the batch orchestrator refused to convert.
///
/// Rejection is per file and never aborts the batch; the host decides how to
/// surface these (the original UI shows an alert per skipped file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedFile {
    /// Original file name.
    pub name: String,

    /// The declared content type that caused the rejection.
    pub mime_type: String,
}

/// Everything a conversion batch produced: converted drawables keyed by
/// source file name, plus the files that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// Formatted drawable documents, keyed by original file name.
    pub drawables: ConversionResult,

    /// Files rejected for carrying the wrong content type.
    pub rejected: Vec<RejectedFile>,
}

/// A downloadable artifact built from a batch: either a single drawable
/// document or a ZIP archive of all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    /// Suggested file name for the download.
    pub file_name: String,

    /// Content type the host should attach to the download.
    pub content_type: String,

    /// Raw payload bytes (UTF-8 XML text or ZIP data).
    pub bytes: Vec<u8>,
}
