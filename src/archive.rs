//! Packages converted drawables into downloadable artifacts.
//!
//! A batch with exactly one converted file exports as the raw XML document;
//! anything more becomes a ZIP archive with one entry per file. Archives
//! are built in memory so the same code serves both the wasm host (which
//! has no filesystem) and native embeddings.

use crate::errors::{ConverterError, Result};
use crate::models::batch::{ConversionResult, ExportPayload};
use crate::naming::output_file_name;
use log::debug;
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

/// Fixed name offered for a multi-file download.
pub const ARCHIVE_FILE_NAME: &str = "vector_drawables.zip";

/// Content type of a single exported drawable document.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// Content type of a multi-file archive export.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// Builds an in-memory ZIP archive with one entry per converted drawable,
/// named by the output naming rule, in result-map order.
///
/// # Errors
/// Returns `ConverterError::Zip` if the writer fails, or
/// `ConverterError::Io` on a write into the in-memory buffer.
pub fn package_archive(drawables: &ConversionResult) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<()> = FileOptions::default();

    for (source_name, document) in drawables {
        let entry_name = output_file_name(source_name);
        debug!("Adding {entry_name} to archive");
        zip.start_file(entry_name, options)?;
        zip.write_all(document.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Builds the download payload for a batch: the raw document for a single
/// converted file, a ZIP archive for several.
///
/// # Errors
/// Returns `ConverterError::InvalidInput` when the result map is empty
/// (the host should not offer a download with nothing converted), or an
/// archive error from [`package_archive`].
pub fn export_batch(drawables: &ConversionResult) -> Result<ExportPayload> {
    match drawables.iter().next() {
        None => Err(ConverterError::InvalidInput(
            "no converted drawables to export".to_string(),
        )),
        Some((source_name, document)) if drawables.len() == 1 => Ok(ExportPayload {
            file_name: output_file_name(source_name),
            content_type: XML_CONTENT_TYPE.to_string(),
            bytes: document.clone().into_bytes(),
        }),
        Some(_) => Ok(ExportPayload {
            file_name: ARCHIVE_FILE_NAME.to_string(),
            content_type: ZIP_CONTENT_TYPE.to_string(),
            bytes: package_archive(drawables)?,
        }),
    }
}

/// Joins every formatted document with a blank line, in result-map order.
/// This is the string the host places on the clipboard for "copy all".
pub fn combined_clipboard_text(drawables: &ConversionResult) -> String {
    drawables
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_result() -> ConversionResult {
        let mut drawables = ConversionResult::new();
        drawables.insert("arrow-up.svg".to_string(), "<vector>up</vector>".to_string());
        drawables.insert("arrow-down.svg".to_string(), "<vector>down</vector>".to_string());
        drawables
    }

    #[test]
    fn archive_contains_one_correctly_named_entry_per_drawable() {
        let bytes = package_archive(&sample_result()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("ic_arrow_up.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<vector>up</vector>");

        content.clear();
        archive
            .by_name("ic_arrow_down.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<vector>down</vector>");
    }

    #[test]
    fn single_file_exports_as_raw_xml() {
        let mut drawables = ConversionResult::new();
        drawables.insert("plain.svg".to_string(), "<vector/>".to_string());

        let payload = export_batch(&drawables).unwrap();
        assert_eq!(payload.file_name, "ic_plain.xml");
        assert_eq!(payload.content_type, XML_CONTENT_TYPE);
        assert_eq!(payload.bytes, b"<vector/>");
    }

    #[test]
    fn multiple_files_export_as_zip() {
        let payload = export_batch(&sample_result()).unwrap();
        assert_eq!(payload.file_name, ARCHIVE_FILE_NAME);
        assert_eq!(payload.content_type, ZIP_CONTENT_TYPE);
        assert!(ZipArchive::new(Cursor::new(payload.bytes)).is_ok());
    }

    #[test]
    fn empty_result_map_is_an_invalid_export() {
        let err = export_batch(&ConversionResult::new()).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidInput(_)));
    }

    #[test]
    fn clipboard_text_joins_documents_with_blank_lines() {
        assert_eq!(
            combined_clipboard_text(&sample_result()),
            "<vector>up</vector>\n\n<vector>down</vector>"
        );
        assert_eq!(combined_clipboard_text(&ConversionResult::new()), "");
    }
}
