//! Native-only helpers for building input files from the filesystem.
//!
//! In the browser, the host hands the crate already-read `File` objects
//! complete with a declared MIME type. Native embeddings (tests, example
//! binaries, scripted use) get the equivalent here: paths in, in-memory
//! [`SvgInputFile`]s out, with the content type guessed from the file
//! extension the way a browser would populate `File.type`.

use crate::errors::{ConverterError, Result};
use crate::models::input::{SvgInputFile, SVG_MIME_TYPE};
use std::fs;
use std::path::Path;

/// Content type assigned to files without a recognized extension, which the
/// batch orchestrator will reject.
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Guesses a declared content type from the file extension.
fn guess_mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => SVG_MIME_TYPE,
        _ => UNKNOWN_MIME_TYPE,
    }
}

/// Reads one file into an [`SvgInputFile`].
///
/// # Arguments
/// * `path` - Path to the file to read.
///
/// # Errors
/// Returns `ConverterError::InvalidInput` if the path has no file name
/// component, or `ConverterError::Io` if the file cannot be read as UTF-8
/// text.
pub fn load_input_file(path: &Path) -> Result<SvgInputFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            ConverterError::InvalidInput(format!("{} has no file name", path.display()))
        })?;

    let content = fs::read_to_string(path)?;
    Ok(SvgInputFile::new(name, guess_mime_type(path), content))
}

/// Reads several paths into input files, preserving order.
///
/// # Errors
/// Fails on the first unreadable path; partial reads are discarded.
pub fn load_input_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SvgInputFile>> {
    paths
        .iter()
        .map(|path| load_input_file(path.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_svg_mime_type_case_insensitively() {
        assert_eq!(guess_mime_type(Path::new("icon.svg")), SVG_MIME_TYPE);
        assert_eq!(guess_mime_type(Path::new("ICON.SVG")), SVG_MIME_TYPE);
        assert_eq!(guess_mime_type(Path::new("notes.txt")), UNKNOWN_MIME_TYPE);
        assert_eq!(guess_mime_type(Path::new("no_extension")), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_input_file(Path::new("definitely/not/here.svg")).unwrap_err();
        assert!(matches!(err, ConverterError::Io(_)));
    }
}
