#[cfg(not(target_arch = "wasm32"))]
pub mod loader;

#[cfg(not(target_arch = "wasm32"))]
pub use loader::{load_input_file, load_input_files};

pub mod archive;
pub mod batch;
pub mod converters;
pub mod errors;
pub mod models;
pub mod naming;

pub use archive::{combined_clipboard_text, export_batch, package_archive};
pub use batch::convert_files;
pub use converters::drawable::convert_svg_to_drawable;
pub use errors::{ConverterError, Result};
pub use models::batch::{BatchOutcome, ConversionResult, ExportPayload, RejectedFile};
pub use models::input::{SvgInputFile, SVG_MIME_TYPE};
pub use naming::output_file_name;

use wasm_bindgen::prelude::*;

/// Installs the panic hook and console logger when the module is
/// instantiated by a wasm host.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Converts one SVG document to formatted vector drawable XML.
#[wasm_bindgen]
pub fn convert_svg(svg_content: &str) -> String {
    converters::drawable::convert_svg_to_drawable(svg_content)
}

/// Derives the output artifact name for a source file name
/// (`my-icon.svg` → `ic_my_icon.xml`).
#[wasm_bindgen]
pub fn output_name(file_name: &str) -> String {
    naming::output_file_name(file_name)
}

/// Converts a batch of files handed over as parallel arrays (name, declared
/// MIME type, text content per index) and returns the `BatchOutcome` as a
/// JSON string: converted drawables keyed by file name in input order, plus
/// the rejected files.
#[wasm_bindgen]
pub fn convert_batch(
    names: Vec<String>,
    mime_types: Vec<String>,
    contents: Vec<String>,
) -> std::result::Result<String, JsError> {
    if names.len() != mime_types.len() || names.len() != contents.len() {
        return Err(JsError::new(
            "names, mime_types, and contents must have the same length",
        ));
    }

    let files: Vec<SvgInputFile> = names
        .into_iter()
        .zip(mime_types)
        .zip(contents)
        .map(|((name, mime_type), content)| SvgInputFile::new(name, mime_type, content))
        .collect();

    let outcome = batch::convert_files(&files);
    serde_json::to_string(&outcome).map_err(JsError::from)
}

/// Packages already-converted documents (source names and document texts as
/// parallel arrays) into ZIP bytes for a multi-file download.
#[wasm_bindgen]
pub fn package_batch(
    names: Vec<String>,
    documents: Vec<String>,
) -> std::result::Result<Vec<u8>, JsError> {
    if names.len() != documents.len() {
        return Err(JsError::new("names and documents must have the same length"));
    }

    let drawables: ConversionResult = names.into_iter().zip(documents).collect();
    archive::package_archive(&drawables).map_err(JsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROW_UP_SVG: &str = r#"<svg><path d="M256 0L512 256H0Z"/></svg>"#;

    #[test]
    fn end_to_end_arrow_up_scenario() {
        let files = vec![SvgInputFile::new("arrow-up.svg", SVG_MIME_TYPE, ARROW_UP_SVG)];
        let outcome = convert_files(&files);

        let drawable = &outcome.drawables["arrow-up.svg"];
        let lines: Vec<&str> = drawable.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="utf-8"?>"#);
        assert!(lines[1].starts_with("    <vector"));
        assert!(lines[1].contains(r#"xmlns:android="http://schemas.android.com/apk/res/android""#));
        assert!(lines[1].ends_with(r#"android:viewportHeight="24">"#));
        assert!(lines[2].starts_with("        <path"));
        assert!(lines[2].contains(r#"android:pathData="M12.00 0.00L24.00 12.00H0.00Z""#));
        assert!(lines[2].ends_with("/>"));
        assert_eq!(lines[3], "    </vector>");

        assert_eq!(output_file_name("arrow-up.svg"), "ic_arrow_up.xml");
    }

    #[test]
    fn wasm_batch_entry_reports_drawables_and_rejections_as_json() {
        let names = vec!["arrow-up.svg".to_string(), "readme.md".to_string()];
        let mime_types = vec![SVG_MIME_TYPE.to_string(), "text/markdown".to_string()];
        let contents = vec![ARROW_UP_SVG.to_string(), "# readme".to_string()];

        let json = convert_batch(names, mime_types, contents)
            .ok()
            .expect("batch conversion succeeds");
        let outcome: BatchOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome.drawables.len(), 1);
        assert!(outcome.drawables.contains_key("arrow-up.svg"));
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].name, "readme.md");
    }

    #[test]
    fn wasm_batch_entry_rejects_mismatched_arrays() {
        let result = convert_batch(
            vec!["a.svg".to_string()],
            vec![],
            vec!["<svg/>".to_string()],
        );
        assert!(result.is_err());
    }
}
