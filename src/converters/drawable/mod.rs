//! Converts SVG icon documents to Android vector drawable XML.
//!
//! This module provides the main entry point `convert_svg_to_drawable` and
//! organizes the conversion stages into submodules for clarity and
//! maintainability.
//!
//! # Current Features & Limitations:
//! *   Extracts the first `path` element's geometry; additional paths,
//!     other shape primitives, strokes, gradients, and transforms are
//!     ignored.
//! *   Rescales coordinates textually from an assumed 512 source viewport
//!     to the 24 drawable viewport; numbers are not interpreted against
//!     path-command semantics.
//! *   Produces a fixed single-path template (24dp, opaque black fill).
//! *   Never fails: malformed or path-less input degrades to a drawable
//!     with empty geometry so a batch can always account for every file.

// Declare the submodules
mod constants;
mod extract;
mod format;
mod generate;
mod normalize;

// Re-export the stage functions and the constants consumers key off.
pub use constants::{DRAWABLE_SIZE_DP, DRAWABLE_VIEWPORT, PATH_FILL_COLOR, PATH_SCALE, SOURCE_VIEWPORT};
pub use extract::extract_path_data;
pub use format::format_xml;
pub use generate::generate_drawable;
pub use normalize::{normalize_path_data, rescale_path_data};

/// Converts one SVG document to a formatted vector drawable document.
///
/// Runs the four stages in order: extract the first path geometry,
/// rescale its coordinates into the drawable viewport, embed the result in
/// the drawable template, and pretty-print the produced XML. Each stage
/// degrades instead of failing, so this function always returns a
/// well-formed (possibly visually empty) drawable.
///
/// # Arguments
/// * `svg_content` - Full text of the source SVG document.
///
/// # Returns
/// The canonically indented vector drawable XML for the icon.
pub fn convert_svg_to_drawable(svg_content: &str) -> String {
    let geometry = extract_path_data(svg_content);
    let normalized = normalize_path_data(&geometry);
    let drawable = generate_drawable(&normalized);
    format_xml(&drawable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_a_simple_icon_end_to_end() {
        let svg = r#"<svg><path d="M256 0L512 256H0Z"/></svg>"#;
        let drawable = convert_svg_to_drawable(svg);

        assert!(drawable.contains("android:pathData=\"M12.00 0.00L24.00 12.00H0.00Z\""));
        // One root element, one nested path, canonical indentation.
        assert_eq!(drawable.matches("<vector").count(), 1);
        assert_eq!(drawable.matches("<path").count(), 1);
        assert_eq!(format_xml(&drawable), drawable);
    }

    #[test]
    fn garbage_input_still_yields_the_fixed_template() {
        let drawable = convert_svg_to_drawable("not xml at all");
        assert!(drawable.contains("<vector"));
        assert!(drawable.contains("android:pathData=\"\""));
        assert!(drawable.contains("</vector>"));
    }

    #[test]
    fn conversion_is_deterministic() {
        let svg = r#"<svg viewBox="0 0 512 512"><path d="M100.5 200.25L300 400Z"/></svg>"#;
        assert_eq!(convert_svg_to_drawable(svg), convert_svg_to_drawable(svg));
    }
}
