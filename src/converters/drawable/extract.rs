//! Extracts the drawing geometry from an SVG source document.
//!
//! The extractor is deliberately forgiving: the batch must produce *some*
//! drawable for every accepted file, so a parse failure or a document with
//! no usable path degrades to an empty geometry string instead of an error.

use log::{debug, warn};

/// Returns the value of the `d` attribute of the first `path` element in
/// document order, or an empty string if the document does not parse as XML,
/// contains no `path` element, or the element carries no `d` attribute.
///
/// Matching is on the local tag name, so namespaced documents
/// (`<svg:path>`) are handled the same as plain ones. Only the first path
/// is considered; multi-path documents are outside the converter's scope.
pub fn extract_path_data(document: &str) -> String {
    let doc = match roxmltree::Document::parse(document) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Input is not well-formed XML, emitting empty geometry: {e}");
            return String::new();
        }
    };

    let path_data = doc
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "path")
        .and_then(|node| node.attribute("d"))
        .unwrap_or_default();

    if path_data.is_empty() {
        debug!("No path element with a d attribute found");
    }
    path_data.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_path_in_document_order() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">
            <g><path d="M10 10H20"/></g>
            <path d="M99 99"/>
        </svg>"#;
        assert_eq!(extract_path_data(svg), "M10 10H20");
    }

    #[test]
    fn namespaced_path_elements_match_on_local_name() {
        let svg = r#"<svg:svg xmlns:svg="http://www.w3.org/2000/svg">
            <svg:path d="M1 2L3 4"/>
        </svg:svg>"#;
        assert_eq!(extract_path_data(svg), "M1 2L3 4");
    }

    #[test]
    fn missing_path_element_yields_empty_string() {
        assert_eq!(extract_path_data("<svg><rect width=\"4\"/></svg>"), "");
    }

    #[test]
    fn path_without_d_attribute_yields_empty_string() {
        assert_eq!(extract_path_data("<svg><path fill=\"red\"/></svg>"), "");
    }

    #[test]
    fn malformed_markup_yields_empty_string() {
        assert_eq!(extract_path_data("this is not xml at all"), "");
        assert_eq!(extract_path_data("<svg><path d=\"M0 0\""), "");
    }
}
