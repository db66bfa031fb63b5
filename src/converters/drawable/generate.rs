//! Embeds a normalized geometry string into the fixed vector drawable
//! template.

use super::constants::{ANDROID_XML_NAMESPACE, DRAWABLE_SIZE_DP, DRAWABLE_VIEWPORT, PATH_FILL_COLOR};

/// Produces a complete vector drawable document for a single-path icon.
///
/// The template is fixed: an XML declaration, a `<vector>` root with the
/// Android resource namespace and 24dp/24-viewport metadata, and one
/// `<path>` child carrying an opaque black fill and the given geometry as
/// `android:pathData`. Pure string interpolation; the output is
/// byte-identical apart from the injected geometry value.
///
/// The caller is expected to pass already-normalized geometry; an empty
/// string yields a syntactically valid but visually empty drawable.
pub fn generate_drawable(path_data: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<vector
    xmlns:android="{namespace}"
    android:width="{size}dp"
    android:height="{size}dp"
    android:viewportWidth="{viewport}"
    android:viewportHeight="{viewport}">

    <path
        android:fillColor="{fill}"
        android:pathData="{path_data}"
    />

</vector>"#,
        namespace = ANDROID_XML_NAMESPACE,
        size = DRAWABLE_SIZE_DP,
        viewport = DRAWABLE_VIEWPORT,
        fill = PATH_FILL_COLOR,
        path_data = path_data,
    )
}
