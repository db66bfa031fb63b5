//! Defines constants used throughout the vector drawable conversion process.

/// Namespace declared on the drawable's root element.
pub const ANDROID_XML_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

/// Rendered size of the produced drawable, in density-independent pixels.
pub const DRAWABLE_SIZE_DP: u32 = 24;

/// Logical coordinate space of the produced drawable.
pub const DRAWABLE_VIEWPORT: f64 = 24.0;

/// Coordinate space SVG icon sources are assumed to be authored against.
pub const SOURCE_VIEWPORT: f64 = 512.0;

/// Scale factor applied to every coordinate when moving a path from the
/// source viewport into the drawable viewport.
pub const PATH_SCALE: f64 = DRAWABLE_VIEWPORT / SOURCE_VIEWPORT;

/// Fill color for the single path (opaque black, ARGB).
pub const PATH_FILL_COLOR: &str = "#FF000000";

/// One level of indentation emitted by the pretty-printer (4 spaces).
pub const INDENT_UNIT: &str = "    ";
