use serde::{Deserialize, Serialize};

/// The only MIME type the batch orchestrator accepts.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// One uploaded (or loaded) source file handed to the conversion batch.
///
/// The host collaborator reads the file for us; by the time a value of this
/// type exists the content is plain UTF-8 text. The declared MIME type is
/// whatever the host reported (browser `File.type`, or an extension-based
/// guess from the native loader) and is checked, not trusted, by the batch
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgInputFile {
    /// Original file name, used as the result-map key and for deriving the
    /// output artifact name.
    pub name: String,

    /// Declared content type of the file (e.g. `image/svg+xml`).
    pub mime_type: String,

    /// Full text content of the file. Immutable once read.
    pub content: String,
}

impl SvgInputFile {
    /// Builds an input file from its parts.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// Whether the declared content type is the accepted vector-image type.
    pub fn is_svg(&self) -> bool {
        self.mime_type == SVG_MIME_TYPE
    }
}
