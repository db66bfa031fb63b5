use thiserror::Error;

/// Represents errors that can occur around the conversion pipeline.
///
/// The pipeline itself (extract, normalize, generate, format) never fails:
/// bad input degrades to an empty-but-well-formed drawable. These variants
/// cover the fallible edges around it, such as reading input files,
/// packaging archives, and serializing results for the host.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// An I/O error occurred, typically while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred during serialization of a batch outcome for the host.
    #[error("Failed to serialize conversion result: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Error reported by the ZIP writer while packaging converted drawables.
    #[error("Archive packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An error indicating invalid input was provided to a library function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, ConverterError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, ConverterError>;
