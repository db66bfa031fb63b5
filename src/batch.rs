//! Applies the conversion pipeline to a batch of input files.

use crate::converters::drawable::convert_svg_to_drawable;
use crate::models::batch::{BatchOutcome, RejectedFile};
use crate::models::input::{SvgInputFile, SVG_MIME_TYPE};
use log::{debug, warn};

/// Converts every accepted file in the batch, keyed by original file name.
///
/// Files whose declared content type is not `image/svg+xml` are recorded in
/// the outcome's `rejected` list and skipped; rejection never aborts the
/// rest of the batch. Each file's conversion is independent, and entries
/// are inserted whole into the result map in input order. A repeated file
/// name within one batch keeps its first position and the last document.
///
/// # Arguments
/// * `files` - The batch of input files, in the order the host received them.
///
/// # Returns
/// A `BatchOutcome` with one drawable per accepted file and one rejection
/// record per skipped file.
pub fn convert_files(files: &[SvgInputFile]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for file in files {
        if !file.is_svg() {
            warn!(
                "{} is not an SVG file (declared type: {}). Skipping...",
                file.name, file.mime_type
            );
            outcome.rejected.push(RejectedFile {
                name: file.name.clone(),
                mime_type: file.mime_type.clone(),
            });
            continue;
        }

        debug!("Converting {}", file.name);
        outcome
            .drawables
            .insert(file.name.clone(), convert_svg_to_drawable(&file.content));
    }

    outcome
}
