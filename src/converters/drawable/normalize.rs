//! Rescales the numeric coordinates of a geometry string into the drawable
//! viewport.
//!
//! The rewrite is purely textual: the geometry is treated as opaque text
//! with embedded numbers, not parsed into path commands. Every numeric
//! literal is assumed to be a coordinate in the source viewport space. This
//! means distances and radii in the same stream are rescaled identically,
//! which is the uniform-scale behavior wanted for square icon viewports.

use super::constants::PATH_SCALE;
use regex::Regex;
use std::sync::OnceLock;

/// Maximal runs of digits and dots. No exponents, no signs: a leading `-`
/// stays in the surrounding text and survives the rewrite untouched.
fn re_numeric_literal() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"[0-9.]+").unwrap())
}

/// Rescales every numeric literal in `path_data` by the default
/// source-to-drawable viewport ratio (24 / 512), formatting each result to
/// exactly two decimal places. Command letters, separators, and whitespace
/// pass through unchanged. An empty input yields an empty output.
pub fn normalize_path_data(path_data: &str) -> String {
    rescale_path_data(path_data, PATH_SCALE)
}

/// Same rewrite as [`normalize_path_data`] with an explicit scale factor.
///
/// A matched run that has no float value (such as a bare `.` separator)
/// passes through unchanged.
pub fn rescale_path_data(path_data: &str, scale: f64) -> String {
    re_numeric_literal()
        .replace_all(path_data, |caps: &regex::Captures<'_>| {
            let literal = &caps[0];
            match literal.parse::<f64>() {
                Ok(value) => format!("{:.2}", value * scale),
                Err(_) => literal.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescales_every_numeric_literal_to_two_decimals() {
        assert_eq!(
            normalize_path_data("M256 0L512 256H0Z"),
            "M12.00 0.00L24.00 12.00H0.00Z"
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_path_data(""), "");
    }

    #[test]
    fn command_letters_and_separators_pass_through() {
        assert_eq!(
            rescale_path_data("M1,2 c3.5,-4 Z", 2.0),
            "M2.00,4.00 c7.00,-8.00 Z"
        );
    }

    #[test]
    fn negative_sign_is_left_in_surrounding_text() {
        // The pattern never captures the sign, so "-8" becomes "-16.00"
        // by rewriting only the digits.
        assert_eq!(rescale_path_data("L-8 4", 2.0), "L-16.00 8.00");
    }

    #[test]
    fn scaling_is_linear_when_intermediates_are_exact() {
        let geometry = "M256 0L512 256H64Z";
        let twice = rescale_path_data(&rescale_path_data(geometry, 0.5), 0.25);
        let once = rescale_path_data(geometry, 0.125);
        assert_eq!(twice, once);
    }

    #[test]
    fn unparsable_dot_runs_pass_through() {
        assert_eq!(rescale_path_data("M. 4", 2.0), "M. 8.00");
    }
}
