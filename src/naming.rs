//! Derives Android resource file names from source file names.

/// Prefix conventionally given to Android icon resources.
pub const OUTPUT_PREFIX: &str = "ic_";

/// Extension of the produced drawable files.
pub const OUTPUT_EXTENSION: &str = ".xml";

/// Extension expected on source files; stripped when present.
pub const SOURCE_EXTENSION: &str = ".svg";

/// Derives the output artifact name for a converted file.
///
/// Strips a trailing `.svg`, replaces every hyphen with an underscore
/// (Android resource names reject hyphens), prepends `ic_`, and appends
/// `.xml`. Pure function of the input name.
///
/// ```
/// use svg2vd_tools::naming::output_file_name;
///
/// assert_eq!(output_file_name("my-icon.svg"), "ic_my_icon.xml");
/// ```
pub fn output_file_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(SOURCE_EXTENSION).unwrap_or(file_name);
    format!("{OUTPUT_PREFIX}{}{OUTPUT_EXTENSION}", stem.replace('-', "_"))
}
