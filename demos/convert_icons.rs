use std::env;
use std::fs;

use anyhow::Context;
use svg2vd_tools::{convert_files, load_input_files, output_file_name};

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    // This reads the RUST_LOG environment variable to configure logging levels
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        anyhow::bail!("usage: convert_icons <icon.svg> [more.svg ...]");
    }

    log::info!("Loading {} input file(s)...", paths.len());
    let files = load_input_files(&paths).context("failed to read input files")?;

    log::info!("Starting conversion...");
    let outcome = convert_files(&files);
    for rejected in &outcome.rejected {
        log::warn!(
            "Skipped {} (declared type: {})",
            rejected.name,
            rejected.mime_type
        );
    }

    for (source_name, drawable) in &outcome.drawables {
        let target = output_file_name(source_name);
        fs::write(&target, drawable).with_context(|| format!("unable to write {target}"))?;
        log::info!("{source_name} -> {target}");
    }

    log::info!(
        "Done: {} converted, {} skipped.",
        outcome.drawables.len(),
        outcome.rejected.len()
    );
    Ok(())
}
