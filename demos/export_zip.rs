use std::env;
use std::fs;

use anyhow::Context;
use svg2vd_tools::{convert_files, export_batch, load_input_files};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        anyhow::bail!("usage: export_zip <icon.svg> [more.svg ...]");
    }

    let files = load_input_files(&paths).context("failed to read input files")?;
    let outcome = convert_files(&files);

    // One file downloads as raw XML, several as a ZIP archive; the payload
    // carries the right name and content type either way.
    let payload = export_batch(&outcome.drawables)?;
    fs::write(&payload.file_name, &payload.bytes)
        .with_context(|| format!("unable to write {}", payload.file_name))?;

    log::info!(
        "Wrote {} ({}, {} bytes) from {} converted file(s).",
        payload.file_name,
        payload.content_type,
        payload.bytes.len(),
        outcome.drawables.len()
    );
    Ok(())
}
