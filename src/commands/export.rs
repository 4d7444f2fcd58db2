use std::path::Path;

use anyhow::Result;

use muwanx::config::Settings;
use muwanx::{ExportFormat, ExportOptions, RawFileProvider};

pub fn cmd_export(
    project: &Path,
    out: &Path,
    format: ExportFormat,
    overwrite: bool,
    base_path: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let settings = Settings::from_env();
    let app = super::load_app(project, base_path, &settings)?;

    let options = ExportOptions::new(out)
        .with_format(format)
        .with_overwrite(overwrite);
    app.export_with(
        &options,
        RawFileProvider::new(),
        RawFileProvider::new(),
        super::event_sink(json, verbose),
    )?;
    Ok(())
}
