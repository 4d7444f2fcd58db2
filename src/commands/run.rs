use std::path::Path;

use anyhow::Result;

use muwanx::config::{Settings, ENV_NO_LAUNCH};
use muwanx::domain::ports::Event;
use muwanx::{ExportFormat, ExportOptions, RawFileProvider};

pub fn cmd_run(
    project: &Path,
    out: &Path,
    host: Option<String>,
    port: Option<u16>,
    no_browser: bool,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let settings = Settings::from_env();
    let app = super::load_app(project, None, &settings)?;
    let events = super::event_sink(json, verbose);

    let options = ExportOptions::new(out)
        .with_format(ExportFormat::Bundle)
        .with_overwrite(true);
    app.export_with(
        &options,
        RawFileProvider::new(),
        RawFileProvider::new(),
        events.clone(),
    )?;

    if settings.no_launch {
        events.on_event(Event::Warning {
            message: format!("{} is set; not launching {}", ENV_NO_LAUNCH, out.display()),
        });
        return Ok(());
    }

    let options = super::launch::launch_options(host, port, no_browser, &settings);
    muwanx::launch_with_events(out, &options, events)?;
    Ok(())
}
