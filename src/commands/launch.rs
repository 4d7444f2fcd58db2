use std::path::Path;

use anyhow::Result;

use muwanx::config::Settings;
use muwanx::LaunchOptions;

/// Launch options from flags, falling back to `MUWANX_HOST` / `MUWANX_PORT`
pub fn launch_options(
    host: Option<String>,
    port: Option<u16>,
    no_browser: bool,
    settings: &Settings,
) -> LaunchOptions {
    LaunchOptions::new()
        .with_host(host.unwrap_or_else(|| settings.host.clone()))
        .with_port(port.unwrap_or(settings.port))
        .with_open_browser(!no_browser)
}

pub fn cmd_launch(
    dir: &Path,
    host: Option<String>,
    port: Option<u16>,
    no_browser: bool,
    json: bool,
) -> Result<()> {
    let settings = Settings::from_env();
    let options = launch_options(host, port, no_browser, &settings);
    muwanx::launch_with_events(dir, &options, super::event_sink(json, false))?;
    Ok(())
}
