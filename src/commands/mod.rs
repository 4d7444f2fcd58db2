//! Subcommand handlers

pub mod export;
pub mod launch;
pub mod routes;
pub mod run;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use muwanx::config::{ProjectFile, Settings};
use muwanx::domain::ports::EventSink;
use muwanx::infrastructure::{ConsoleEventSink, JsonEventSink};
use muwanx::App;

/// Event sink matching the requested output mode
pub fn event_sink(json: bool, verbose: bool) -> Arc<dyn EventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(verbose))
    }
}

/// Load a project file and build its app
///
/// Base path precedence: `--base-path`, then `MUWANX_BASE_PATH`, then the file.
pub fn load_app(project: &Path, base_path: Option<String>, settings: &Settings) -> Result<App> {
    let (file, warnings) = ProjectFile::load_with_warnings(project)?;
    crate::ui::output::print_config_warnings(&warnings);

    let base_dir = project
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = file.into_builder(base_dir)?;
    if let Some(base_path) = base_path.or_else(|| settings.base_path.clone()) {
        builder.set_base_path(base_path);
    }

    Ok(builder.build()?)
}
