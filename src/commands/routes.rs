use std::path::Path;

use anyhow::Result;

use muwanx::config::Settings;

pub fn cmd_routes(project: &Path, json: bool) -> Result<()> {
    let settings = Settings::from_env();
    let app = super::load_app(project, None, &settings)?;
    let routes = app.routes();

    if json {
        let entries: Vec<serde_json::Value> = routes
            .iter()
            .map(|r| serde_json::json!({ "project": r.project, "route": r.route }))
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "routes",
            "base_path": app.base_path(),
            "routes": entries,
        }))?;
        return Ok(());
    }

    print!("{}", crate::ui::output::render_routes(&routes));
    Ok(())
}
