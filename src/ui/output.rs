use muwanx::config::ConfigWarning;
use muwanx::RouteEntry;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display()),
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Two-column route table, routes left-aligned
pub fn render_routes(routes: &[RouteEntry]) -> String {
    let width = routes.iter().map(|r| r.route.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in routes {
        out.push_str(&format!("  {:<width$}  {}\n", entry.route, entry.project, width = width));
    }
    out
}
