use muwanx::MuwanxError;

/// Remediation hint for errors a user can fix from the command line
fn hint(err: &MuwanxError) -> Option<String> {
    match err {
        MuwanxError::AlreadyExists { .. } => {
            Some("Pass --overwrite to replace it, or choose another --out directory.".to_string())
        }
        MuwanxError::NameCollision { names, .. } => Some(format!(
            "Rename one of {} so their directory names differ.",
            names.join(" / ")
        )),
        MuwanxError::DirectoryNotFound { .. } => {
            Some("Run `muwanx export` first, or pass the bundle directory.".to_string())
        }
        MuwanxError::Model { .. } | MuwanxError::PolicyConfig { .. } => Some(
            "Model and config paths in the project file are relative to the file itself."
                .to_string(),
        ),
        MuwanxError::Config { .. } => {
            Some("Check the project file against `muwanx.toml` syntax.".to_string())
        }
        MuwanxError::Server { .. } => {
            Some("Pick another --port, or stop the process using it.".to_string())
        }
        _ => None,
    }
}

pub fn format_muwanx_error(err: &MuwanxError) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = hint(err) {
        out.push_str(&format!("  Fix: {}\n", hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(muwanx) = err.downcast_ref::<MuwanxError>() {
        return format_muwanx_error(muwanx);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(muwanx) = err.downcast_ref::<MuwanxError>() {
            let violations: Vec<String> =
                muwanx.violations().iter().map(|v| v.to_string()).collect();
            if !violations.is_empty() {
                output["violations"] = serde_json::json!(violations);
            }
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
