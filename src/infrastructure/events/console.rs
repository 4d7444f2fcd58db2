//! Console Event Sink
//!
//! Human-readable progress lines for interactive use.

use crate::domain::ports::{Event, EventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints one line per notable event
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stdout(verbose: bool) -> Self {
        Self::with_writer(io::stdout(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else if noun.ends_with('y') {
        format!("{} {}ies", count, &noun[..noun.len() - 1])
    } else {
        format!("{} {}s", count, noun)
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: Event) {
        match event {
            Event::ExportStarted {
                output_dir,
                format,
                projects,
                scenes,
                policies,
            } => self.line(format!(
                "Exporting {} to {} ({}, {}, {})",
                format,
                output_dir.display(),
                plural(projects, "project"),
                plural(scenes, "scene"),
                plural(policies, "policy"),
            )),
            Event::ExportPrepared { .. } => {}
            Event::OutputCleared { path } => {
                self.line(format!("Removed previous output in {}", path.display()))
            }
            Event::FileWritten { path, kind, .. } => {
                self.line(format!("  {:<13} {}", kind.as_str(), path.display()))
            }
            Event::ExportCompleted {
                output_dir,
                file_count,
            } => self.line(format!(
                "Exported {} to {}",
                plural(file_count, "file"),
                output_dir.display()
            )),
            Event::ServerListening { url, root } => {
                self.line(format!("Serving {} at {}", root.display(), url));
                self.line("Press Ctrl+C to stop".to_string());
            }
            Event::Warning { message } => self.line(format!("Warning: {}", message)),
            Event::ServerStopped => self.line("Server stopped.".to_string()),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
