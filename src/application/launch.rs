//! Launch Use Case
//!
//! Serves an exported bundle directory on a local HTTP server until the
//! process receives Ctrl+C.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tokio::sync::Notify;

use crate::domain::ports::{Event, EventSink, NoopEventSink};
use crate::error::{MuwanxError, MuwanxResult};
use crate::infrastructure::server::{open_browser, BoundServer, StaticServer};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

/// Options for serving a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set whether to open a browser once listening
    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }
}

/// Serve `app_dir` until Ctrl+C, then return
pub fn launch(app_dir: impl AsRef<Path>, options: &LaunchOptions) -> MuwanxResult<()> {
    launch_with_events(app_dir, options, Arc::new(NoopEventSink))
}

/// Same as [`launch`], reporting the listening URL and warnings to `events`
pub fn launch_with_events(
    app_dir: impl AsRef<Path>,
    options: &LaunchOptions,
    events: Arc<dyn EventSink>,
) -> MuwanxResult<()> {
    let server = bind(app_dir.as_ref(), options)?;
    let interrupt = interrupt_signal()?;

    announce(&server, options, events.as_ref());
    server.serve_until(async move { interrupt.notified().await })?;
    events.on_event(Event::ServerStopped);
    Ok(())
}

/// Check the directory and bind, without serving
pub fn bind(app_dir: &Path, options: &LaunchOptions) -> MuwanxResult<BoundServer> {
    if !app_dir.is_dir() {
        return Err(MuwanxError::DirectoryNotFound {
            path: app_dir.to_path_buf(),
        });
    }
    StaticServer::bind(app_dir, &options.host, options.port)
}

/// Report the URL and, if asked, open it; a failing opener only warns
fn announce(server: &BoundServer, options: &LaunchOptions, events: &dyn EventSink) {
    let url = server.url();
    events.on_event(Event::ServerListening {
        url: url.clone(),
        root: server.root().to_path_buf(),
    });
    if options.open_browser {
        if let Err(e) = open_browser(&url) {
            events.on_event(Event::Warning {
                message: format!("could not open a browser for {}: {}", url, e),
            });
        }
    }
}

/// Process-wide Ctrl+C notification, installed on first use
fn interrupt_signal() -> MuwanxResult<Arc<Notify>> {
    static SIGNAL: OnceLock<Arc<Notify>> = OnceLock::new();

    if let Some(signal) = SIGNAL.get() {
        return Ok(Arc::clone(signal));
    }

    let signal = Arc::new(Notify::new());
    let handler = Arc::clone(&signal);
    ctrlc::set_handler(move || handler.notify_one()).map_err(|e| MuwanxError::Server {
        message: format!("cannot install Ctrl+C handler: {}", e),
    })?;
    Ok(Arc::clone(SIGNAL.get_or_init(|| signal)))
}
