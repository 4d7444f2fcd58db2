//! Static file server for exported bundles
//!
//! Binding is synchronous so the caller learns the actual port (and any bind
//! error) before serving starts. Serving runs an axum router with a
//! `ServeDir` fallback on a current-thread tokio runtime and returns once
//! the shutdown future resolves.

mod browser;

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::ServeDir;

use crate::error::{MuwanxError, MuwanxResult};

pub use browser::open_browser;

/// Entry point for binding a bundle server
pub struct StaticServer;

impl StaticServer {
    /// Bind `host:port` for serving `root`; port 0 picks a free port
    pub fn bind(root: impl Into<PathBuf>, host: &str, port: u16) -> MuwanxResult<BoundServer> {
        let root = root.into();
        let listener = std::net::TcpListener::bind((host, port)).map_err(|e| MuwanxError::Server {
            message: format!("cannot bind {}:{}: {}", host, port, e),
        })?;
        listener.set_nonblocking(true)?;
        let local_addr = listener.local_addr()?;

        Ok(BoundServer {
            listener,
            root,
            host: host.to_string(),
            local_addr,
        })
    }
}

/// A bound, not yet serving, static server
#[derive(Debug)]
pub struct BoundServer {
    listener: std::net::TcpListener,
    root: PathBuf,
    host: String,
    local_addr: SocketAddr,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// URL using the host name the caller asked for and the bound port
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.local_addr.port())
    }

    /// Serve until `shutdown` resolves, then release the socket
    pub fn serve_until<F>(self, shutdown: F) -> MuwanxResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let app = Router::new().fallback_service(ServeDir::new(&self.root));
        let listener = self.listener;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener)?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
                .map_err(|e| MuwanxError::Server {
                    message: e.to_string(),
                })
        })
    }
}
