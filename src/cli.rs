use std::path::PathBuf;

use clap::{Parser, Subcommand};
use muwanx::ExportFormat;

/// Muwanx - build and serve browser-based MuJoCo demos
#[derive(Parser, Debug)]
#[command(name = "muwanx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Print every written file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a project file as a bundle or a config document
    Export {
        /// Project file describing projects, scenes and policies
        #[arg(short, long, default_value = muwanx::config::PROJECT_FILE)]
        project: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// What to write
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Bundle)]
        format: ExportFormat,

        /// Replace a non-empty output directory
        #[arg(long)]
        overwrite: bool,

        /// Override the project file's base path
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Export a bundle (replacing previous output), then serve it
    Run {
        /// Project file describing projects, scenes and policies
        #[arg(short, long, default_value = muwanx::config::PROJECT_FILE)]
        project: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Host to bind (defaults to MUWANX_HOST or localhost)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to MUWANX_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Do not open a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Serve an exported bundle directory
    Launch {
        /// Bundle directory
        #[arg(default_value = "dist")]
        dir: PathBuf,

        /// Host to bind (defaults to MUWANX_HOST or localhost)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to MUWANX_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Do not open a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Print the route of every project
    Routes {
        /// Project file describing projects, scenes and policies
        #[arg(short, long, default_value = muwanx::config::PROJECT_FILE)]
        project: PathBuf,
    },
}
