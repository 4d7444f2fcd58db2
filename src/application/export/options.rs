//! Export options

use std::fmt;
use std::path::PathBuf;

/// What an export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// `config.json` only
    Config,
    /// `config.json` plus every scene and policy asset
    #[default]
    Bundle,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Config => "config",
            ExportFormat::Bundle => "bundle",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the export use case
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory that receives the output
    pub output_dir: PathBuf,
    pub format: ExportFormat,
    /// Replace existing non-empty output instead of failing
    pub overwrite: bool,
    /// Base for relative model paths and policy `config_path`s
    pub source_root: PathBuf,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ExportFormat::default(),
            overwrite: false,
            source_root: PathBuf::from("."),
        }
    }

    /// Set format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set overwrite
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set source root
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }
}
