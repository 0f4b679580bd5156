use clap::Parser;
use std::path::{Path, PathBuf};

/// scaleview prints a table of Kubernetes horizontal pod autoscalers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// YAML or JSON file with autoscalers, e.g. `kubectl get hpa -A -o yaml` output (defaults to stdin).
    #[arg()]
    pub file: Option<PathBuf>,

    /// Path to the configuration file (defaults to $HOME/.scaleview/config.yaml).
    #[arg(long, env = "SCALEVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum line width, 0 means no limit (defaults to the terminal width).
    #[arg(long, short)]
    pub width: Option<usize>,

    /// Print the table without colors.
    #[arg(long)]
    pub no_color: bool,

    /// Text to show in place of missing values.
    #[arg(long)]
    pub unknown: Option<String>,
}

impl Args {
    /// Returns input file path or `None` if the input should be read from stdin.
    pub fn input(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Returns max line width or default if width is `None`.
    pub fn width(&self, default: usize) -> usize {
        self.width.unwrap_or(default)
    }

    /// Returns unknown value text or default if unknown is `None`.
    pub fn unknown<'a>(&'a self, default: &'a str) -> &'a str {
        self.unknown.as_deref().unwrap_or(default)
    }
}
