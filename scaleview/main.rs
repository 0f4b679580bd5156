use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use scaleview_config::{APP_NAME, APP_VERSION, Config};
use scaleview_tui::ResourceTable;
use std::io::stdout;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tokio::runtime::Builder;
use tracing::{error, info};

pub mod cli;
pub mod output;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = scaleview_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {:#}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_current_thread().enable_all().build()?;

    let config = rt.block_on(load_config(args.config.as_deref()))?;
    let source = args.input().map_or("stdin".into(), Path::to_string_lossy);
    let text = rt
        .block_on(read_input(args.input()))
        .with_context(|| format!("cannot read {source}"))?;
    let resources =
        scaleview_kube::parse_resources(&text).with_context(|| format!("cannot read autoscalers from {source}"))?;
    info!("rendering {} autoscalers from {}", resources.len(), source);

    let view = ResourceTable::autoscalers()
        .with_unknown_value(args.unknown(&config.unknown_value))
        .render(&resources);

    let is_tty = stdout().is_tty();
    let width = args.width(if is_tty { terminal_width() } else { 0 });
    let mut out = stdout().lock();
    if is_tty && !args.no_color {
        output::print_colored(&mut out, &view, &config.colors, width)?;
    } else {
        output::print_plain(&mut out, &view, width)?;
    }

    Ok(())
}

async fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .await
            .with_context(|| format!("cannot load configuration from {}", path.display()))?,
        None => Config::load_or_create().await?,
    };

    Ok(config)
}

async fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        },
    }
}

fn terminal_width() -> usize {
    crossterm::terminal::size().map_or(0, |(width, _)| usize::from(width))
}
