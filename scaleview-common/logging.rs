use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes new logging to file and returns worker guard that will flush logs on drop.\
/// **Note** that nothing is logged to `stdout`, it is reserved for the rendered table.
pub fn initialize(app_name: &str) -> Result<WorkerGuard> {
    let logs_dir = match std::env::home_dir() {
        Some(path) => path.join(format!(".{app_name}")).join("logs"),
        None => PathBuf::from("logs"),
    };
    let appender = tracing_appender::rolling::daily(logs_dir, format!("{app_name}.log"));
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    let timer = time::format_description::parse("[year]-[month padding:zero]-[day padding:zero] [hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

    let env_filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(default_directives(app_name)));

    #[cfg(debug_assertions)]
    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    #[cfg(not(debug_assertions))]
    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(guard)
}

/// Returns filter directives used when `RUST_LOG` is not set.\
/// Crate targets use underscores, so `scaleview-kube` logs under `scaleview_kube`.
fn default_directives(app_name: &str) -> String {
    let target = app_name.replace('-', "_");

    #[cfg(debug_assertions)]
    let directives = format!("warn,{target}=info,{target}_kube=info,{target}_config=info");

    #[cfg(not(debug_assertions))]
    let directives = format!("off,{target}=info,{target}_kube=info,{target}_config=info");

    directives
}
