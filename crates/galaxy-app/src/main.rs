mod app_state;
mod cli;

use std::path::PathBuf;

use galaxy_common::GalaxyError;
use galaxy_config::{config_to_json, toml_loader, ReloadManager};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Resolve the config path, creating the default file when using the
/// platform location for the first time.
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, GalaxyError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let path = toml_loader::default_config_path()?;
    if !path.exists() {
        toml_loader::create_default_config(&path)?;
    }
    Ok(path)
}

/// Install the tracing subscriber.
///
/// Precedence: `--log-level`, then `[logging].level` from the config file.
/// `RUST_LOG` directives are layered underneath either.
fn init_logging(cli_directive: Option<&str>, config_path: &std::path::Path) {
    let from_config = toml_loader::load_from_path(config_path)
        .map(|c| c.logging.level)
        .unwrap_or_default()
        .directive();
    let directive: Directive = cli_directive
        .unwrap_or(from_config)
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn run() -> Result<(), GalaxyError> {
    let args = cli::parse();

    let config_path = resolve_config_path(args.config.clone())?;
    init_logging(args.log_level.as_deref(), &config_path);

    tracing::info!("Galaxy v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!("Using config {}", config_path.display());

    // Owns the config watcher tasks for the lifetime of the app
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("galaxy-config")
        .enable_all()
        .build()?;
    let (mut config, config_rx) = runtime.block_on(ReloadManager::start(config_path));

    args.apply_overrides(&mut config)?;

    if args.dump_config {
        println!("{}", config_to_json(&config));
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| GalaxyError::EventLoop(e.to_string()))?;
    let mut app = app_state::GalaxyApp::new(config);
    app.attach_reload(runtime, config_rx);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| GalaxyError::EventLoop(e.to_string()))?;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e}");
        eprintln!("galaxy: {e}");
        std::process::exit(1);
    }
}
