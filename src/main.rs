use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use routinist::app::App;
use routinist::assistant::spawn_worker;
use routinist::catalog::CatalogLoader;
use routinist::config::{load_config, load_config_from_path};

/// Build a skincare routine from the products you own
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Product catalog JSON file (defaults to the config's catalog path)
    catalog: Option<PathBuf>,

    /// Chat completion endpoint (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Config file to use instead of ~/.config/routinist/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let config_result = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let mut config = config_result.config;
    if let Some(endpoint) = args.endpoint {
        config.assistant.endpoint = endpoint;
    }

    // Load the catalog before touching the terminal so errors print normally
    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let loader = CatalogLoader::new(catalog_path);
    let products = loader.load()?;
    log::debug!(
        "Loaded {} products from {}",
        products.len(),
        loader.path().display()
    );

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_worker(&config.assistant.endpoint, request_rx, response_tx);

    let mut app = App::new(loader, &products, &config);
    app.set_channels(request_tx, response_rx);
    if let Some(warning) = config_result.warning {
        app.notify(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.poll_responses();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Write debug logs to a file in the temp dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("routinist-debug.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
