use clap::Parser;
use gridlist::{App, AppConfig, KeybindingsConfig, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridlist")]
#[command(about = "A scrolling, selectable grid of colors in the terminal")]
struct Args {
    /// Path to the data directory (default: ~/.gridlist/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Number of palette entries to show
    #[arg(short, long, default_value_t = 120)]
    items: usize,

    /// Override the configured number of columns
    #[arg(short, long)]
    columns: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gridlist")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config_exists = AppConfig::path(&data_dir).exists();
    let mut config = AppConfig::load_or_default(&data_dir);
    if !config_exists
        && let Err(err) = config.save(&data_dir)
    {
        tracing::warn!("Failed to write default config: {err}");
    }
    if let Some(columns) = args.columns {
        config.layout.columns = columns.max(1);
    }
    let keybindings = KeybindingsConfig::load_or_default(&data_dir);

    tracing::info!(items = args.items, columns = config.layout.columns, "starting");
    let mut app = App::new(&config, keybindings, args.items)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
