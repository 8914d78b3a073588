//! scrubline CLI: demo shell for the slider/timeline widget

use clap::Parser;
use scrubline_core::{load_timeline_data, parse_width, SliderConfig};
use scrubline_tui::Theme;
use std::path::PathBuf;

/// Scrub through rounds of an event log with a slider and a
/// synchronized timeline panel.
#[derive(Parser)]
#[command(name = "scrubline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of ticks on the slider
    #[arg(long, default_value_t = 40)]
    ticks: usize,

    /// Maximum widget width in columns (accepts "80" or "80px")
    #[arg(long)]
    width: Option<String>,

    /// Prefix for tick labels ("Round " yields "Round 1", ...)
    #[arg(long)]
    label: Option<String>,

    /// Start with the timeline panel expanded
    #[arg(long)]
    expanded: bool,

    /// Run the front-to-back animation once on startup
    #[arg(long)]
    animate: bool,

    /// Always show the active tick's own label (no gap at the pointer)
    #[arg(long)]
    show_active_text: bool,

    /// Milliseconds between animation steps (default: max(1000/ticks, 100))
    #[arg(long)]
    step_ms: Option<u64>,

    /// JSON file with per-tick timeline entries
    #[arg(long)]
    data: Option<PathBuf>,

    /// Full widget config as JSON (other flags still override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(long, default_value = "dark")]
    theme: String,
}

fn build_config(cli: &Cli) -> Result<SliderConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => SliderConfig::load(path)?,
        None => SliderConfig::new(cli.ticks),
    };

    if let Some(width) = &cli.width {
        config.width = parse_width(width)?;
    }
    if let Some(label) = &cli.label {
        config.tick_label_prefix = label.clone();
    }
    if cli.expanded {
        config.hide_timeline_initially = false;
    }
    if cli.animate {
        config.animate_on_load = true;
    }
    if cli.show_active_text {
        config.hide_active_tick_text = false;
    }
    if cli.step_ms.is_some() {
        config.time_between_steps_ms = cli.step_ms;
    }
    if let Some(path) = &cli.data {
        config.timeline_data = Some(load_timeline_data(path)?);
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let theme = match cli.theme.as_str() {
        "light" => Theme::latte(),
        _ => Theme::mocha(),
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(scrubline_tui::run_app(config, theme)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
