mod app;
mod cli;

use folio::{config::Config, logging};

fn main() {
    let cli = cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}", e);
        eprintln!("Using built-in defaults.");
        Config::default()
    });
    if let Some(threshold) = cli.threshold {
        config.navigation.offset_threshold = Some(threshold);
    }
    if cli.no_smooth {
        config.scroll.smooth = false;
    }

    // Logging is best effort; the viewer works without a log file
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    app::run(cli, config);
}
