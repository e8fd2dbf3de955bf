mod buffer;
mod config;
mod editor;
mod error;
mod logger;

use anyhow::Result;
use log::{info, warn};

use config::Config;
use editor::Editor;

fn main() -> Result<()> {
    setup_log()?;

    let config = Config::load_from_file("config.toml").unwrap_or_else(|error| {
        warn!("ignoring config.toml: {error}");
        Config::default()
    });
    info!("starting editor loop");

    let stdin = std::io::stdin();
    let mut editor = Editor::new(&config, stdin.lock(), std::io::stdout());
    editor.run()
}

fn setup_log() -> Result<()> {
    use env_logger::{Builder, Target};
    use log::LevelFilter;
    use std::fs::File;

    let file = File::create("/tmp/lined.log")?;
    Builder::new()
        .target(Target::Pipe(Box::new(file)))
        .filter(None, LevelFilter::Info)
        .init();

    Ok(())
}
