use anyhow::{Context, Result};
use std::io;
use tasque::config::Config;
use tasque::repl::Repl;
use tasque::storage::LocalStorage;

fn main() -> Result<()> {
    env_logger::init();

    // Try to load the config file, fall back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("ignoring config: {e:#}");
        Config::default()
    });

    let path = LocalStorage::locate(config.data_file.as_deref())
        .context("could not determine a location for the task data file")?;
    let storage = LocalStorage::new(path);

    // An unreadable or integrity-broken data file is fatal at startup;
    // it needs manual repair rather than a partial load.
    let tasks = storage.load()?;

    let stdin = io::stdin();
    Repl::new(tasks, storage).run(stdin.lock(), io::stdout())?;
    Ok(())
}
