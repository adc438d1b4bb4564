use colored::Colorize;
use hx_session::{SessionConfig, SessionStore};

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let store = SessionStore::from_config(config);
    let state = store.reset(config).map_err(|e| e.to_string())?;
    println!("  {} new reading {}", "Started".green().bold(), state.id);
    println!("  Session file: {}", store.path().display());
    Ok(())
}
