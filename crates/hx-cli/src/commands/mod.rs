pub mod ask;
pub mod consult;
pub mod journal;
pub mod list;
pub mod lookup;
pub mod new;
pub mod note;
pub mod play;
pub mod show;
pub mod status;
pub mod toss;

use hx_core::{HexagramDataset, HexagramKey, Trigram};
use hx_session::{Session, SessionConfig, SessionStore};

/// Rehydrate the session for one pass.
fn open_session(config: &SessionConfig) -> Result<(Session, SessionStore), String> {
    let dataset = load_dataset(config)?;
    let store = SessionStore::from_config(config);
    let state = store.load_or_init(config).map_err(|e| e.to_string())?;
    Ok((Session::new(state, dataset), store))
}

/// Persist the session at the end of a pass.
fn save_session(store: &SessionStore, session: &Session) -> Result<(), String> {
    store.save(session.state()).map_err(|e| e.to_string())
}

fn load_dataset(config: &SessionConfig) -> Result<HexagramDataset, String> {
    config.load_dataset().map_err(|e| e.to_string())
}

/// `"Thunder 震 / Water 坎"` style label, lower trigram first.
fn trigram_label(key: &HexagramKey) -> String {
    if !key.is_complete() {
        return "?".to_string();
    }
    let bits: Vec<u8> = key.as_str().bytes().map(|b| b - b'0').collect();
    match (Trigram::from_bits(&bits[..3]), Trigram::from_bits(&bits[3..])) {
        (Some(lower), Some(upper)) => format!("{lower} / {upper}"),
        _ => "?".to_string(),
    }
}
