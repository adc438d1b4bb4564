use hx_session::SessionConfig;

pub fn run(config: &SessionConfig, text: &str) -> Result<(), String> {
    let (mut session, store) = super::open_session(config)?;
    let reply = session
        .process(&format!("note {text}"))
        .map_err(|e| e.to_string())?;
    super::save_session(&store, &session)?;
    println!("{reply}");
    Ok(())
}
