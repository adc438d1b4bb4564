use hx_session::SessionConfig;

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let (session, store) = super::open_session(config)?;
    println!("{}", session.status_report());
    println!("File: {}", store.path().display());
    Ok(())
}
