use hx_core::HexagramLine;
use hx_session::SessionConfig;

pub fn run(config: &SessionConfig, value: Option<u8>, all: bool) -> Result<(), String> {
    let (mut session, store) = super::open_session(config)?;

    if let Some(v) = value {
        let line = HexagramLine::from_value(v).map_err(|e| e.to_string())?;
        let outcome = session.record(line);
        println!("{}", session.describe_toss(outcome));
    } else {
        loop {
            let outcome = session.toss();
            println!("{}", session.describe_toss(outcome));
            if !all || !session.toss_enabled() {
                break;
            }
        }
    }

    super::save_session(&store, &session)
}
