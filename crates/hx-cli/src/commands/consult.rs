use colored::Colorize;
use hx_session::{ConsultOutcome, SessionConfig};

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let (mut session, store) = super::open_session(config)?;

    let Some(interpreter) = config.interpreter() else {
        let prompt = session.prompt().ok_or_else(|| not_ready(&session))?;
        eprintln!(
            "  {} no interpreter configured; printing the prompt instead.",
            "note:".yellow()
        );
        println!("{prompt}");
        return Ok(());
    };

    let outcome = session.consult(&interpreter);
    super::save_session(&store, &session)?;

    match outcome {
        ConsultOutcome::Answered(answer) => {
            println!("{answer}");
            Ok(())
        }
        ConsultOutcome::Failed { notice, .. } => Err(notice),
        ConsultOutcome::NotReady => Err(not_ready(&session)),
    }
}

fn not_ready(session: &hx_session::Session) -> String {
    format!(
        "the hexagram is not complete yet ({} of 6 lines cast)",
        session.reading().toss_count()
    )
}
