use colored::Colorize;
use hx_session::{QuestionOutcome, SessionConfig};

pub fn run(config: &SessionConfig, question: &str) -> Result<(), String> {
    let (mut session, store) = super::open_session(config)?;

    match session.set_question(question) {
        QuestionOutcome::Accepted => {
            super::save_session(&store, &session)?;
            println!("  {} {}", "Question recorded:".green(), question.trim());
        }
        QuestionOutcome::Deferred => {
            println!(
                "  {} finish the hexagram first ({} of 6 lines cast).",
                "Not yet:".yellow(),
                session.reading().toss_count()
            );
        }
    }
    Ok(())
}
