use colored::Colorize;
use hx_session::SessionConfig;

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let (session, _) = super::open_session(config)?;
    let reading = session.reading();

    println!(
        "  {} {} of 6 lines ({})",
        "Reading".bold(),
        reading.toss_count(),
        reading.phase()
    );
    println!();
    for line in session.render_reading().lines() {
        println!("  {line}");
    }
    if let Some(q) = &session.state().user_question {
        println!();
        println!("  {} {q}", "Question:".bold());
    }
    Ok(())
}
