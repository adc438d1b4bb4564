use std::io::{self, BufRead, Write};

use colored::Colorize;
use hx_session::SessionConfig;

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let (session, store) = super::open_session(config)?;
    let mut session = match config.interpreter() {
        Some(interpreter) => session.with_interpreter(Box::new(interpreter)),
        None => session,
    };

    println!("  {} I-Ching reading", "Starting".bold());
    println!(
        "  {} of 6 lines cast | Session: {}",
        session.reading().toss_count(),
        store.path().display()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                super::save_session(&store, &session)?;
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
