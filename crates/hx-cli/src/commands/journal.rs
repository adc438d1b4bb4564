use std::path::Path;

use hx_session::SessionConfig;

pub fn run(config: &SessionConfig, format: &str, output: Option<&Path>) -> Result<(), String> {
    let (session, _) = super::open_session(config)?;
    let journal = session.journal();

    let content = match format {
        "markdown" | "md" => journal.export_markdown(),
        "text" | "txt" => journal.export_text(),
        other => return Err(format!("unsupported format: {other} (use markdown or text)")),
    };

    if let Some(path) = output {
        std::fs::write(path, &content).map_err(|e| format!("failed to write file: {e}"))?;
        eprintln!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }
    Ok(())
}
