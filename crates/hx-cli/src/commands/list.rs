use comfy_table::{ContentArrangement, Table};
use hx_session::SessionConfig;

pub fn run(config: &SessionConfig) -> Result<(), String> {
    let dataset = super::load_dataset(config)?;

    if dataset.is_empty() {
        println!("  No hexagrams in dataset.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "", "Name", "Chinese", "Key", "Lower / Upper"]);

    for (key, entry) in dataset.in_sequence() {
        table.add_row(vec![
            entry.number.to_string(),
            entry.symbol.clone(),
            entry.name.clone(),
            entry.chinese_name.clone(),
            key.to_string(),
            super::trigram_label(key),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", dataset.len());
    Ok(())
}
