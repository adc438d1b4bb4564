use colored::Colorize;
use hx_core::{DatasetEntry, HexagramDataset, HexagramKey, Lookup};
use hx_session::SessionConfig;

pub fn run(config: &SessionConfig, query: &str) -> Result<(), String> {
    let dataset = super::load_dataset(config)?;
    let (key, entry) =
        find(&dataset, query).ok_or_else(|| format!("hexagram not found: \"{query}\""))?;

    let title = format!("{}. {}", entry.number, entry.name);
    println!("  {} {} {}", entry.symbol, title.bold(), entry.chinese_name);
    println!(
        "  {} {}  ({})",
        "key".dimmed(),
        key,
        super::trigram_label(&key).dimmed()
    );
    println!();
    for (i, text) in entry.lines.iter().enumerate() {
        println!("  {} {text}", format!("Line {}:", i + 1).bold());
    }
    Ok(())
}

fn find<'a>(dataset: &'a HexagramDataset, query: &str) -> Option<(HexagramKey, &'a DatasetEntry)> {
    let query = query.trim();
    if let Ok(key) = HexagramKey::parse(query) {
        return match dataset.get(&key) {
            Lookup::Found(entry) => Some((key, entry)),
            Lookup::Missing => None,
        };
    }
    if let Ok(number) = query.parse::<u8>() {
        return dataset
            .by_number(number)
            .map(|(key, entry)| (key.clone(), entry));
    }
    dataset
        .by_name(query)
        .map(|(key, entry)| (key.clone(), entry))
}
