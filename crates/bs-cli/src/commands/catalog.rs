use std::path::Path;

use bs_screening::ScreeningConfig;
use bs_screening::catalog::answer_from_plate_id;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(path: Option<&Path>, plates: usize) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;
    let plates = ScreeningConfig::default()
        .with_plates_per_type(plates)
        .plates_per_type;

    if catalog.is_empty() {
        return Err("catalog has no test types".into());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Test type", "Plates", "Answers"]);

    for entry in catalog.entries() {
        let mut answers: Vec<u32> = entry
            .plates
            .keys()
            .filter_map(|id| answer_from_plate_id(id).ok())
            .collect();
        answers.sort_unstable();
        answers.dedup();
        let answers: Vec<String> = answers.iter().map(u32::to_string).collect();

        table.add_row(vec![
            entry.name.to_string(),
            entry.plates.len().to_string(),
            answers.join(", "),
        ]);
    }

    println!("{table}");
    println!();

    catalog.validate(plates).map_err(|e| e.to_string())?;
    println!(
        "  {} {} types, {} plates per session",
        "Catalog OK:".green().bold(),
        catalog.len(),
        catalog.len() * plates
    );

    Ok(())
}
