use bs_screening::condition::known_conditions;
use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Condition", "Test type", "Affects", "Description"]);

    for (test_type, info) in known_conditions() {
        table.add_row(vec![
            info.name.to_string(),
            test_type.to_string(),
            info.affects.to_string(),
            info.description.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
