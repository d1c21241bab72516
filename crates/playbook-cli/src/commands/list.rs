use anyhow::Result;
use playbook::{ActiveFilter, Catalog, SystemEntry, compute_visible};

use super::format;

pub fn run(catalog: &Catalog, filter: &ActiveFilter, search: &str, json: bool) -> Result<()> {
    let visible = compute_visible(catalog, filter, search);

    if json {
        println!("{}", render_json(&visible)?);
    } else if visible.is_empty() {
        println!("No systems match (filter: {filter}, search: \"{search}\").");
    } else {
        print!("{}", format::entry_table(&visible));
    }

    Ok(())
}

fn render_json(entries: &[&SystemEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
