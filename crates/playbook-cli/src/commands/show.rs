use anyhow::Result;
use playbook::{Catalog, PageLocation};

use super::{format, resolve_entry};

pub fn run(catalog: &Catalog, location: &PageLocation, id_or_link: &str, json: bool) -> Result<()> {
    let entry = resolve_entry(catalog, id_or_link)?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
    } else {
        print!("{}", format::entry_detail(entry, &location.share_url(&entry.id)));
    }

    Ok(())
}
