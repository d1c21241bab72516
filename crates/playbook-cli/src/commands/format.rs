use playbook::{SystemEntry, has_link};

const MAX_TITLE_WIDTH: usize = 32;
const LINE_BUDGET: usize = 100;

/// One line per entry: status badge, title, category, stack.
pub fn entry_table(entries: &[&SystemEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let title_width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);
    let category_width = entries
        .iter()
        .map(|e| e.category.as_str().len())
        .max()
        .unwrap_or(0);
    let stack_budget = LINE_BUDGET.saturating_sub(2 + 10 + title_width + 2 + category_width + 2);

    let mut out = String::new();
    for entry in entries {
        let title = truncate(&entry.title, title_width);
        let stack = truncate(&entry.stack_line(), stack_budget);
        out.push_str(&format!(
            "  {:<10}{:<tw$}  {:<cw$}  {}\n",
            format!("[{}]", entry.status),
            title,
            entry.category.as_str(),
            stack,
            tw = title_width,
            cw = category_width,
        ));
    }

    let noun = if entries.len() == 1 { "system" } else { "systems" };
    out.push_str(&format!("\n{} {noun}\n", entries.len()));
    out
}

/// Full card for one entry, plus its share link.
pub fn entry_detail(entry: &SystemEntry, share_url: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title:       {}\n", entry.title));
    out.push_str(&format!("Status:      {}\n", entry.status));
    out.push_str(&format!("Category:    {}\n", entry.category));
    if !entry.tags.is_empty() {
        out.push_str(&format!("Tags:        {}\n", entry.tags.join(", ")));
    }
    out.push_str(&format!("Complexity:  {}\n", entry.complexity));
    out.push_str(&format!("Stack:       {}\n", entry.stack_line()));
    out.push_str(&format!("Metrics:     {}\n", entry.metrics.to_uppercase()));
    if has_link(&entry.adr_link) {
        out.push_str(&format!("Design:      {}\n", entry.adr_link));
    }
    if has_link(&entry.sim_link) {
        out.push_str(&format!("Simulation:  {}\n", entry.sim_link));
    }
    out.push_str(&format!("Share:       {share_url}\n"));
    out.push('\n');
    out.push_str(&entry.description);
    out.push('\n');
    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use playbook::{Catalog, EntryId};

    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_handles_unicode() {
        assert_eq!(truncate("Redis • Lua", 8), "Redis •…");
    }

    #[test]
    fn table_lists_entries_in_given_order() {
        let catalog = Catalog::builtin();
        let entries: Vec<&SystemEntry> = catalog.iter().collect();
        let table = entry_table(&entries);

        let seq = table.find("Global Sequencer").unwrap();
        let lim = table.find("Distributed Rate Limiter").unwrap();
        let pipe = table.find("Real-time Metrics Pipeline").unwrap();
        assert!(seq < lim && lim < pipe);
        assert!(table.contains("[Live]"));
        assert!(table.ends_with("\n3 systems\n"));
    }

    #[test]
    fn table_is_empty_for_no_entries() {
        assert!(entry_table(&[]).is_empty());
    }

    #[test]
    fn detail_hides_placeholder_links() {
        let catalog = Catalog::builtin();
        let limiter = catalog.get(&EntryId::new("rate-limiter")).unwrap();
        let text = entry_detail(limiter, "https://example.com/?system=rate-limiter");

        assert!(!text.contains("Design:"));
        assert!(text.contains("Metrics:     MULTI-REGION SYNC"));
        assert!(text.contains("Share:       https://example.com/?system=rate-limiter"));
    }

    #[test]
    fn detail_shows_published_links() {
        let catalog = Catalog::builtin();
        let sequencer = catalog.get(&EntryId::new("global-sequencer")).unwrap();
        let text = entry_detail(sequencer, "x");
        assert!(text.contains("Design:      Systems/global-sequencer/README.md"));
        assert!(text.contains("Tags:        High Scale, Storage, Consensus"));
    }
}
