use anyhow::Result;
use playbook::{Catalog, filter_counts};

pub fn run(catalog: &Catalog) -> Result<()> {
    print!("{}", render(catalog));
    Ok(())
}

fn render(catalog: &Catalog) -> String {
    filter_counts(catalog)
        .iter()
        .map(|(tab, count)| format!("{:<12} {count}\n", tab.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_tab_with_count() {
        let text = render(&Catalog::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "all          3");
        assert_eq!(lines[2], "Storage      2");
    }
}
