use std::fmt;

use crate::catalog::Catalog;
use crate::entry::{Category, SystemEntry};

/// Literal that selects every entry.
pub const ALL: &str = "all";

/// Active category/tag filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    /// Matches entries whose category or one of whose tags equals the value.
    Label(String),
}

impl ActiveFilter {
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Label(s.to_owned())
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Label(s) => s,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, entry: &SystemEntry) -> bool {
        match self {
            Self::All => true,
            Self::Label(label) => entry.has_label(label),
        }
    }
}

impl From<Category> for ActiveFilter {
    fn from(category: Category) -> Self {
        Self::Label(category.as_str().to_owned())
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The filter tabs offered by the browser, in display order.
pub fn tabs() -> Vec<ActiveFilter> {
    vec![
        ActiveFilter::All,
        ActiveFilter::from(Category::Distributed),
        ActiveFilter::from(Category::Storage),
        ActiveFilter::from(Category::Networking),
    ]
}

/// How many catalog entries each tab would show with an empty search.
pub fn filter_counts(catalog: &Catalog) -> Vec<(ActiveFilter, usize)> {
    tabs()
        .into_iter()
        .map(|tab| {
            let count = catalog.iter().filter(|e| tab.matches(e)).count();
            (tab, count)
        })
        .collect()
}

/// Entries of `catalog` that pass both the label filter and the search term,
/// in catalog order. The search is a case-insensitive substring match against
/// title, description and stack; an empty term matches everything.
pub fn compute_visible<'a, I>(
    catalog: I,
    filter: &ActiveFilter,
    search_term: &str,
) -> Vec<&'a SystemEntry>
where
    I: IntoIterator<Item = &'a SystemEntry>,
{
    visible_positions(catalog, filter, search_term)
        .map(|(_, entry)| entry)
        .collect()
}

fn visible_positions<'a, I>(
    catalog: I,
    filter: &ActiveFilter,
    search_term: &str,
) -> impl Iterator<Item = (usize, &'a SystemEntry)>
where
    I: IntoIterator<Item = &'a SystemEntry>,
{
    let needle = search_term.to_lowercase();
    let filter = filter.clone();
    catalog
        .into_iter()
        .enumerate()
        .filter(move |(_, entry)| {
            filter.matches(entry) && (needle.is_empty() || entry.mentions_lowercase(&needle))
        })
}

/// Memoizes [`compute_visible`] against the `(catalog, filter, search)` triple.
///
/// Results are stored as positions into the catalog so the cache does not
/// borrow it. Any change to one of the three inputs forces a recompute.
#[derive(Debug, Default)]
pub struct VisibleCache {
    key: Option<(Catalog, ActiveFilter, String)>,
    positions: Vec<usize>,
    recomputations: usize,
}

impl VisibleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions into `catalog` of the visible entries.
    pub fn positions(&mut self, catalog: &Catalog, filter: &ActiveFilter, search: &str) -> &[usize] {
        let fresh = match &self.key {
            Some((c, f, s)) => c.same_as(catalog) && f == filter && s == search,
            None => false,
        };

        if !fresh {
            self.positions = visible_positions(catalog, filter, search)
                .map(|(idx, _)| idx)
                .collect();
            self.key = Some((catalog.clone(), filter.clone(), search.to_owned()));
            self.recomputations += 1;
        }

        &self.positions
    }

    /// Number of times the cache had to recompute.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;

    fn ids<'a>(entries: &[&'a SystemEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn parse_recognises_all_sentinel() {
        assert_eq!(ActiveFilter::parse("all"), ActiveFilter::All);
        assert_eq!(ActiveFilter::parse("All"), ActiveFilter::label("All"));
        assert_eq!(ActiveFilter::parse("Storage").as_str(), "Storage");
    }

    #[test]
    fn category_filter_includes_tagged_entries() {
        let catalog = Catalog::builtin();
        let visible = compute_visible(&catalog, &ActiveFilter::label("Storage"), "");
        assert_eq!(ids(&visible), vec!["global-sequencer", "real-time-analytics"]);
    }

    #[test]
    fn tag_only_filter() {
        let catalog = Catalog::builtin();
        let visible = compute_visible(&catalog, &ActiveFilter::label("Consensus"), "");
        assert_eq!(ids(&visible), vec!["global-sequencer"]);
    }

    #[test]
    fn search_matches_stack() {
        let catalog = Catalog::builtin();
        let visible = compute_visible(&catalog, &ActiveFilter::All, "kafka");
        assert_eq!(ids(&visible), vec!["real-time-analytics"]);
    }

    #[test]
    fn unknown_filter_is_empty() {
        let catalog = Catalog::builtin();
        assert!(compute_visible(&catalog, &ActiveFilter::label("Quantum"), "").is_empty());
    }

    #[test]
    fn tabs_start_with_all() {
        let tabs = tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, vec!["all", "Distributed", "Storage", "Networking"]);
    }

    #[test]
    fn filter_counts_for_builtin() {
        let counts = filter_counts(&Catalog::builtin());
        let counts: Vec<(&str, usize)> = counts.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        assert_eq!(
            counts,
            vec![("all", 3), ("Distributed", 1), ("Storage", 2), ("Networking", 1)]
        );
    }

    #[test]
    fn cache_reuses_result_for_same_triple() {
        let catalog = Catalog::builtin();
        let mut cache = VisibleCache::new();

        let first = cache.positions(&catalog, &ActiveFilter::All, "redis").to_vec();
        let second = cache.positions(&catalog, &ActiveFilter::All, "redis").to_vec();

        assert_eq!(first, vec![1]);
        assert_eq!(first, second);
        assert_eq!(cache.recomputations(), 1);
    }

    #[test]
    fn cache_recomputes_when_any_input_changes() {
        let catalog = Catalog::builtin();
        let other = Catalog::new(catalog.entries().to_vec());
        let mut cache = VisibleCache::new();

        cache.positions(&catalog, &ActiveFilter::All, "");
        cache.positions(&catalog, &ActiveFilter::label("Storage"), "");
        cache.positions(&catalog, &ActiveFilter::label("Storage"), "click");
        cache.positions(&other, &ActiveFilter::label("Storage"), "click");

        assert_eq!(cache.recomputations(), 4);
    }

    #[test]
    fn cache_positions_line_up_with_compute_visible() {
        let catalog = Catalog::builtin();
        let mut cache = VisibleCache::new();
        let filter = ActiveFilter::label("Storage");

        let from_cache: Vec<&EntryId> = cache
            .positions(&catalog, &filter, "")
            .iter()
            .map(|&idx| &catalog.entries()[idx].id)
            .collect();
        let direct: Vec<&EntryId> = compute_visible(&catalog, &filter, "")
            .into_iter()
            .map(|e| &e.id)
            .collect();

        assert_eq!(from_cache, direct);
    }
}
