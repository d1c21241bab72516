use playbook::{ActiveFilter, Catalog, Category, Complexity, EntryId, Status, SystemEntry, compute_visible};

fn entry(id: &str, title: &str, category: Category, stack: &[&str]) -> SystemEntry {
    SystemEntry {
        id: EntryId::new(id),
        title: title.to_owned(),
        category,
        tags: vec![],
        description: format!("{title} deep-dive."),
        stack: stack.iter().map(|s| (*s).to_owned()).collect(),
        metrics: String::new(),
        complexity: Complexity::High,
        status: Status::Concept,
        adr_link: "#".to_owned(),
        sim_link: "#".to_owned(),
    }
}

/// The three sample entries with categories only.
fn scenario_catalog() -> Catalog {
    let mut sequencer = entry(
        "global-sequencer",
        "Global Sequencer",
        Category::Distributed,
        &["Snowflake", "LSM-Tree", "Zookeeper", "gRPC"],
    );
    sequencer.tags = vec!["Consensus".to_owned()];

    Catalog::new(vec![
        sequencer,
        entry(
            "rate-limiter",
            "Distributed Rate Limiter",
            Category::Networking,
            &["Redis", "Lua", "Token Bucket"],
        ),
        entry(
            "real-time-analytics",
            "Real-time Metrics Pipeline",
            Category::Storage,
            &["Kafka", "ClickHouse", "Protobuf"],
        ),
    ])
}

fn filters() -> Vec<ActiveFilter> {
    let mut filters = vec![
        ActiveFilter::All,
        ActiveFilter::label("Consensus"),
        ActiveFilter::label("Security"),
        ActiveFilter::label("Big Data"),
        ActiveFilter::label("Nonexistent"),
    ];
    filters.extend(Category::all().into_iter().map(ActiveFilter::from));
    filters
}

const SEARCHES: &[&str] = &["", "redis", "REDIS", "a", "pipeline", "grpc", "zzz-no-match", "scale"];

fn ids(entries: &[&SystemEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

fn is_ordered_subsequence(sub: &[&SystemEntry], catalog: &Catalog) -> bool {
    let mut positions = sub.iter().map(|e| {
        catalog
            .iter()
            .position(|c| c.id == e.id)
            .expect("entry comes from the catalog")
    });
    let mut last = None;
    positions.all(|p| {
        let ok = last.is_none_or(|l| p > l);
        last = Some(p);
        ok
    })
}

// --- Properties ---

#[test]
fn results_preserve_catalog_order() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        for filter in filters() {
            for search in SEARCHES {
                let visible = compute_visible(&catalog, &filter, search);
                assert!(
                    is_ordered_subsequence(&visible, &catalog),
                    "filter={filter} search={search}"
                );
            }
        }
    }
}

#[test]
fn search_only_narrows() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        for filter in filters() {
            let unsearched = ids(&compute_visible(&catalog, &filter, ""));
            for search in SEARCHES {
                for id in ids(&compute_visible(&catalog, &filter, search)) {
                    assert!(unsearched.contains(&id), "filter={filter} search={search}");
                }
            }
        }
    }
}

#[test]
fn all_with_empty_search_is_identity() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        let visible = compute_visible(&catalog, &ActiveFilter::All, "");
        let expected: Vec<&SystemEntry> = catalog.iter().collect();
        assert_eq!(visible, expected);
    }
}

#[test]
fn filtering_twice_is_idempotent() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        for filter in filters() {
            for search in SEARCHES {
                let once = compute_visible(&catalog, &filter, search);
                let twice = compute_visible(once.iter().copied(), &filter, search);
                assert_eq!(once, twice, "filter={filter} search={search}");
            }
        }
    }
}

#[test]
fn search_is_case_insensitive() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        for filter in filters() {
            assert_eq!(
                compute_visible(&catalog, &filter, "REDIS"),
                compute_visible(&catalog, &filter, "redis")
            );
            assert_eq!(
                compute_visible(&catalog, &filter, "ClickHouse"),
                compute_visible(&catalog, &filter, "clickhouse")
            );
        }
    }
}

#[test]
fn empty_catalog_yields_nothing() {
    let catalog = Catalog::new(vec![]);
    for filter in filters() {
        for search in SEARCHES {
            assert!(compute_visible(&catalog, &filter, search).is_empty());
        }
    }
}

// --- Scenarios ---

#[test]
fn storage_filter_selects_metrics_pipeline() {
    let catalog = scenario_catalog();
    let visible = compute_visible(&catalog, &ActiveFilter::label("Storage"), "");
    assert_eq!(ids(&visible), vec!["real-time-analytics"]);
}

#[test]
fn storage_filter_on_builtin_also_matches_storage_tag() {
    let catalog = Catalog::builtin();
    let visible = compute_visible(&catalog, &ActiveFilter::label("Storage"), "");
    assert_eq!(ids(&visible), vec!["global-sequencer", "real-time-analytics"]);
}

#[test]
fn kafka_search_matches_stack() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        let visible = compute_visible(&catalog, &ActiveFilter::All, "kafka");
        assert_eq!(ids(&visible), vec!["real-time-analytics"]);
    }
}

#[test]
fn consensus_tag_selects_sequencer() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        let visible = compute_visible(&catalog, &ActiveFilter::parse("Consensus"), "");
        assert_eq!(ids(&visible), vec!["global-sequencer"]);
    }
}

#[test]
fn unmatched_search_is_empty() {
    for catalog in [scenario_catalog(), Catalog::builtin()] {
        assert!(compute_visible(&catalog, &ActiveFilter::All, "zzz-no-match").is_empty());
    }
}

#[test]
fn filter_and_search_combine() {
    let catalog = Catalog::builtin();
    let visible = compute_visible(&catalog, &ActiveFilter::label("Storage"), "snowflake");
    assert_eq!(ids(&visible), vec!["global-sequencer"]);

    let visible = compute_visible(&catalog, &ActiveFilter::label("Networking"), "snowflake");
    assert!(visible.is_empty());
}

#[test]
fn search_matches_description_text() {
    let catalog = Catalog::builtin();
    let visible = compute_visible(&catalog, &ActiveFilter::All, "materialized views");
    assert_eq!(ids(&visible), vec!["real-time-analytics"]);
}
