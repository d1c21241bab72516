use std::sync::{Arc, LazyLock};

use crate::entry::{Category, Complexity, EntryId, Status, SystemEntry};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_entries()));

/// Immutable, ordered sequence of entries.
///
/// Cloning is cheap: clones share the same backing slice, which is also what
/// [`crate::filter::VisibleCache`] uses to recognise "the same catalog".
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Arc<[SystemEntry]>,
}

impl Catalog {
    /// Wrap a fixed set of entries. Ids are assumed unique.
    pub fn new(entries: Vec<SystemEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// The catalog shipped with the playbook.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn entries(&self) -> &[SystemEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SystemEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&SystemEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Two handles refer to the same catalog instance.
    pub fn same_as(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SystemEntry;
    type IntoIter = std::slice::Iter<'a, SystemEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn builtin_entries() -> Vec<SystemEntry> {
    vec![
        SystemEntry {
            id: EntryId::new("global-sequencer"),
            title: "Global Sequencer".into(),
            category: Category::Distributed,
            tags: strings(&["High Scale", "Storage", "Consensus"]),
            description: "High-throughput unique ID generation at 10M+ TPS. Leverages Snowflake \
                          algorithms and LSM-Tree storage for extreme write durability."
                .into(),
            stack: strings(&["Snowflake", "LSM-Tree", "Zookeeper", "gRPC"]),
            metrics: "10M+ TPS | < 1ms Latency".into(),
            complexity: Complexity::Critical,
            status: Status::Live,
            adr_link: "Systems/global-sequencer/README.md".into(),
            sim_link: "Systems/global-sequencer/global_sequencer_dashboard.html".into(),
        },
        SystemEntry {
            id: EntryId::new("rate-limiter"),
            title: "Distributed Rate Limiter".into(),
            category: Category::Networking,
            tags: strings(&["Networking", "Security"]),
            description: "Edge protection at scale. Implements Sliding Window Log algorithms \
                          with Redis synchronization to prevent API abuse globally."
                .into(),
            stack: strings(&["Redis", "Lua", "Token Bucket"]),
            metrics: "Multi-Region Sync".into(),
            complexity: Complexity::Medium,
            status: Status::Drafting,
            adr_link: "#".into(),
            sim_link: "#".into(),
        },
        SystemEntry {
            id: EntryId::new("real-time-analytics"),
            title: "Real-time Metrics Pipeline".into(),
            category: Category::Storage,
            tags: strings(&["Storage", "Big Data"]),
            description: "Low-latency analytical processing using Columnar storage and \
                          materialized views for sub-second dashboard updates."
                .into(),
            stack: strings(&["Kafka", "ClickHouse", "Protobuf"]),
            metrics: "Sub-second OLAP".into(),
            complexity: Complexity::High,
            status: Status::Concept,
            adr_link: "#".into(),
            sim_link: "#".into(),
        },
    ]
}
