use crate::{Category, Clipboard, ClipboardError, Complexity, EntryId, Status, SystemEntry};

/// Clipboard that remembers everything written to it.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

/// Clipboard that rejects every write, like a browser denying access.
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("permission denied".into()))
    }
}

/// Minimal entry with the given id, title and category. Everything else is
/// empty or a placeholder.
pub fn sample_entry(id: &str, title: &str, category: Category) -> SystemEntry {
    SystemEntry {
        id: EntryId::new(id),
        title: title.to_owned(),
        category,
        tags: vec![],
        description: format!("{title} writeup"),
        stack: vec![],
        metrics: String::new(),
        complexity: Complexity::Medium,
        status: Status::Concept,
        adr_link: "#".into(),
        sim_link: "#".into(),
    }
}
