use playbook::{
    Clipboard, ClipboardError, EntryId, Feedback, PageLocation, ShareMachine, ShareState,
    parse_deep_link,
};

#[derive(Default)]
struct Recording {
    writes: Vec<String>,
}

impl Clipboard for Recording {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_owned());
        Ok(())
    }
}

struct Denied;

impl Clipboard for Denied {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("document is not focused".into()))
    }
}

fn machine() -> ShareMachine {
    ShareMachine::new(PageLocation::from_url(
        "https://vk-systems.github.io/system-design-playbook/",
    )
    .unwrap())
}

#[test]
fn second_share_overrides_and_owns_the_reset() {
    let mut m = machine();
    let mut clipboard = Recording::default();

    let first = m.share(&EntryId::new("global-sequencer"), &mut clipboard).unwrap();
    assert_eq!(m.state(), &ShareState::Copied(EntryId::new("global-sequencer")));

    let second = m.share(&EntryId::new("rate-limiter"), &mut clipboard).unwrap();
    assert_eq!(m.state(), &ShareState::Copied(EntryId::new("rate-limiter")));

    // The first share's reset fires and must not clear the newer state.
    assert!(!m.expire(first.token));
    assert_eq!(m.state(), &ShareState::Copied(EntryId::new("rate-limiter")));

    assert!(m.expire(second.token));
    assert_eq!(m.state(), &ShareState::Idle);
}

#[test]
fn copied_links_are_deep_links_to_the_entry() {
    let mut m = machine();
    let mut clipboard = Recording::default();

    m.share(&EntryId::new("rate-limiter"), &mut clipboard).unwrap();

    assert_eq!(
        clipboard.writes,
        vec!["https://vk-systems.github.io/system-design-playbook/?system=rate-limiter"]
    );
    assert_eq!(
        parse_deep_link(&clipboard.writes[0]),
        Some(EntryId::new("rate-limiter"))
    );
}

#[test]
fn denied_clipboard_reports_and_stays_idle() {
    let mut m = machine();

    let err = m.share(&EntryId::new("global-sequencer"), &mut Denied).unwrap_err();
    let feedback = Feedback::copy_failed(&err);

    assert!(feedback.is_error());
    assert_eq!(m.state(), &ShareState::Idle);
}

#[test]
fn sharing_same_entry_again_rearms() {
    let mut m = machine();
    let mut clipboard = Recording::default();
    let id = EntryId::new("global-sequencer");

    let first = m.share(&id, &mut clipboard).unwrap();
    let second = m.share(&id, &mut clipboard).unwrap();

    assert!(!m.expire(first.token));
    assert!(m.is_copied(&id));
    assert!(m.expire(second.token));
    assert_eq!(clipboard.writes.len(), 2);
}
