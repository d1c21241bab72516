use anyhow::Result;
use playbook::{Catalog, Clipboard, Feedback, PageLocation, ShareMachine};

use super::resolve_entry;

/// Print the share link for an entry and, if a clipboard is given, copy it.
/// A clipboard failure is reported on stderr and does not fail the command.
pub fn run(
    catalog: &Catalog,
    location: &PageLocation,
    id_or_link: &str,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<()> {
    let (url, feedback) = share_link(catalog, location, id_or_link, clipboard)?;
    println!("{url}");
    if let Some(feedback) = feedback {
        eprintln!("{feedback}");
    }
    Ok(())
}

fn share_link(
    catalog: &Catalog,
    location: &PageLocation,
    id_or_link: &str,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<(String, Option<Feedback>)> {
    let entry = resolve_entry(catalog, id_or_link)?;

    let Some(clipboard) = clipboard else {
        return Ok((location.share_url(&entry.id), None));
    };

    let mut machine = ShareMachine::new(location.clone());
    match machine.share(&entry.id, clipboard) {
        Ok(shared) => Ok((shared.url, Some(Feedback::link_copied(&entry.id)))),
        Err(err) => Ok((location.share_url(&entry.id), Some(Feedback::copy_failed(&err)))),
    }
}

#[cfg(test)]
mod tests {
    use playbook::test_support::{FailingClipboard, RecordingClipboard};
    use playbook::Level;

    use super::*;

    fn location() -> PageLocation {
        PageLocation::new("https://example.com", "/playbook/")
    }

    #[test]
    fn link_without_copy() {
        let (url, feedback) =
            share_link(&Catalog::builtin(), &location(), "rate-limiter", None).unwrap();
        assert_eq!(url, "https://example.com/playbook/?system=rate-limiter");
        assert!(feedback.is_none());
    }

    #[test]
    fn copy_writes_clipboard() {
        let mut clipboard = RecordingClipboard::new();
        let (url, feedback) = share_link(
            &Catalog::builtin(),
            &location(),
            "global-sequencer",
            Some(&mut clipboard),
        )
        .unwrap();

        assert_eq!(clipboard.last(), Some(url.as_str()));
        assert_eq!(feedback.unwrap().level, Level::Info);
    }

    #[test]
    fn copy_failure_still_prints_link() {
        let mut clipboard = FailingClipboard;
        let (url, feedback) = share_link(
            &Catalog::builtin(),
            &location(),
            "global-sequencer",
            Some(&mut clipboard),
        )
        .unwrap();

        assert_eq!(url, "https://example.com/playbook/?system=global-sequencer");
        assert!(feedback.unwrap().is_error());
    }

    #[test]
    fn unknown_id_fails() {
        assert!(share_link(&Catalog::builtin(), &location(), "nope", None).is_err());
    }
}
