pub mod format;
pub mod list;
pub mod share;
pub mod show;
pub mod tabs;

use anyhow::{Result, bail};
use playbook::{Catalog, EntryId, SystemEntry, parse_deep_link};

/// Accept either a bare entry id or a share link carrying `?system=<id>`.
pub fn entry_id(id_or_link: &str) -> Result<EntryId> {
    if !id_or_link.contains('?') {
        return Ok(EntryId::new(id_or_link));
    }
    match parse_deep_link(id_or_link) {
        Some(id) => Ok(id),
        None => bail!("no system parameter in link: {id_or_link}"),
    }
}

pub fn resolve_entry<'a>(catalog: &'a Catalog, id_or_link: &str) -> Result<&'a SystemEntry> {
    let id = entry_id(id_or_link)?;
    match catalog.get(&id) {
        Some(entry) => Ok(entry),
        None => bail!("System not found: {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bare_id() {
        let catalog = Catalog::builtin();
        let entry = resolve_entry(&catalog, "rate-limiter").unwrap();
        assert_eq!(entry.title, "Distributed Rate Limiter");
    }

    #[test]
    fn resolves_share_link() {
        let catalog = Catalog::builtin();
        let entry =
            resolve_entry(&catalog, "https://example.com/p/?system=global-sequencer").unwrap();
        assert_eq!(entry.title, "Global Sequencer");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let catalog = Catalog::builtin();
        let err = resolve_entry(&catalog, "nope").unwrap_err();
        assert_eq!(err.to_string(), "System not found: nope");
    }

    #[test]
    fn link_without_param_is_an_error() {
        let catalog = Catalog::builtin();
        assert!(resolve_entry(&catalog, "https://example.com/?x=1").is_err());
    }

    #[test]
    fn resolves_encoded_share_link() {
        let catalog = Catalog::builtin();
        let entry = resolve_entry(&catalog, "https://example.com:443/p/?system=rate%2Dlimiter").unwrap();
        assert_eq!(entry.title, "Distributed Rate Limiter");
    }
}
