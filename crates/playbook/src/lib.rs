pub mod catalog;
pub mod clipboard;
pub mod entry;
pub mod feedback;
pub mod filter;
pub mod link;
pub mod share;

pub use catalog::Catalog;
pub use clipboard::{Clipboard, ClipboardError, Osc52Clipboard};
pub use entry::{Category, Complexity, EntryId, Status, SystemEntry, has_link};
pub use feedback::{Feedback, Level};
pub use filter::{ActiveFilter, VisibleCache, compute_visible, filter_counts, tabs};
pub use link::{PageLocation, parse_deep_link};
pub use share::{RESET_AFTER, ShareMachine, ShareState, ShareToken, Shared};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
