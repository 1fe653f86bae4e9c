//! faqnav Navigation Synchronization
//!
//! Keeps browser-style navigation history, the URL hash, and the page's
//! language-block ordering consistent. The [`Synchronizer`] is a small
//! state machine driven by handler methods; the page behind it is reached
//! through the [`PageHost`] trait.

mod capabilities;
mod history;
mod host;
mod location;
mod sync;

pub use capabilities::Capabilities;
pub use history::{History, HistoryEntry, NavState};
pub use host::PageHost;
pub use location::Location;
pub use sync::{ClickOutcome, Synchronizer, hash_language};
