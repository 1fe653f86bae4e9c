//! faqnav Language Resolution
//!
//! Normalizes BCP-47-style language tags and ranks them against the set of
//! languages a page actually carries. Everything in this crate is pure:
//! given the same inputs, the same preference list comes out.

mod cascade;
mod resolve;
mod tag;

pub use cascade::dialect_cascade;
pub use resolve::{FallbackPolicy, complete_preferences, resolve_preferred, resolve_with_policy};
pub use tag::{LanguageTag, TagError};
