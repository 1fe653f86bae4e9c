//! faqnav Page
//!
//! Wires the language resolver and the navigation synchronizer to an
//! actual FAQ page: catalog-driven DOM construction, anchor
//! interception, and the [`PageHost`] implementation the synchronizer
//! drives.
//!
//! # Example
//! ```rust,ignore
//! use faqnav_page::{FaqCatalog, FaqPage, PageConfig};
//!
//! let catalog = FaqCatalog::from_json(json)?;
//! let mut page = FaqPage::from_catalog(
//!     &catalog,
//!     "https://example.com/faq.html#q1--fr",
//!     vec!["en-US".to_string()],
//!     PageConfig::default(),
//! )?;
//! page.bootstrap();
//! assert_eq!(page.language_order()[0], "fr");
//! ```

mod builder;
mod catalog;
mod config;
mod page;

pub use builder::build_page;
pub use catalog::{CatalogError, FaqCatalog, FaqEntry};
pub use config::PageConfig;
pub use page::{FaqPage, PageError, ViewState};
