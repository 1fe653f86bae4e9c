//! faqnav Demo - Simulated Navigation Session
//!
//! Loads a catalog JSON, builds the page, and walks through a short
//! navigation session, printing the visible state after each step.

use anyhow::{Context, Result};
use faqnav_page::{FaqCatalog, FaqPage, PageConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: faqnav-demo <catalog.json> [hash] [locale...]")?;
    let hash = args.next().unwrap_or_default();
    let mut locales: Vec<String> = args.collect();
    if locales.is_empty() {
        locales.push("en-US".to_string());
    }

    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let catalog = FaqCatalog::from_json(&json).context("parsing catalog")?;
    if let Err(e) = catalog.check_complete() {
        tracing::warn!("catalog is incomplete: {e}");
    }

    let href = format!("https://example.com/faq.html{hash}");
    let mut page = FaqPage::from_catalog(&catalog, &href, locales, PageConfig::default())?;
    page.bootstrap();
    report("after load", &page);

    // Deep-link to the first question in the preferred language
    let target = match (catalog.faqs.first(), page.language_order().first()) {
        (Some(entry), Some(lang)) => format!("#{}--{}", entry.key, lang),
        _ => return Ok(()),
    };
    let anchor = page
        .document()
        .elements_by_tag("a")
        .into_iter()
        .find(|a| page.document().attr(*a, "href") == Some(target.as_str()));
    if let Some(anchor) = anchor {
        page.click_anchor(anchor);
        report(&format!("after clicking {target}"), &page);

        page.back();
        report("after back", &page);

        page.forward();
        report("after forward", &page);
    }

    Ok(())
}

fn report(step: &str, page: &FaqPage) {
    println!("{step}:");
    println!("  url        {}", page.location().href());
    println!("  order      {}", page.language_order().join(", "));
    println!(
        "  highlight  {}",
        page.highlighted().unwrap_or_else(|| "-".to_string())
    );
}
