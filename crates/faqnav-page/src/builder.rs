//! Page Builder
//!
//! Builds the FAQ page DOM from a catalog: one block per supported
//! language under the container, the separator first, and a `¶`
//! self-link anchor per question.

use faqnav_dom::{Document, NodeId};
use tracing::debug;

use crate::{FaqCatalog, PageConfig};

/// Build the page DOM for a catalog.
///
/// Layout per language block (`id` = language code, class = `lang`):
/// a definition list of `dt`/`dd` pairs, the `dt` id being
/// `<key>--<lang>`. Questions missing a translation are skipped.
pub fn build_page(catalog: &FaqCatalog, config: &PageConfig) -> Document {
    let mut doc = Document::new();
    let root = doc.tree().root();

    let body = doc.tree_mut().create_element("body");
    doc.tree_mut().append_child(root, body).ok();

    let container = doc
        .tree_mut()
        .create_element_with_id("section", &config.container_id);
    doc.tree_mut().append_child(body, container).ok();

    let separator = doc
        .tree_mut()
        .create_element_with_id("nav", &config.separator_id);
    doc.tree_mut().append_child(container, separator).ok();

    for lang in &catalog.supported_languages {
        let block = doc.tree_mut().create_element_with_id("div", lang);
        doc.add_class(block, &config.lang_class);
        doc.tree_mut().append_child(container, block).ok();

        let dl = doc.tree_mut().create_element("dl");
        doc.tree_mut().append_child(block, dl).ok();

        for entry in &catalog.faqs {
            let (Some(question), Some(answer)) = (
                catalog.question(&entry.key, lang),
                catalog.answer(&entry.key, lang),
            ) else {
                debug!("no {lang} translation for {:?}, skipping", entry.key);
                continue;
            };
            let id = format!("{}--{}", entry.key, lang);
            append_entry(&mut doc, dl, &id, question, answer);
        }

        // Language list links for the separator
        let link = doc.tree_mut().create_element("a");
        if let Some(e) = doc.tree_mut().get_mut(link).and_then(|n| n.as_element_mut()) {
            e.set_attr("href", &format!("#{lang}"));
        }
        let label = doc.tree_mut().create_text(lang);
        doc.tree_mut().append_child(link, label).ok();
        doc.tree_mut().append_child(separator, link).ok();
    }

    doc
}

fn append_entry(doc: &mut Document, dl: NodeId, id: &str, question: &str, answer: &str) {
    let tree = doc.tree_mut();

    let dt = tree.create_element_with_id("dt", id);
    if let Some(e) = tree.get_mut(dt).and_then(|n| n.as_element_mut()) {
        e.set_attr("tabindex", "0");
    }

    let span = tree.create_element("span");
    let question_text = tree.create_text(question);
    tree.append_child(span, question_text).ok();

    let anchor = tree.create_element("a");
    if let Some(e) = tree.get_mut(anchor).and_then(|n| n.as_element_mut()) {
        e.set_attr("href", &format!("#{id}"));
    }
    let pilcrow = tree.create_text("\u{00B6}");
    tree.append_child(anchor, pilcrow).ok();

    let gap = tree.create_text(" ");
    tree.append_child(dt, span).ok();
    tree.append_child(dt, gap).ok();
    tree.append_child(dt, anchor).ok();

    let dd = tree.create_element("dd");
    let answer_text = tree.create_text(answer);
    tree.append_child(dd, answer_text).ok();

    tree.append_child(dl, dt).ok();
    tree.append_child(dl, dd).ok();
}
