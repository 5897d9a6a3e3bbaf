//! Feedback scorer.
//!
//! Looks for loading indicators, error handling, success messaging, and
//! hover affordances in the page files. Without a pages directory the
//! category short-circuits to zero with a single issue.

use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::{CategoryKey, CategoryResult};
use crate::scorers::CategoryScore;

/// Success markers. The audited frontends ship Korean copy, so the
/// localized token counts the same as the literal word.
const SUCCESS_MARKERS: [&str; 2] = ["success", "성공"];

pub fn score(tree: &SourceTree, settings: &AuditConfig) -> CategoryResult {
    let mut acc = CategoryScore::new();

    if !tree.pages.exists {
        acc.flag("no pages directory".to_string());
        return acc.finish(CategoryKey::Feedback, settings.max_display_issues);
    }

    for page in &tree.pages.files {
        let content = &page.content;
        let lower = content.to_lowercase();

        if lower.contains("loading") || lower.contains("spinner") {
            acc.award(3);
        } else {
            acc.flag(format!("{}: no loading indicator", page.name));
        }

        // "catch" stays case-sensitive: it targets catch blocks, not prose
        if lower.contains("error") || content.contains("catch") {
            acc.award(3);
        } else {
            acc.flag(format!("{}: no error handling", page.name));
        }

        if SUCCESS_MARKERS.iter().any(|m| lower.contains(m)) {
            acc.award(2);
        }

        // Covers onMouseOver handlers, :hover pseudo-classes, and hover
        // utility classes alike
        if content.contains("onMouseOver") || lower.contains("hover") {
            acc.award(2);
        }
    }

    acc.finish(CategoryKey::Feedback, settings.max_display_issues)
}
