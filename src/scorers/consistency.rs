//! Consistency scorer.
//!
//! Checks for a global stylesheet with design tokens, restrained inline
//! styling, and a small set of distinct button classes across pages.

use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::{CategoryKey, CategoryResult};
use crate::scorers::CategoryScore;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static BTN_CLASS: OnceLock<Regex> = OnceLock::new();

fn btn_class() -> &'static Regex {
    BTN_CLASS.get_or_init(|| Regex::new(r#"className="[^"]*btn[^"]*""#).expect("valid regex"))
}

/// Textual marker for an inline style object opening.
const INLINE_STYLE_MARKER: &str = "style={{";

pub fn score(tree: &SourceTree, settings: &AuditConfig) -> CategoryResult {
    let mut acc = CategoryScore::new();

    if let Some(stylesheet) = &tree.stylesheet {
        acc.award(10);

        // Custom-property declaration ("--x:") or usage ("var(")
        if stylesheet.content.contains("--") || stylesheet.content.contains("var(") {
            acc.award(5);
        } else {
            acc.flag("no design tokens - consistency risk".to_string());
        }
    }

    // The page-level checks only apply when the pages directory itself
    // exists; an absent directory earns neither points nor issues here.
    if tree.pages.exists {
        let inline_count: usize = tree
            .pages
            .files
            .iter()
            .map(|f| f.content.matches(INLINE_STYLE_MARKER).count())
            .sum();

        if inline_count > settings.max_inline_styles {
            acc.flag(format!(
                "excessive inline styling ({}) - prefer stylesheet classes",
                inline_count
            ));
        } else {
            acc.award(5);
        }

        let mut button_classes: HashSet<&str> = HashSet::new();
        for page in &tree.pages.files {
            for class_attr in btn_class().find_iter(&page.content) {
                button_classes.insert(class_attr.as_str());
            }
        }

        if button_classes.len() <= settings.max_button_classes {
            acc.award(5);
        } else {
            acc.flag(format!(
                "too many distinct button classes ({})",
                button_classes.len()
            ));
        }
    }

    acc.finish(CategoryKey::Consistency, settings.max_display_issues)
}
