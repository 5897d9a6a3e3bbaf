//! Accessibility scorer.
//!
//! Inspects every page and component file for aria attributes, image
//! alt text, button markup, and semantic sectioning tags. These are
//! substring/regex presence tests over raw text, not markup parsing.

use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::{CategoryKey, CategoryResult};
use crate::scorers::CategoryScore;
use regex::Regex;
use std::sync::OnceLock;

static IMG_TAG: OnceLock<Regex> = OnceLock::new();
static BUTTON_BLOCK: OnceLock<Regex> = OnceLock::new();

fn img_tag() -> &'static Regex {
    IMG_TAG.get_or_init(|| Regex::new(r"<img[^>]*>").expect("valid regex"))
}

fn button_block() -> &'static Regex {
    // (?s) lets the block span lines; non-greedy to stop at the first close tag
    BUTTON_BLOCK.get_or_init(|| Regex::new(r"(?s)<button[^>]*>.*?</button>").expect("valid regex"))
}

/// Opening-tag forms of the semantic sectioning elements. One point per
/// file, first match wins.
const SEMANTIC_TAGS: [&str; 7] = [
    "<header", "<nav", "<main", "<section", "<article", "<aside", "<footer",
];

pub fn score(tree: &SourceTree, settings: &AuditConfig) -> CategoryResult {
    let mut acc = CategoryScore::new();

    for file in tree.markup_files() {
        let content = &file.content;

        if content.contains("aria-label") || content.contains("aria-labelledby") {
            acc.award(2);
        } else {
            acc.flag(format!("{}: missing aria-label attributes", file.name));
        }

        // Alt checks never award points, they only flag, one issue per
        // offending image tag.
        for img in img_tag().find_iter(content) {
            if !img.as_str().contains("alt=") {
                acc.flag(format!("{}: image missing alt attribute", file.name));
            }
        }

        if button_block().is_match(content) {
            acc.award(2);
        }

        if SEMANTIC_TAGS.iter().any(|tag| content.contains(tag)) {
            acc.award(1);
        }
    }

    acc.finish(CategoryKey::Accessibility, settings.max_display_issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORY_MAX_SCORE;
    use crate::scorers::test_support::{empty_tree, file, group};

    fn settings() -> AuditConfig {
        AuditConfig::default()
    }

    #[test]
    fn test_full_marks_single_file() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file(
            "Home.jsx",
            r#"<main aria-label="home"><button onClick={go}>Go</button></main>"#,
        )]);

        let result = score(&tree, &settings());
        // aria +2, button +2, semantic +1
        assert_eq!(result.score, 5);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_missing_aria_flagged() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file("Plain.jsx", "<div>hello</div>")]);

        let result = score(&tree, &settings());
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec!["Plain.jsx: missing aria-label attributes"]);
    }

    #[test]
    fn test_image_without_alt_flagged_per_tag() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file(
            "Gallery.jsx",
            r#"aria-label <img src="a.png"> <img src="b.png" alt="b"> <img src="c.png">"#,
        )]);

        let result = score(&tree, &settings());
        let alt_issues: Vec<&String> = result
            .issues
            .iter()
            .filter(|i| i.contains("alt attribute"))
            .collect();
        assert_eq!(alt_issues.len(), 2);
        // The alt check only flags, never scores
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_button_block_spans_lines() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file(
            "Form.jsx",
            "aria-label\n<button className=\"btn\">\n  Submit\n</button>",
        )]);

        let result = score(&tree, &settings());
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_semantic_tag_counted_once_per_file() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file(
            "Layout.jsx",
            "aria-label <header></header><footer></footer><nav></nav>",
        )]);

        let result = score(&tree, &settings());
        // aria +2, semantic +1 despite three distinct tags
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_components_scored_alongside_pages() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file("Home.jsx", "aria-label")]);
        tree.components = group(vec![file("Card.jsx", "aria-labelledby")]);

        let result = score(&tree, &settings());
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_score_clamped_to_budget() {
        let mut tree = empty_tree();
        let files = (0..10)
            .map(|i| {
                file(
                    &format!("Page{}.jsx", i),
                    "aria-label <button>x</button> <main>",
                )
            })
            .collect();
        tree.pages = group(files);

        let result = score(&tree, &settings());
        // Raw total would be 50
        assert_eq!(result.score, CATEGORY_MAX_SCORE);
    }
}
