//! Report aggregation.
//!
//! Runs the four scorers over a collected tree, sums their outcomes,
//! and assembles the final immutable [`AuditResult`].

use crate::analysis::recommend;
use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::AuditResult;
use crate::scorers;
use chrono::Local;
use tracing::debug;

/// Score a collected tree end to end.
///
/// Pure except for the timestamp: running twice against an unchanged
/// tree yields identical categories, totals, and recommendations.
pub fn run_audit(tree: &SourceTree, settings: &AuditConfig) -> AuditResult {
    let categories = scorers::run_all(tree, settings);
    let recommendations = recommend::derive(&categories, settings.recommend_below);

    let total_score = categories.total_score();
    let max_score = categories.total_max();
    debug!(total_score, max_score, "audit scored");

    AuditResult {
        timestamp: Local::now(),
        categories,
        total_score,
        max_score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grade, Priority};
    use crate::scorers::test_support::{empty_tree, file, group};

    fn settings() -> AuditConfig {
        AuditConfig::default()
    }

    #[test]
    fn test_empty_tree_scenario() {
        // Empty source tree: every category zero, all four recommendations,
        // grade C, gate failure.
        let result = run_audit(&empty_tree(), &settings());

        assert_eq!(result.total_score, 0);
        assert_eq!(result.max_score, 100);
        assert_eq!(result.overall_percentage(), 0.0);
        assert_eq!(result.grade(), Grade::C);
        assert!(!result.passed(settings().pass_percentage));

        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.recommendations[0].priority, Priority::High);
        assert_eq!(result.recommendations[1].priority, Priority::Medium);
        assert_eq!(
            result.categories.feedback.issues,
            vec!["no pages directory"]
        );
    }

    #[test]
    fn test_totals_match_category_sums() {
        let mut tree = empty_tree();
        tree.pages = group(vec![file(
            "Home.jsx",
            "aria-label loading error success hover <button>x</button> <main>",
        )]);
        tree.stylesheet = Some(file("global.css", "var(--x)"));

        let result = run_audit(&tree, &settings());
        let summed: u32 = result.categories.iter().map(|(_, c)| c.score).sum();
        assert_eq!(result.total_score, summed);
        assert_eq!(result.max_score, 100);
    }

    #[test]
    fn test_idempotent_over_unchanged_tree() {
        let mut tree = empty_tree();
        tree.pages = group(vec![
            file("Home.jsx", "aria-label loading"),
            file("Scan.jsx", "<img src=\"x.png\"> catch"),
        ]);
        tree.header = Some(file("Header.jsx", r#"<Link to="/">H</Link> logout"#));

        let first = run_audit(&tree, &settings());
        let second = run_audit(&tree, &settings());

        assert_eq!(first.categories, second.categories);
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn test_strong_header_earns_no_navigation_recommendation() {
        let mut tree = empty_tree();
        tree.header = Some(file(
            "Header.jsx",
            r#"<Link to="/">Home</Link><Link to="/a">A</Link><Link to="/b">B</Link> logout"#,
        ));

        let result = run_audit(&tree, &settings());
        assert_eq!(result.categories.navigation.score, 20);
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.category == "Navigation"));
    }
}
