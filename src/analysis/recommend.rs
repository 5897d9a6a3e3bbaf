//! Recommendation engine.
//!
//! Categories scoring strictly below the threshold each get exactly one
//! fixed, priority-tagged remediation suggestion from a static table.

use crate::models::{CategoryKey, CategoryResults, Priority, Recommendation};

/// Static lookup: category to (priority, remediation text).
fn fixed_recommendation(key: CategoryKey) -> Recommendation {
    let (priority, text) = match key {
        CategoryKey::Accessibility => (
            Priority::High,
            "Add aria-label attributes and prefer semantic HTML tags",
        ),
        CategoryKey::Consistency => (
            Priority::Medium,
            "Adopt CSS custom properties and shared style components",
        ),
        CategoryKey::Feedback => (
            Priority::High,
            "Add loading spinners, error messages, and success toasts",
        ),
        CategoryKey::Navigation => (
            Priority::Medium,
            "Add breadcrumb and sidebar navigation",
        ),
    };

    Recommendation {
        priority,
        category: key.display_name().to_string(),
        recommendation: text.to_string(),
    }
}

/// Derive recommendations in evaluation order. At most one per category.
pub fn derive(categories: &CategoryResults, threshold: f64) -> Vec<Recommendation> {
    categories
        .iter()
        .filter(|(_, result)| result.percentage() < threshold)
        .map(|(key, _)| fixed_recommendation(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryResult, CATEGORY_MAX_SCORE};

    fn results(scores: [u32; 4]) -> CategoryResults {
        let make = |key: CategoryKey, score: u32| CategoryResult {
            name: key.display_name().to_string(),
            score,
            max_score: CATEGORY_MAX_SCORE,
            issues: Vec::new(),
        };
        CategoryResults {
            accessibility: make(CategoryKey::Accessibility, scores[0]),
            consistency: make(CategoryKey::Consistency, scores[1]),
            feedback: make(CategoryKey::Feedback, scores[2]),
            navigation: make(CategoryKey::Navigation, scores[3]),
        }
    }

    #[test]
    fn test_all_categories_below_threshold() {
        let recs = derive(&results([0, 0, 0, 0]), 60.0);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].category, "Accessibility");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].category, "Consistency");
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[2].category, "Feedback");
        assert_eq!(recs[2].priority, Priority::High);
        assert_eq!(recs[3].category, "Navigation");
        assert_eq!(recs[3].priority, Priority::Medium);
    }

    #[test]
    fn test_no_recommendations_at_or_above_threshold() {
        // 15/25 = 60%, exactly at the threshold: no recommendation
        let recs = derive(&results([15, 25, 20, 15]), 60.0);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_recommendation_iff_strictly_below() {
        // 14/25 = 56% (below), 15/25 = 60% (not below)
        let recs = derive(&results([14, 15, 15, 15]), 60.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, "Accessibility");
    }

    #[test]
    fn test_at_most_one_per_category() {
        let recs = derive(&results([0, 0, 14, 25]), 60.0);
        let feedback_count = recs.iter().filter(|r| r.category == "Feedback").count();
        assert_eq!(feedback_count, 1);
        assert_eq!(recs.len(), 3);
    }
}
