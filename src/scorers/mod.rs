//! Category scorers.
//!
//! Each category is a pure function of the collected source tree: it
//! accumulates fixed point awards from lightweight text-pattern tests,
//! appends issues in detection order, and clamps the running total to
//! the 25-point budget exactly once at the end. The clamp is deliberately
//! not applied per file: over-scoring from one file may spend headroom
//! later files would have used, favoring breadth of distinct signals.

pub mod accessibility;
pub mod consistency;
pub mod feedback;
pub mod navigation;

use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::{CategoryKey, CategoryResult, CategoryResults, CATEGORY_MAX_SCORE};

/// Accumulator shared by all four scorers.
///
/// `award` may push the raw total past the budget; `finish` clamps once
/// and truncates the issue list to the display cap.
#[derive(Debug, Default)]
pub struct CategoryScore {
    raw: u32,
    issues: Vec<String>,
}

impl CategoryScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed point value for a matched rule.
    pub fn award(&mut self, points: u32) {
        self.raw += points;
    }

    /// Record an issue in detection order.
    pub fn flag(&mut self, issue: String) {
        self.issues.push(issue);
    }

    /// Raw total before clamping, for tests and diagnostics.
    #[allow(dead_code)] // Diagnostic accessor
    pub fn raw_score(&self) -> u32 {
        self.raw
    }

    /// Clamp the total and truncate issues for display.
    pub fn finish(mut self, key: CategoryKey, display_cap: usize) -> CategoryResult {
        self.issues.truncate(display_cap);
        CategoryResult {
            name: key.display_name().to_string(),
            score: self.raw.min(CATEGORY_MAX_SCORE),
            max_score: CATEGORY_MAX_SCORE,
            issues: self.issues,
        }
    }
}

/// Run the four scorers in the fixed evaluation order.
///
/// The scorers share no state, so the order only matters for issue-list
/// determinism, not correctness.
pub fn run_all(tree: &SourceTree, settings: &AuditConfig) -> CategoryResults {
    CategoryResults {
        accessibility: accessibility::score(tree, settings),
        consistency: consistency::score(tree, settings),
        feedback: feedback::score(tree, settings),
        navigation: navigation::score(tree, settings),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::collector::{FileGroup, SourceFile, SourceTree};

    pub fn file(name: &str, content: &str) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn group(files: Vec<SourceFile>) -> FileGroup {
        FileGroup {
            exists: true,
            files,
        }
    }

    pub fn empty_tree() -> SourceTree {
        SourceTree {
            pages: FileGroup::absent(),
            components: FileGroup::absent(),
            stylesheet: None,
            header: None,
            app: None,
        }
    }
}
