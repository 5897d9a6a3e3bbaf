//! Data models for the UX auditor.
//!
//! This module contains the core data structures used throughout
//! the application for representing category results, recommendations,
//! grades, and the full audit snapshot.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed point budget per category.
pub const CATEGORY_MAX_SCORE: u32 = 25;

/// The four audited categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Accessibility,
    Consistency,
    Feedback,
    Navigation,
}

impl CategoryKey {
    /// Evaluation order. Issue-list determinism within a run depends on it.
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::Accessibility,
        CategoryKey::Consistency,
        CategoryKey::Feedback,
        CategoryKey::Navigation,
    ];

    /// Display label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::Accessibility => "Accessibility",
            CategoryKey::Consistency => "Consistency",
            CategoryKey::Feedback => "Feedback",
            CategoryKey::Navigation => "Navigation",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKey::Accessibility => write!(f, "accessibility"),
            CategoryKey::Consistency => write!(f, "consistency"),
            CategoryKey::Feedback => write!(f, "feedback"),
            CategoryKey::Navigation => write!(f, "navigation"),
        }
    }
}

/// Priority of a remediation recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Medium,
    High,
}

impl Priority {
    /// Returns the glyph used in the console report.
    pub fn glyph(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟡",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// Scored outcome of a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Display label.
    pub name: String,
    /// Clamped score, `0 <= score <= max_score`.
    pub score: u32,
    /// Fixed per-category budget (25).
    pub max_score: u32,
    /// Detected issues in detection order, truncated for display.
    pub issues: Vec<String>,
}

impl CategoryResult {
    /// Percentage of the budget earned. Zero denominator yields 0.
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            self.score as f64 / self.max_score as f64 * 100.0
        }
    }
}

/// Fixed remediation suggestion for an underperforming category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub recommendation: String,
}

/// Per-category results in evaluation order.
///
/// A struct rather than a map so the persisted JSON keeps a stable
/// key order (accessibility, consistency, feedback, navigation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResults {
    pub accessibility: CategoryResult,
    pub consistency: CategoryResult,
    pub feedback: CategoryResult,
    pub navigation: CategoryResult,
}

impl CategoryResults {
    pub fn get(&self, key: CategoryKey) -> &CategoryResult {
        match key {
            CategoryKey::Accessibility => &self.accessibility,
            CategoryKey::Consistency => &self.consistency,
            CategoryKey::Feedback => &self.feedback,
            CategoryKey::Navigation => &self.navigation,
        }
    }

    /// Iterate categories in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &CategoryResult)> {
        CategoryKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Sum of category scores.
    pub fn total_score(&self) -> u32 {
        self.iter().map(|(_, c)| c.score).sum()
    }

    /// Sum of category budgets (100 for the fixed four categories).
    pub fn total_max(&self) -> u32 {
        self.iter().map(|(_, c)| c.max_score).sum()
    }
}

/// The complete audit snapshot, built once per run and never mutated after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    /// Point in time of the run.
    pub timestamp: DateTime<Local>,
    /// Per-category outcomes.
    pub categories: CategoryResults,
    /// Sum of category scores.
    pub total_score: u32,
    /// Sum of category budgets.
    pub max_score: u32,
    /// Priority-tagged remediation suggestions.
    pub recommendations: Vec<Recommendation>,
}

impl AuditResult {
    /// Overall percentage. Zero denominator yields 0.
    pub fn overall_percentage(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            self.total_score as f64 / self.max_score as f64 * 100.0
        }
    }

    /// Derived letter grade.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.overall_percentage())
    }

    /// The single pass/fail gate exposed to calling pipelines.
    pub fn passed(&self, threshold: f64) -> bool {
        self.overall_percentage() >= threshold
    }
}

/// Letter grade derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    C,
    B,
    BPlus,
    A,
    APlus,
}

impl Grade {
    /// Bucket the percentage, evaluated top-down, first match wins.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            Grade::APlus
        } else if pct >= 80.0 {
            Grade::A
        } else if pct >= 70.0 {
            Grade::BPlus
        } else if pct >= 60.0 {
            Grade::B
        } else {
            Grade::C
        }
    }

    /// Short verdict printed next to the letter.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "excellent",
            Grade::A => "good",
            Grade::BPlus => "fair",
            Grade::B => "needs improvement",
            Grade::C => "needs urgent work",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::APlus => write!(f, "A+"),
            Grade::A => write!(f, "A"),
            Grade::BPlus => write!(f, "B+"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
        }
    }
}
