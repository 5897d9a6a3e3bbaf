//! Console report generation and JSON persistence.
//!
//! The console layout is fixed: total line, grade, one line per category
//! with a 10-segment bar, up to two inline issues per category, and a
//! recommendations section with priority glyphs. The JSON snapshot is the
//! canonical machine-readable contract other tooling consumes, so its
//! field names and nesting stay stable.

use crate::models::AuditResult;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Issues shown inline per category in the console report.
const CONSOLE_ISSUES_PER_CATEGORY: usize = 2;

/// A failure of the report sink. Kept separate from quality-gate failures
/// so a calling pipeline can tell "scored too low" from "could not persist".
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize audit result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the fixed-layout console report.
pub fn render_console(result: &AuditResult) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(60));
    out.push_str("\nUX AUDIT RESULT\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    let pct = result.overall_percentage();
    out.push_str(&format!(
        "\nTotal: {}/{} ({:.1}%)\n",
        result.total_score, result.max_score, pct
    ));

    let grade = result.grade();
    out.push_str(&format!("Grade: {} ({})\n", grade, grade.label()));

    out.push_str("\n[Category scores]\n");
    for (_, category) in result.categories.iter() {
        let category_pct = category.percentage();
        out.push_str(&format!(
            "  {}: {}/{} ({:.0}%) {}\n",
            category.name,
            category.score,
            category.max_score,
            category_pct,
            progress_bar(category_pct)
        ));

        for issue in category.issues.iter().take(CONSOLE_ISSUES_PER_CATEGORY) {
            out.push_str(&format!("    ⚠ {}\n", issue));
        }
    }

    if !result.recommendations.is_empty() {
        out.push_str("\n[Recommendations]\n");
        for rec in &result.recommendations {
            out.push_str(&format!(
                "  {} [{}] {}\n",
                rec.priority.glyph(),
                rec.category,
                rec.recommendation
            ));
        }
    }

    out.push('\n');
    out.push_str(&"=".repeat(60));
    out.push('\n');

    out
}

/// 10-segment filled/unfilled bar proportional to the percentage.
fn progress_bar(pct: f64) -> String {
    let filled = ((pct / 10.0) as usize).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Serialize the snapshot as pretty-printed JSON.
pub fn generate_json(result: &AuditResult) -> Result<String, SinkError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Persist the snapshot. Written atomically: serialized to a sibling
/// temp file, then renamed into place.
pub fn save_report(result: &AuditResult, path: &Path) -> Result<(), SinkError> {
    let content = generate_json(result)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &content).map_err(|source| SinkError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Report saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CategoryKey, CategoryResult, CategoryResults, Priority, Recommendation, CATEGORY_MAX_SCORE,
    };
    use chrono::Local;
    use tempfile::TempDir;

    fn category(key: CategoryKey, score: u32, issues: Vec<&str>) -> CategoryResult {
        CategoryResult {
            name: key.display_name().to_string(),
            score,
            max_score: CATEGORY_MAX_SCORE,
            issues: issues.into_iter().map(String::from).collect(),
        }
    }

    fn sample_result() -> AuditResult {
        let categories = CategoryResults {
            accessibility: category(
                CategoryKey::Accessibility,
                10,
                vec![
                    "Home.jsx: missing aria-label attributes",
                    "Scan.jsx: image missing alt attribute",
                    "Scan.jsx: image missing alt attribute",
                ],
            ),
            consistency: category(CategoryKey::Consistency, 25, vec![]),
            feedback: category(CategoryKey::Feedback, 18, vec![]),
            navigation: category(CategoryKey::Navigation, 20, vec!["insufficient routes (3)"]),
        };
        AuditResult {
            timestamp: Local::now(),
            total_score: categories.total_score(),
            max_score: categories.total_max(),
            categories,
            recommendations: vec![Recommendation {
                priority: Priority::High,
                category: "Accessibility".to_string(),
                recommendation: "Add aria-label attributes and prefer semantic HTML tags"
                    .to_string(),
            }],
        }
    }

    #[test]
    fn test_progress_bar_segments() {
        assert_eq!(progress_bar(0.0), "░░░░░░░░░░");
        assert_eq!(progress_bar(100.0), "██████████");
        assert_eq!(progress_bar(80.0), "████████░░");
        // 72% truncates to 7 filled segments
        assert_eq!(progress_bar(72.0), "███████░░░");
    }

    #[test]
    fn test_render_console_layout() {
        let rendered = render_console(&sample_result());

        assert!(rendered.contains("Total: 73/100 (73.0%)"));
        assert!(rendered.contains("Grade: B+ (fair)"));
        assert!(rendered.contains("Accessibility: 10/25 (40%)"));
        assert!(rendered.contains("Consistency: 25/25 (100%) ██████████"));
        assert!(rendered.contains("🔴 [Accessibility]"));
    }

    #[test]
    fn test_console_shows_at_most_two_issues_per_category() {
        let rendered = render_console(&sample_result());
        let issue_lines = rendered.lines().filter(|l| l.contains('⚠')).count();
        // 3 accessibility issues + 1 navigation issue, but only 2 + 1 shown
        assert_eq!(issue_lines, 3);
    }

    #[test]
    fn test_json_schema_fields() {
        let json = generate_json(&sample_result()).unwrap();

        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"categories\""));
        assert!(json.contains("\"accessibility\""));
        assert!(json.contains("\"max_score\""));
        assert!(json.contains("\"total_score\""));
        assert!(json.contains("\"recommendations\""));
        assert!(json.contains("\"priority\": \"HIGH\""));
        assert!(json.contains("\"recommendation\""));
    }

    #[test]
    fn test_json_category_key_order() {
        let json = generate_json(&sample_result()).unwrap();
        let a = json.find("\"accessibility\"").unwrap();
        let c = json.find("\"consistency\"").unwrap();
        let f = json.find("\"feedback\"").unwrap();
        let n = json.find("\"navigation\"").unwrap();
        assert!(a < c && c < f && f < n);
    }

    #[test]
    fn test_save_report_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ux_audit_result.json");

        save_report(&sample_result(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"total_score\": 73"));
        // No temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_report_failure_is_sink_error() {
        let err = save_report(
            &sample_result(),
            Path::new("/no/such/dir/ux_audit_result.json"),
        )
        .unwrap_err();
        assert!(matches!(err, SinkError::Write { .. }));
    }
}
