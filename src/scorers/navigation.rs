//! Navigation scorer.
//!
//! Checks the header component for navigation links, a home link, and a
//! logout control, and the app file for enough route declarations.

use crate::collector::SourceTree;
use crate::config::AuditConfig;
use crate::models::{CategoryKey, CategoryResult};
use crate::scorers::CategoryScore;
use regex::Regex;
use std::sync::OnceLock;

static NAV_LINK: OnceLock<Regex> = OnceLock::new();
static ROUTE_DECL: OnceLock<Regex> = OnceLock::new();

fn nav_link() -> &'static Regex {
    NAV_LINK.get_or_init(|| Regex::new(r#"<Link[^>]*to="[^"]*""#).expect("valid regex"))
}

fn route_decl() -> &'static Regex {
    ROUTE_DECL.get_or_init(|| Regex::new(r#"<Route[^>]*path="[^"]*""#).expect("valid regex"))
}

/// Logout markers, literal and localized.
const LOGOUT_MARKERS: [&str; 2] = ["logout", "로그아웃"];

pub fn score(tree: &SourceTree, settings: &AuditConfig) -> CategoryResult {
    let mut acc = CategoryScore::new();

    if let Some(header) = &tree.header {
        let content = &header.content;
        acc.award(5);

        let link_count = nav_link().find_iter(content).count();
        if link_count >= settings.min_nav_links {
            acc.award(5);
        } else {
            acc.flag(format!("insufficient nav links ({})", link_count));
        }

        if content.contains(r#"to="/""#) || content.contains("to='/'") {
            acc.award(5);
        } else {
            acc.flag("no home link".to_string());
        }

        let lower = content.to_lowercase();
        if LOGOUT_MARKERS.iter().any(|m| lower.contains(m)) {
            acc.award(5);
        }
    } else {
        acc.flag("no header component".to_string());
    }

    if let Some(app) = &tree.app {
        let route_count = route_decl().find_iter(&app.content).count();
        if route_count >= settings.min_routes {
            acc.award(5);
        } else {
            acc.flag(format!("insufficient routes ({})", route_count));
        }
    }

    acc.finish(CategoryKey::Navigation, settings.max_display_issues)
}
