//! CLI output formatting for every command.
//!
//! Output is **information-first**: each entity leads with a positional index
//! and its title, and file paths or provenance follow as indented context
//! lines.
//!
//! ## Build
//!
//! ```text
//! Articles
//! 001 World Cup 2026 Host City Guide: Which Cities Should You Visit? → world-cup-2026-travel-tips/world-cup-2026-host-city-guide-which-cities-should-you-visit/index.html
//!     Body: host-city-guide
//! 002 World Cup 2026 Host City Guide: Which Cities Should You Visit? → world-cup-2026-travel-tips/world-cup-2026-host-cities-guide/index.html
//!     Canonical: world-cup-2026-host-city-guide-which-cities-should-you-visit
//!
//! Redirects
//! 001 stadium-proximity-strategy → /world-cup-2026-travel-tips/...
//!
//! Site
//!     Home → index.html
//!     Listing → world-cup-2026-travel-tips/index.html
//!     Not found → 404.html
//!     Stylesheet → style.3f9a1c07de.css
//!
//! Generated 13 pages, 7 redirect stubs, 12 sitemap URLs
//! ```
//!
//! ## Check
//!
//! ```text
//! 2 issues
//! 001 redirect a → /x points at no article
//! 002 content alias b is registered twice
//! ```
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.

use crate::catalog::TRAVEL_TIPS_ROUTE;
use crate::check::CheckIssue;
use crate::generate::BuildReport;
use crate::resolve::TitleSource;
use crate::route::Route;
use serde_json::json;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn page_file(slug: &str) -> String {
    format!("{}/{}/index.html", TRAVEL_TIPS_ROUTE.trim_start_matches('/'), slug)
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a site build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Articles".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page_file(&page.slug)
        ));
        if !page.is_canonical() {
            lines.push(format!("    Canonical: {}", page.canonical_slug));
        }
        if let Some(key) = page.content_key {
            // ContentKey serializes to its kebab-case name.
            let name = serde_json::to_value(key)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            lines.push(format!("    Body: {name}"));
        }
        if page.title_source == TitleSource::Synthesized {
            lines.push("    Title: derived from slug".to_string());
        }
    }

    if !report.redirects.is_empty() {
        lines.push(String::new());
        lines.push("Redirects".to_string());
        for (i, rule) in report.redirects.iter().enumerate() {
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                rule.from,
                rule.to
            ));
        }
    }

    lines.push(String::new());
    lines.push("Site".to_string());
    lines.push("    Home \u{2192} index.html".to_string());
    lines.push(format!(
        "    Listing \u{2192} {}/index.html",
        TRAVEL_TIPS_ROUTE.trim_start_matches('/')
    ));
    lines.push("    Not found \u{2192} 404.html".to_string());
    lines.push(format!("    Stylesheet \u{2192} {}", report.stylesheet));
    if report.assets_copied > 0 {
        lines.push(format!(
            "    Assets: {}",
            plural(report.assets_copied, "file", "files")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.redirects.len(), "redirect stub", "redirect stubs"),
        plural(report.sitemap_urls, "sitemap URL", "sitemap URLs"),
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
    println!("Site written to {}", report.output_dir.display());
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(issues: &[CheckIssue]) -> Vec<String> {
    if issues.is_empty() {
        return vec!["No issues found".to_string()];
    }
    let mut lines = vec![plural(issues.len(), "issue", "issues")];
    for (i, issue) in issues.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), issue));
    }
    lines
}

pub fn print_check_output(issues: &[CheckIssue]) {
    for line in format_check_output(issues) {
        println!("{}", line);
    }
}

// ============================================================================
// Resolve
// ============================================================================

/// JSON description of a routing decision.
pub fn resolve_json(slug: &str, route: &Route<'_>) -> serde_json::Value {
    match route {
        Route::Redirect(rule) => json!({
            "slug": slug,
            "route": "redirect",
            "to": rule.to,
            "retired": rule.is_retirement(),
        }),
        Route::Page(view) => json!({
            "slug": slug,
            "route": "page",
            "resolution": view.resolution,
            "canonical_slug": view.canonical_slug,
            "canonical_url": view.metadata.canonical_url,
            "content": view.content_key,
            "toc": view.body.toc,
        }),
    }
}

pub fn format_resolve_output(slug: &str, route: &Route<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&resolve_json(slug, route))
}

pub fn print_resolve_output(slug: &str, route: &Route<'_>) -> Result<(), serde_json::Error> {
    println!("{}", format_resolve_output(slug, route)?);
    Ok(())
}
