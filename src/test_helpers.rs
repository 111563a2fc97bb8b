//! Shared test utilities for the stadiumport test suite.
//!
//! Builds a whole site into a temporary directory and looks pages up by
//! slug, panicking with the available slugs on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (tmp, report) = build_site();
//! let html = read_page(tmp.path(), "stadium-proximity-strategy");
//! assert!(html.contains("location.replace"));
//!
//! let page = find_page(&report, "world-cup-2026-host-cities-guide");
//! assert!(!page.is_canonical());
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::catalog::TRAVEL_TIPS_ROUTE;
use crate::config::SiteConfig;
use crate::generate::{self, BuildReport, PageRecord};

// =========================================================================
// Fixture setup
// =========================================================================

/// A source directory with one asset, `assets/images/logo.png`.
pub fn setup_source(root: &Path) {
    let images = root.join("assets/images");
    fs::create_dir_all(&images).unwrap();
    fs::write(images.join("logo.png"), b"\x89PNG").unwrap();
    fs::write(root.join("assets/.DS_Store"), b"").unwrap();
}

/// Build the site with the default config into `<tmp>/dist`.
pub fn build_site() -> (TempDir, BuildReport) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    setup_source(&source);
    let report = generate::build(&source, &tmp.path().join("dist"), &SiteConfig::default())
        .unwrap_or_else(|e| panic!("build failed: {e}"));
    (tmp, report)
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Read the generated HTML for a slug. Panics if it was not written.
pub fn read_page(root: &Path, slug: &str) -> String {
    let path = root
        .join("dist")
        .join(TRAVEL_TIPS_ROUTE.trim_start_matches('/'))
        .join(slug)
        .join("index.html");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{} not readable: {e}", path.display()))
}

/// Find a built page by slug. Panics if not found.
pub fn find_page<'a>(report: &'a BuildReport, slug: &str) -> &'a PageRecord {
    report
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = report.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}
