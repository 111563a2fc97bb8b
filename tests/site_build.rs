//! End-to-end build of the whole site into a temporary directory.
//!
//! Run with: cargo test --test site_build

use stadiumport::config::{self, SiteConfig};
use stadiumport::generate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TIPS: &str = "world-cup-2026-travel-tips";
const HOST_SLUG: &str = "world-cup-2026-host-city-guide-which-cities-should-you-visit";
const BUDGET_SLUG: &str =
    "world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies";
const ITINERARY_SLUG: &str = "world-cup-2026-itinerary-planning-1-2-or-3-week-sample-itineraries";

fn page(out: &Path, slug: &str) -> String {
    fs::read_to_string(out.join(TIPS).join(slug).join("index.html"))
        .unwrap_or_else(|e| panic!("{slug}: {e}"))
}

fn build(config: &SiteConfig) -> (TempDir, generate::BuildReport) {
    let tmp = TempDir::new().unwrap();
    let report = generate::build(&tmp.path().join("content"), &tmp.path().join("dist"), config)
        .unwrap();
    (tmp, report)
}

#[test]
fn host_city_guide_page() {
    let (tmp, _) = build(&SiteConfig::default());
    let html = page(&tmp.path().join("dist"), HOST_SLUG);
    assert!(html.contains("World Cup 2026 Host City Guide: Which Cities Should You Visit?"));
    assert!(html.contains("World%20Cup%202026%20Host%20City%20Guide%20Illustration.webp"));
    assert_eq!(html.matches(r#"rel="canonical""#).count(), 1);
    assert_eq!(html.matches("<title>").count(), 1);
}

#[test]
fn redirected_slugs_get_stubs_without_bodies() {
    let (tmp, report) = build(&SiteConfig::default());
    let out = tmp.path().join("dist");

    let stub = page(&out, "stadium-proximity-strategy");
    assert!(stub.contains(BUDGET_SLUG));
    assert!(stub.contains("noindex"));
    assert!(!stub.contains("article-body"));

    let retired = page(
        &out,
        "world-cup-2026-budget-guide-complete-cost-breakdown-and-savings-strategies",
    );
    assert!(retired.contains("https://stadiumport.com/404"));

    let heat = page(&out, "heat-safety-gear-checklist");
    assert!(heat.contains(ITINERARY_SLUG));
    assert!(!heat.contains("article-body"));

    assert!(report.pages.iter().all(|p| p.slug != "heat-safety-gear-checklist"));
}

#[test]
fn redirects_file_matches_table_order() {
    let (tmp, _) = build(&SiteConfig::default());
    let redirects = fs::read_to_string(tmp.path().join("dist/_redirects")).unwrap();
    let first = redirects.lines().next().unwrap();
    assert_eq!(
        first,
        format!("/{TIPS}/stadium-proximity-strategy /{TIPS}/{BUDGET_SLUG} 301")
    );
    assert!(redirects.lines().all(|l| l.ends_with(" 301")));
}

#[test]
fn listing_links_canonical_articles_only() {
    let (tmp, _) = build(&SiteConfig::default());
    let listing = fs::read_to_string(tmp.path().join("dist").join(TIPS).join("index.html")).unwrap();
    assert!(listing.contains(&format!("/{TIPS}/{HOST_SLUG}")));
    assert!(listing.contains(&format!("/{TIPS}/{ITINERARY_SLUG}")));
    assert!(!listing.contains("world-cup-2026-host-cities-guide\""));
    assert!(!listing.contains("stadium-proximity-strategy"));
}

#[test]
fn not_found_page_is_noindex() {
    let (tmp, _) = build(&SiteConfig::default());
    let html = fs::read_to_string(tmp.path().join("dist/404.html")).unwrap();
    assert!(html.contains("Page Not Found"));
    assert!(html.contains(r#"content="noindex, follow""#));
}

#[test]
fn base_url_override_reaches_every_artifact() {
    let overlay: toml::Value = toml::from_str(
        r#"
[site]
base_url = "https://example.org"
"#,
    )
    .unwrap();
    let config = config::resolve_config(
        config::stock_defaults_value().unwrap(),
        Some(overlay),
        Some("https://preview.stadiumport.com/".to_string()),
    )
    .unwrap();
    let (tmp, _) = build(&config);
    let out = tmp.path().join("dist");

    assert!(page(&out, HOST_SLUG).contains(&format!(
        r#"<link rel="canonical" href="https://preview.stadiumport.com/{TIPS}/{HOST_SLUG}">"#
    )));
    let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://preview.stadiumport.com/</loc>"));
    assert!(!sitemap.contains("example.org"));
    let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
    assert!(robots.contains("https://preview.stadiumport.com/sitemap.xml"));
}

#[test]
fn config_file_in_source_is_loaded() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("content");
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join("config.toml"),
        r#"
[site]
name = "Matchday Miles"

[[affiliates]]
label = "Rail passes"
url = "https://rail.example.org/"
"#,
    )
    .unwrap();
    let config = config::resolve_config(
        config::stock_defaults_value().unwrap(),
        config::load_raw_config(&source).unwrap(),
        None,
    )
    .unwrap();
    let out = tmp.path().join("dist");
    generate::build(&source, &out, &config).unwrap();

    let html = page(&out, HOST_SLUG);
    assert!(html.contains("| Matchday Miles</title>"));
    assert!(html.contains("Rail passes"));
    assert!(!html.contains("Compare hotels"));
}
