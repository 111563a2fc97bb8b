//! HTML site generation.
//!
//! Renders every routable slug through [`route::route`] and writes the
//! resulting static site.
//!
//! ## Generated Pages
//!
//! - **Article pages** (`/world-cup-2026-travel-tips/{slug}/index.html`): hero,
//!   table of contents, body, FAQ accordion and partner links
//! - **Redirect stubs** (same layout): meta refresh, `location.replace` and a
//!   plain link, for every effective redirect rule
//! - **Listing page** (`/world-cup-2026-travel-tips/index.html`): every
//!   canonical article
//! - **Home page** (`/index.html`) and **not-found page** (`/404.html`)
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── sitemap.xml                # canonical URLs only
//! ├── robots.txt
//! ├── _redirects                 # host-level 301s, table order
//! ├── style.3f9a1c07de.css       # fingerprinted stylesheet
//! ├── toc.js
//! ├── images/...                 # copied from <source>/assets/
//! └── world-cup-2026-travel-tips/
//!     ├── index.html
//!     ├── world-cup-2026-host-city-guide-which-cities-should-you-visit/
//!     │   └── index.html
//!     └── stadium-proximity-strategy/
//!         └── index.html         # redirect stub
//! ```
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/toc.js`: active-section highlighting in the table of contents
//!
//! Pages are rendered in parallel on the rayon pool, then written in plan
//! order once every page has rendered.

use crate::catalog::{self, TITLE_OVERRIDES, TRAVEL_TIPS_ROUTE};
use crate::config::{self, ColorConfig, ConfigError, SiteConfig};
use crate::content::{self, ContentKey, TocEntry};
use crate::redirect::{RedirectRule, RedirectTable};
use crate::resolve::TitleSource;
use crate::route::{self, PageView, Route, RouteContext};
use crate::schema;
use crate::seo::{self, Breadcrumb, PageMetadata, TRAVEL_TIPS_LABEL};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Asset walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const TOC_JS: &str = include_str!("../static/toc.js");

/// Hex digits of the content hash kept in the stylesheet file name.
const FINGERPRINT_LEN: usize = 10;

const LISTING_TITLE: &str = "World Cup 2026 Travel Tips";
const NOT_FOUND_TITLE: &str = "Page Not Found";

/// One page written by the build.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub slug: String,
    pub title: String,
    pub title_source: TitleSource,
    pub content_key: Option<ContentKey>,
    pub canonical_slug: String,
}

impl PageRecord {
    pub fn is_canonical(&self) -> bool {
        self.slug == self.canonical_slug
    }
}

/// Summary of a finished build, consumed by [`crate::output`].
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<PageRecord>,
    pub redirects: Vec<RedirectRule>,
    pub stylesheet: String,
    pub sitemap_urls: usize,
    pub assets_copied: usize,
}

// ============================================================================
// Stylesheet
// ============================================================================

/// The site stylesheet with its content-addressed file name.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    pub file_name: String,
    pub contents: String,
}

impl Stylesheet {
    pub fn new(colors: &ColorConfig) -> Self {
        let contents = format!("{}\n\n{}", config::generate_color_css(colors), CSS_STATIC);
        let digest = format!("{:x}", Sha256::digest(contents.as_bytes()));
        let file_name = format!("style.{}.css", &digest[..FINGERPRINT_LEN]);
        Self {
            file_name,
            contents,
        }
    }

    pub fn href(&self) -> String {
        format!("/{}", self.file_name)
    }
}

/// What every rendered page needs besides its own data.
#[derive(Debug, Clone, Copy)]
struct Shell<'a> {
    config: &'a SiteConfig,
    css_href: &'a str,
}

// ============================================================================
// Site plan and build
// ============================================================================

/// Every slug the build renders, in output order: primary articles, then
/// dedicated-body aliases and title overrides, then redirected slugs.
pub fn site_slugs(redirects: &RedirectTable) -> Vec<String> {
    let primary = catalog::ARTICLES.iter().map(|a| a.slug());
    let aliases = content::ENTRIES
        .iter()
        .flat_map(|e| e.aliases.iter())
        .chain(TITLE_OVERRIDES.iter().map(|o| &o.slug))
        .map(|s| s.to_string());
    let redirected = redirects.effective().into_iter().map(|r| r.from.clone());

    let mut seen = HashSet::new();
    primary
        .chain(aliases)
        .chain(redirected)
        .filter(|slug| !slug.is_empty() && seen.insert(slug.clone()))
        .collect()
}

enum Rendered<'a> {
    Article { view: Box<PageView>, html: String },
    Redirect { rule: &'a RedirectRule, html: String },
}

impl Rendered<'_> {
    fn slug(&self) -> &str {
        match self {
            Rendered::Article { view, .. } => &view.resolution.slug,
            Rendered::Redirect { rule, .. } => &rule.from,
        }
    }

    fn html(&self) -> &str {
        match self {
            Rendered::Article { html, .. } | Rendered::Redirect { html, .. } => html,
        }
    }
}

/// Build the whole site from `source` into `output`.
pub fn build(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
) -> Result<BuildReport, GenerateError> {
    config.validate()?;
    fs::create_dir_all(output)?;

    let stylesheet = Stylesheet::new(&config.colors);
    let css_href = stylesheet.href();
    let shell = Shell {
        config,
        css_href: &css_href,
    };
    let ctx = RouteContext::new(config);
    let slugs = site_slugs(ctx.redirects);

    let rendered: Vec<Rendered<'_>> = slugs
        .par_iter()
        .map(|slug| match route::route(slug, &ctx) {
            Route::Redirect(rule) => Rendered::Redirect {
                rule,
                html: render_redirect_stub(rule, shell).into_string(),
            },
            Route::Page(view) => {
                let html = render_article_page(&view, shell).into_string();
                Rendered::Article { view, html }
            }
        })
        .collect();
    info!(pages = rendered.len(), "rendered travel-tips pages");

    for page in &rendered {
        let path = output
            .join(TRAVEL_TIPS_ROUTE.trim_start_matches('/'))
            .join(page.slug())
            .join("index.html");
        write_file(&path, page.html())?;
    }

    let views: Vec<&PageView> = rendered
        .iter()
        .filter_map(|r| match r {
            Rendered::Article { view, .. } => Some(&**view),
            Rendered::Redirect { .. } => None,
        })
        .collect();
    let listed: Vec<&PageView> = views
        .iter()
        .copied()
        .filter(|v| v.is_canonical() && !v.resolution.is_fallback())
        .collect();

    let listing_dir = output.join(TRAVEL_TIPS_ROUTE.trim_start_matches('/'));
    write_file(
        &listing_dir.join("index.html"),
        &render_listing_page(&listed, shell).into_string(),
    )?;
    write_file(
        &output.join("index.html"),
        &render_home_page(&listed, shell).into_string(),
    )?;
    write_file(
        &output.join("404.html"),
        &render_not_found_page(shell).into_string(),
    )?;

    let mut sitemap_paths = vec!["/".to_string(), TRAVEL_TIPS_ROUTE.to_string()];
    sitemap_paths.extend(listed.iter().map(|v| catalog::article_path(&v.canonical_slug)));
    write_file(
        &output.join("sitemap.xml"),
        &sitemap_xml(&sitemap_paths, config),
    )?;
    write_file(&output.join("robots.txt"), &robots_txt(config))?;
    write_file(&output.join("_redirects"), &redirects_file(ctx.redirects))?;
    write_file(&output.join(&stylesheet.file_name), &stylesheet.contents)?;
    write_file(&output.join("toc.js"), TOC_JS)?;

    let assets_copied = copy_assets(&source.join("assets"), output)?;

    let pages = views
        .iter()
        .map(|v| PageRecord {
            slug: v.resolution.slug.clone(),
            title: v.resolution.title.clone(),
            title_source: v.resolution.title_source,
            content_key: v.content_key,
            canonical_slug: v.canonical_slug.clone(),
        })
        .collect();
    let redirects = rendered
        .iter()
        .filter_map(|r| match r {
            Rendered::Redirect { rule, .. } => Some((*rule).clone()),
            Rendered::Article { .. } => None,
        })
        .collect();

    info!(output = %output.display(), "site generated");
    Ok(BuildReport {
        output_dir: output.to_path_buf(),
        pages,
        redirects,
        stylesheet: stylesheet.file_name,
        sitemap_urls: sitemap_paths.len(),
        assets_copied,
    })
}

/// Full HTML for one slug, as the build would write it.
pub fn render_slug(slug: &str, ctx: &RouteContext<'_>) -> String {
    let stylesheet = Stylesheet::new(&ctx.config.colors);
    let css_href = stylesheet.href();
    let shell = Shell {
        config: ctx.config,
        css_href: &css_href,
    };
    match route::route(slug, ctx) {
        Route::Redirect(rule) => render_redirect_stub(rule, shell).into_string(),
        Route::Page(view) => render_article_page(&view, shell).into_string(),
    }
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), "wrote");
    Ok(())
}

/// Copy `assets_dir` into the output root. A missing directory copies nothing.
fn copy_assets(assets_dir: &Path, output: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let hidden = relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
        if hidden {
            continue;
        }
        let dest = output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied += 1;
    }
    debug!(copied, "copied assets");
    Ok(copied)
}

// ============================================================================
// Host files
// ============================================================================

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// `sitemap.xml` listing the given site-relative paths.
pub fn sitemap_xml(paths: &[String], config: &SiteConfig) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str("  <url><loc>");
        xml.push_str(&xml_escape(&config.absolute_url(path)));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("/sitemap.xml")
    )
}

/// Host-level redirect rules, one `from to 301` line per effective rule.
pub fn redirects_file(table: &RedirectTable) -> String {
    table
        .effective()
        .into_iter()
        .map(|rule| format!("{} {} 301\n", catalog::article_path(&rule.from), rule.to))
        .collect()
}

// ============================================================================
// HTML Components
// ============================================================================

/// Site-relative URL safe for an attribute value.
fn href_path(path: &str) -> String {
    path.replace(' ', "%20")
}

/// Renders the base HTML document. The head comes from [`seo::render_head`].
fn base_document(
    meta: &PageMetadata,
    shell: Shell<'_>,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(schema::bcp47(&meta.locale)) {
            head {
                (seo::render_head(meta))
                link rel="stylesheet" href=(shell.css_href);
            }
            body class=[body_class] {
                (site_header(shell.config))
                (content)
                (site_footer(shell.config))
            }
        }
    }
}

fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-logo href="/" { (config.site.name) }
            nav.site-nav aria-label="Main" {
                ul {
                    li { a href="/" { "Home" } }
                    li { a href=(TRAVEL_TIPS_ROUTE) { (TRAVEL_TIPS_LABEL) } }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            p {
                "© " (config.site.name)
                " · Independent travel guides for the FIFA World Cup 2026. "
                "Not affiliated with FIFA."
            }
            p {
                a href=(TRAVEL_TIPS_ROUTE) { "All travel tips" }
                " · "
                a href="/sitemap.xml" { "Sitemap" }
            }
        }
    }
}

/// Visible breadcrumbs. The last step is the current page and is not a link.
fn breadcrumb_nav(trail: &[Breadcrumb]) -> Markup {
    html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            ol {
                @for (i, step) in trail.iter().enumerate() {
                    @if i + 1 == trail.len() {
                        li aria-current="page" { (step.name) }
                    } @else {
                        li { a href=(href_path(&step.path)) { (step.name) } }
                    }
                }
            }
        }
    }
}

fn hero(title: &str, intro: &str, image: &str) -> Markup {
    html! {
        section.hero {
            img.hero-image src=(href_path(image)) alt=(title) fetchpriority="high";
            div.hero-text {
                h1 { (title) }
                p.hero-intro { (intro) }
            }
        }
    }
}

fn table_of_contents(toc: &[TocEntry]) -> Markup {
    html! {
        @if !toc.is_empty() {
            nav.toc aria-label="On this page" data-toc {
                h2.toc-title { "On this page" }
                ol {
                    @for entry in toc {
                        li { a href={ "#" (entry.id) } { (entry.title) } }
                    }
                }
            }
        }
    }
}

fn faq_section(view: &PageView) -> Markup {
    let faqs = view.resolution.article.map(|a| a.faqs).unwrap_or_default();
    html! {
        @if !faqs.is_empty() {
            section.faq id="faq" {
                h2 { "Frequently Asked Questions" }
                @for faq in faqs {
                    details.faq-item {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
        }
    }
}

fn affiliate_block(config: &SiteConfig) -> Markup {
    html! {
        @if !config.affiliates.is_empty() {
            aside.affiliates aria-label="Plan your trip" {
                h2 { "Plan your trip" }
                ul {
                    @for partner in &config.affiliates {
                        li {
                            a href=(partner.url) rel="sponsored noopener" target="_blank" {
                                (partner.label)
                            }
                            @if !partner.blurb.is_empty() {
                                span.affiliate-blurb { (partner.blurb) }
                            }
                        }
                    }
                }
                p.affiliate-disclosure {
                    "We may earn a commission when you book through these links."
                }
            }
        }
    }
}

fn article_card(view: &PageView) -> Markup {
    html! {
        li.article-card {
            a href=(catalog::article_path(&view.canonical_slug)) {
                img src=(href_path(view.resolution.hero_image)) alt="" loading="lazy";
                span.article-card-title { (view.resolution.title) }
            }
            p { (view.resolution.description) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_article_page(view: &PageView, shell: Shell<'_>) -> Markup {
    let r = &view.resolution;
    let content = html! {
        main.article-page {
            (breadcrumb_nav(&view.breadcrumbs))
            (hero(&r.title, &r.description, r.hero_image))
            div.article-layout {
                (table_of_contents(&view.body.toc))
                article.article-body {
                    (PreEscaped(&view.body.html))
                    (faq_section(view))
                }
            }
            (affiliate_block(shell.config))
        }
        @if !view.body.toc.is_empty() {
            script src="/toc.js" defer {}
        }
    };
    base_document(&view.metadata, shell, Some("article"), content)
}

/// JavaScript string literal, safe inside a `<script>` element.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string())
        .to_string()
        .replace("</", "<\\/")
}

/// Redirect stub for hosts that cannot issue real redirects. The meta refresh
/// covers clients without scripting; the link covers clients without either.
fn render_redirect_stub(rule: &RedirectRule, shell: Shell<'_>) -> Markup {
    let meta = seo::redirect_metadata(rule, shell.config);
    let target = &meta.canonical_url;
    let content = html! {
        main.redirect-page {
            h1 { (meta.headline) }
            @if rule.is_retirement() {
                p { "This guide has been retired." }
                p {
                    a href=(target) { "Continue" }
                    " or browse "
                    a href=(TRAVEL_TIPS_ROUTE) { "all travel tips" }
                    "."
                }
            } @else {
                p { "This page has moved to " a href=(target) { (target) } "." }
            }
        }
        script { (PreEscaped(format!("location.replace({});", js_string(target)))) }
    };
    base_document(&meta, shell, Some("redirect"), content)
}

fn listing_breadcrumbs() -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new(TRAVEL_TIPS_LABEL, TRAVEL_TIPS_ROUTE),
    ]
}

fn render_listing_page(articles: &[&PageView], shell: Shell<'_>) -> Markup {
    let trail = listing_breadcrumbs();
    let meta = seo::site_page_metadata(
        LISTING_TITLE,
        catalog::GENERIC_DESCRIPTION,
        TRAVEL_TIPS_ROUTE,
        &trail,
        true,
        shell.config,
    );
    let content = html! {
        main.listing-page {
            (breadcrumb_nav(&trail))
            (hero(LISTING_TITLE, catalog::GENERIC_DESCRIPTION, catalog::DEFAULT_HERO_IMAGE))
            ul.article-grid {
                @for view in articles {
                    (article_card(view))
                }
            }
        }
    };
    base_document(&meta, shell, Some("listing"), content)
}

fn render_home_page(articles: &[&PageView], shell: Shell<'_>) -> Markup {
    let site = &shell.config.site.name;
    let meta = seo::site_page_metadata(
        site,
        catalog::GENERIC_DESCRIPTION,
        "/",
        &[],
        true,
        shell.config,
    );
    let content = html! {
        main.home-page {
            section.home-intro {
                h1 { (site) }
                p { (catalog::GENERIC_DESCRIPTION) }
                a.button href=(TRAVEL_TIPS_ROUTE) { "Browse all travel tips" }
            }
            ul.article-grid {
                @for view in articles.iter().take(3) {
                    (article_card(view))
                }
            }
        }
    };
    base_document(&meta, shell, Some("home"), content)
}

fn render_not_found_page(shell: Shell<'_>) -> Markup {
    let meta = seo::site_page_metadata(
        NOT_FOUND_TITLE,
        "The page you were looking for does not exist or has been retired.",
        "/404",
        &[],
        false,
        shell.config,
    );
    let content = html! {
        main.not-found-page {
            h1 { (NOT_FOUND_TITLE) }
            p { "The page you were looking for does not exist or has been retired." }
            p {
                a href="/" { "Home" }
                " · "
                a href=(TRAVEL_TIPS_ROUTE) { "All travel tips" }
            }
        }
    };
    base_document(&meta, shell, Some("not-found"), content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::RedirectRule;
    use crate::test_helpers::*;

    const HOST_SLUG: &str = "world-cup-2026-host-city-guide-which-cities-should-you-visit";

    fn render(slug: &str) -> String {
        let config = SiteConfig::default();
        render_slug(slug, &RouteContext::new(&config))
    }

    #[test]
    fn stylesheet_name_is_fingerprinted() {
        let sheet = Stylesheet::new(&ColorConfig::default());
        let hash = sheet
            .file_name
            .strip_prefix("style.")
            .and_then(|s| s.strip_suffix(".css"))
            .unwrap();
        assert_eq!(hash.len(), FINGERPRINT_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(sheet.contents.contains("--color-bg"));
    }

    #[test]
    fn stylesheet_name_changes_with_colors() {
        let mut colors = ColorConfig::default();
        let before = Stylesheet::new(&colors).file_name;
        colors.light.accent = "#ff0000".to_string();
        assert_ne!(Stylesheet::new(&colors).file_name, before);
    }

    #[test]
    fn site_slugs_cover_articles_aliases_and_redirects() {
        let table = RedirectTable::legacy();
        let slugs = site_slugs(table);
        assert_eq!(slugs[0], catalog::ARTICLES[0].slug());
        assert!(slugs.iter().any(|s| s == "world-cup-2026-host-cities-guide"));
        for rule in table.effective() {
            assert!(slugs.contains(&rule.from), "{} missing", rule.from);
        }
        let unique: HashSet<&String> = slugs.iter().collect();
        assert_eq!(unique.len(), slugs.len());
    }

    #[test]
    fn article_page_has_single_head_and_shell() {
        let html = render(HOST_SLUG);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en-US">"#));
        assert_eq!(html.matches(r#"rel="canonical""#).count(), 1);
        assert!(html.contains("site-header"));
        assert!(html.contains(r#"aria-label="Breadcrumb""#));
        assert!(html.contains(r#"aria-current="page""#));
        assert!(html.contains("World Cup 2026 Host City Guide Illustration.webp".replace(' ', "%20").as_str()));
        assert!(html.contains(r#"src="/toc.js""#));
    }

    #[test]
    fn article_page_renders_faq_accordion() {
        let html = render(HOST_SLUG);
        assert!(html.contains("Frequently Asked Questions"));
        assert!(html.contains("<details class=\"faq-item\">"));
    }

    #[test]
    fn affiliate_links_are_sponsored() {
        let html = render(HOST_SLUG);
        assert!(html.contains(r#"rel="sponsored noopener""#));
        assert!(html.contains("Compare hotels"));
    }

    #[test]
    fn affiliate_block_omitted_when_empty() {
        let mut config = SiteConfig::default();
        config.affiliates.clear();
        let html = render_slug(HOST_SLUG, &RouteContext::new(&config));
        assert!(!html.contains("sponsored"));
    }

    #[test]
    fn fallback_page_renders_placeholder_without_toc_script() {
        let html = render("stadium-food-guide");
        assert!(html.contains("<h1>Stadium Food Guide</h1>"));
        assert!(html.contains("still writing this guide"));
        assert!(!html.contains("toc.js"));
    }

    #[test]
    fn redirect_stub_has_refresh_script_and_link() {
        let html = render("stadium-proximity-strategy");
        let target = "https://stadiumport.com/world-cup-2026-travel-tips/world-cup-2026-budget-guide-complete-cost-breakdown-&amp;-savings-startegies";
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(html.contains(r#"content="noindex, follow""#));
        assert!(html.contains(&format!(r#"<a href="{target}">"#)));
        assert!(html.contains("location.replace(\"https://stadiumport.com/world-cup-2026-travel-tips/world-cup-2026-budget-guide"));
        assert!(!html.contains("article-body"));
    }

    #[test]
    fn retirement_stub_offers_listing() {
        let html = render("fan-zone-etiquette");
        assert!(html.contains("This guide has been retired."));
        assert!(html.contains("https://stadiumport.com/404"));
    }

    #[test]
    fn js_string_escapes_script_end() {
        assert_eq!(js_string("a</script>"), r#""a<\/script>""#);
        assert_eq!(js_string("say \"hi\""), r#""say \"hi\"""#);
    }

    #[test]
    fn sitemap_escapes_ampersands() {
        let config = SiteConfig::default();
        let xml = sitemap_xml(&["/a-&-b".to_string()], &config);
        assert!(xml.contains("<loc>https://stadiumport.com/a-&amp;-b</loc>"));
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let txt = robots_txt(&SiteConfig::default());
        assert!(txt.contains("Sitemap: https://stadiumport.com/sitemap.xml"));
    }

    #[test]
    fn redirects_file_keeps_table_order_and_skips_shadowed() {
        let table = RedirectTable::new([
            RedirectRule::new("b", "/404"),
            RedirectRule::new("a", "/world-cup-2026-travel-tips/x"),
            RedirectRule::new("b", "/elsewhere"),
        ]);
        assert_eq!(
            redirects_file(&table),
            "/world-cup-2026-travel-tips/b /404 301\n\
             /world-cup-2026-travel-tips/a /world-cup-2026-travel-tips/x 301\n"
        );
    }

    #[test]
    fn breadcrumb_nav_links_all_but_last() {
        let html = breadcrumb_nav(&listing_breadcrumbs()).into_string();
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<li aria-current="page">Travel Tips</li>"#));
    }

    // =========================================================================
    // Whole-site build
    // =========================================================================

    #[test]
    fn build_writes_pages_and_stubs() {
        let (tmp, report) = build_site();
        assert!(read_page(tmp.path(), HOST_SLUG).contains("Which Cities Should You Visit?"));
        assert!(read_page(tmp.path(), "stadium-proximity-strategy").contains("location.replace"));
        assert_eq!(report.redirects.len(), RedirectTable::legacy().effective().len());
        assert!(find_page(&report, HOST_SLUG).is_canonical());
    }

    #[test]
    fn build_writes_host_files() {
        let (tmp, report) = build_site();
        let out = tmp.path().join("dist");
        for file in ["index.html", "404.html", "sitemap.xml", "robots.txt", "_redirects", "toc.js"] {
            assert!(out.join(file).is_file(), "{file} missing");
        }
        assert!(out.join(&report.stylesheet).is_file());
        assert!(out.join("world-cup-2026-travel-tips/index.html").is_file());
    }

    #[test]
    fn sitemap_lists_only_canonical_pages() {
        let (tmp, report) = build_site();
        let xml = fs::read_to_string(tmp.path().join("dist/sitemap.xml")).unwrap();
        assert!(xml.contains(HOST_SLUG));
        assert!(!xml.contains("stadium-proximity-strategy"));
        assert!(!xml.contains("world-cup-2026-host-cities-guide<"));
        assert_eq!(xml.matches("<loc>").count(), report.sitemap_urls);
    }

    #[test]
    fn build_copies_assets() {
        let (tmp, report) = build_site();
        assert_eq!(report.assets_copied, 1);
        assert!(tmp.path().join("dist/images/logo.png").is_file());
    }

    #[test]
    fn build_without_assets_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let report = build(
            &tmp.path().join("missing"),
            &tmp.path().join("dist"),
            &SiteConfig::default(),
        )
        .unwrap();
        assert_eq!(report.assets_copied, 0);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.site.base_url = "stadiumport.com".to_string();
        let result = build(tmp.path(), &tmp.path().join("dist"), &config);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }
}
