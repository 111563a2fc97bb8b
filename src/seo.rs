//! Page metadata: everything that ends up in the document head.
//!
//! Metadata is built as a plain [`PageMetadata`] value by pure functions,
//! then written out by exactly one adapter, [`render_head`]. Nothing else in
//! the crate emits `<meta>`, `<link rel="canonical">` or JSON-LD.

use crate::catalog::{self, TRAVEL_TIPS_ROUTE};
use crate::config::SiteConfig;
use crate::redirect::RedirectRule;
use crate::resolve::Resolution;
use crate::schema::{self, ArticleData, Crumb, EventData, Venue};
use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use serde_json::Value;

/// Label of the travel-tips section in breadcrumbs and navigation.
pub const TRAVEL_TIPS_LABEL: &str = "Travel Tips";

const TOURNAMENT_VENUES: &[Venue<'static>] = &[
    Venue {
        name: "United States",
        country: "US",
    },
    Venue {
        name: "Canada",
        country: "CA",
    },
    Venue {
        name: "Mexico",
        country: "MX",
    },
];

/// A visible breadcrumb step with a site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Everything written into the document head for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    /// Full `<title>`, site name included.
    pub title: String,
    /// Title without the site suffix, for Open Graph and Twitter.
    pub headline: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: String,
    pub og_type: &'static str,
    pub locale: String,
    pub site_name: String,
    pub twitter_site: Option<String>,
    pub robots: Option<&'static str>,
    /// Absolute URL for an immediate `http-equiv="refresh"`.
    pub refresh: Option<String>,
    pub schemas: Vec<Value>,
}

/// `<title>` text: `"{title} | {site}"`, or just the site name on the home page.
pub fn document_title(title: &str, site_name: &str) -> String {
    if title.is_empty() || title == site_name {
        site_name.to_string()
    } else {
        format!("{title} | {site_name}")
    }
}

/// Home → Travel Tips → article.
pub fn article_breadcrumbs(title: &str, canonical_slug: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new(TRAVEL_TIPS_LABEL, TRAVEL_TIPS_ROUTE),
        Breadcrumb::new(title, catalog::article_path(canonical_slug)),
    ]
}

fn schema_trail(trail: &[Breadcrumb], config: &SiteConfig) -> Vec<Crumb> {
    trail
        .iter()
        .map(|step| Crumb::new(step.name.clone(), config.absolute_url(&step.path)))
        .collect()
}

/// Metadata for an article page.
///
/// `canonical_slug` differs from `resolution.slug` when the slug is an alias
/// of a dedicated body; the canonical link then points at the main URL.
pub fn article_metadata(
    resolution: &Resolution,
    canonical_slug: &str,
    breadcrumbs: &[Breadcrumb],
    config: &SiteConfig,
) -> PageMetadata {
    let canonical_url = config.absolute_url(&catalog::article_path(canonical_slug));
    let og_image = config.absolute_url(resolution.hero_image);
    let logo = config.absolute_url(&config.site.logo);

    let mut schemas = vec![
        schema::breadcrumbs(&schema_trail(breadcrumbs, config)),
        schema::article(&ArticleData {
            headline: &resolution.title,
            description: &resolution.description,
            url: &canonical_url,
            image: &og_image,
            publisher: &config.site.name,
            publisher_logo: &logo,
            locale: &config.site.locale,
        }),
        schema::event(&EventData {
            name: "FIFA World Cup 2026",
            description: "The 23rd FIFA World Cup, played in 16 host cities across the \
                          United States, Canada and Mexico.",
            start_date: "2026-06-11",
            end_date: "2026-07-19",
            url: &canonical_url,
            image: &og_image,
            organizer: "FIFA",
            venues: TOURNAMENT_VENUES,
        }),
    ];
    if let Some(article) = resolution.article {
        schemas.extend(schema::faq(
            article.faqs.iter().map(|f| (f.question, f.answer)),
        ));
    }

    PageMetadata {
        title: document_title(&resolution.title, &config.site.name),
        headline: resolution.title.clone(),
        description: resolution.description.clone(),
        canonical_url,
        og_image,
        og_type: "article",
        locale: config.site.locale.clone(),
        site_name: config.site.name.clone(),
        twitter_site: config.site.twitter.clone(),
        robots: None,
        refresh: None,
        schemas,
    }
}

/// Metadata for a redirect stub: not indexable, canonical and refresh both
/// point at the destination.
pub fn redirect_metadata(rule: &RedirectRule, config: &SiteConfig) -> PageMetadata {
    let target = config.absolute_url(&rule.to);
    let title = if rule.is_retirement() {
        "Page Not Found".to_string()
    } else {
        "Redirecting".to_string()
    };
    PageMetadata {
        title: document_title(&title, &config.site.name),
        headline: title,
        description: catalog::GENERIC_DESCRIPTION.to_string(),
        canonical_url: target.clone(),
        og_image: config.absolute_url(catalog::DEFAULT_HERO_IMAGE),
        og_type: "website",
        locale: config.site.locale.clone(),
        site_name: config.site.name.clone(),
        twitter_site: config.site.twitter.clone(),
        robots: Some("noindex, follow"),
        refresh: Some(target),
        schemas: Vec::new(),
    }
}

/// Metadata for site pages that are not articles (home, listing, 404).
pub fn site_page_metadata(
    title: &str,
    description: &str,
    path: &str,
    breadcrumbs: &[Breadcrumb],
    indexable: bool,
    config: &SiteConfig,
) -> PageMetadata {
    let schemas = if breadcrumbs.len() > 1 {
        vec![schema::breadcrumbs(&schema_trail(breadcrumbs, config))]
    } else {
        Vec::new()
    };
    PageMetadata {
        title: document_title(title, &config.site.name),
        headline: title.to_string(),
        description: description.to_string(),
        canonical_url: config.absolute_url(path),
        og_image: config.absolute_url(catalog::DEFAULT_HERO_IMAGE),
        og_type: "website",
        locale: config.site.locale.clone(),
        site_name: config.site.name.clone(),
        twitter_site: config.site.twitter.clone(),
        robots: (!indexable).then_some("noindex, follow"),
        refresh: None,
        schemas,
    }
}

/// Serialize a schema for embedding in a `<script>` element.
///
/// `</` is escaped so prose containing `</script>` cannot end the element.
fn script_json(schema: &Value) -> String {
    schema.to_string().replace("</", "<\\/")
}

/// Write a [`PageMetadata`] into head markup. The only place head tags are
/// produced.
pub fn render_head(meta: &PageMetadata) -> Markup {
    html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (meta.title) }
        meta name="description" content=(meta.description);
        @if let Some(robots) = meta.robots {
            meta name="robots" content=(robots);
        }
        @if let Some(target) = &meta.refresh {
            meta http-equiv="refresh" content={ "0; url=" (target) };
        }
        link rel="canonical" href=(meta.canonical_url);
        meta property="og:type" content=(meta.og_type);
        meta property="og:site_name" content=(meta.site_name);
        meta property="og:title" content=(meta.headline);
        meta property="og:description" content=(meta.description);
        meta property="og:url" content=(meta.canonical_url);
        meta property="og:image" content=(meta.og_image);
        meta property="og:locale" content=(meta.locale);
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:title" content=(meta.headline);
        meta name="twitter:description" content=(meta.description);
        meta name="twitter:image" content=(meta.og_image);
        @if let Some(handle) = &meta.twitter_site {
            meta name="twitter:site" content=(handle);
        }
        @for schema in &meta.schemas {
            script type="application/ld+json" { (PreEscaped(script_json(schema))) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    const HOST_SLUG: &str = "world-cup-2026-host-city-guide-which-cities-should-you-visit";

    fn host_metadata() -> PageMetadata {
        let config = SiteConfig::default();
        let r = resolve(HOST_SLUG);
        let trail = article_breadcrumbs(&r.title, HOST_SLUG);
        article_metadata(&r, HOST_SLUG, &trail, &config)
    }

    fn schema_types(meta: &PageMetadata) -> Vec<&str> {
        meta.schemas
            .iter()
            .filter_map(|s| s["@type"].as_str())
            .collect()
    }

    #[test]
    fn document_title_appends_site_name() {
        assert_eq!(document_title("Budget", "StadiumPort"), "Budget | StadiumPort");
        assert_eq!(document_title("StadiumPort", "StadiumPort"), "StadiumPort");
        assert_eq!(document_title("", "StadiumPort"), "StadiumPort");
    }

    #[test]
    fn article_metadata_urls_are_absolute() {
        let meta = host_metadata();
        assert_eq!(
            meta.canonical_url,
            format!("https://stadiumport.com/world-cup-2026-travel-tips/{HOST_SLUG}")
        );
        assert_eq!(
            meta.og_image,
            "https://stadiumport.com/images/travel-tips/World%20Cup%202026%20Host%20City%20Guide%20Illustration.webp"
        );
        assert_eq!(meta.og_type, "article");
        assert_eq!(meta.locale, "en_US");
    }

    #[test]
    fn article_metadata_carries_schemas() {
        let meta = host_metadata();
        assert_eq!(
            schema_types(&meta),
            vec!["BreadcrumbList", "Article", "SportsEvent", "FAQPage"]
        );
    }

    #[test]
    fn faq_schema_omitted_without_faqs() {
        let config = SiteConfig::default();
        let slug = "world-cup-2026-packing-list-what-to-bring-to-the-stadium";
        let r = resolve(slug);
        let meta = article_metadata(&r, slug, &article_breadcrumbs(&r.title, slug), &config);
        assert!(!schema_types(&meta).contains(&"FAQPage"));
    }

    #[test]
    fn breadcrumb_schema_ends_at_canonical_url() {
        let meta = host_metadata();
        let items = meta.schemas[0]["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2]["item"], meta.canonical_url.as_str());
    }

    #[test]
    fn alias_canonical_points_at_main_slug() {
        let config = SiteConfig::default();
        let r = resolve("world-cup-2026-host-cities-guide");
        let meta = article_metadata(&r, HOST_SLUG, &article_breadcrumbs(&r.title, HOST_SLUG), &config);
        assert!(meta.canonical_url.ends_with(HOST_SLUG));
    }

    #[test]
    fn base_url_comes_from_config() {
        let config = SiteConfig::default()
            .with_base_url_override(Some("https://preview.example.org".to_string()));
        let r = resolve(HOST_SLUG);
        let meta = article_metadata(&r, HOST_SLUG, &article_breadcrumbs(&r.title, HOST_SLUG), &config);
        assert!(meta.canonical_url.starts_with("https://preview.example.org/"));
        assert!(meta.og_image.starts_with("https://preview.example.org/"));
    }

    #[test]
    fn redirect_metadata_is_noindex_with_refresh() {
        let config = SiteConfig::default();
        let rule = RedirectRule::new("old", "/world-cup-2026-travel-tips/new");
        let meta = redirect_metadata(&rule, &config);
        assert_eq!(meta.robots, Some("noindex, follow"));
        assert_eq!(
            meta.refresh.as_deref(),
            Some("https://stadiumport.com/world-cup-2026-travel-tips/new")
        );
        assert_eq!(meta.canonical_url, meta.refresh.clone().unwrap());
        assert!(meta.schemas.is_empty());
    }

    #[test]
    fn retirement_stub_is_titled_not_found() {
        let config = SiteConfig::default();
        let meta = redirect_metadata(&RedirectRule::new("old", "/404"), &config);
        assert_eq!(meta.headline, "Page Not Found");
    }

    #[test]
    fn site_page_noindex_flag() {
        let config = SiteConfig::default();
        let meta = site_page_metadata("Not Found", "d", "/404", &[], false, &config);
        assert_eq!(meta.robots, Some("noindex, follow"));
        let meta = site_page_metadata("Home", "d", "/", &[], true, &config);
        assert_eq!(meta.robots, None);
        assert!(meta.schemas.is_empty());
    }

    #[test]
    fn render_head_writes_all_tags() {
        let head = render_head(&host_metadata()).into_string();
        assert!(head.contains(
            "<title>World Cup 2026 Host City Guide: Which Cities Should You Visit? | StadiumPort</title>"
        ));
        assert!(head.contains(r#"rel="canonical""#));
        assert!(head.contains(r#"property="og:image""#));
        assert!(head.contains(r#"name="twitter:card""#));
        assert!(head.contains(r#"content="@stadiumport""#));
        assert_eq!(head.matches("application/ld+json").count(), 4);
        assert!(!head.contains("http-equiv"));
        assert!(!head.contains(r#"name="robots""#));
    }

    #[test]
    fn render_head_redirect_has_refresh() {
        let config = SiteConfig::default();
        let meta = redirect_metadata(&RedirectRule::new("old", "/404"), &config);
        let head = render_head(&meta).into_string();
        assert!(head.contains(r#"http-equiv="refresh""#));
        assert!(head.contains("0; url=https://stadiumport.com/404"));
    }

    #[test]
    fn script_json_escapes_closing_tags() {
        let value = serde_json::json!({ "text": "</script><script>alert(1)" });
        let out = script_json(&value);
        assert!(!out.contains("</script>"));
        assert!(out.contains("<\\/script>"));
    }

    #[test]
    fn render_head_escapes_attribute_values() {
        let config = SiteConfig::default();
        let mut meta = site_page_metadata("T", "d", "/", &[], true, &config);
        meta.description = r#"Say "hi" <b>"#.to_string();
        let head = render_head(&meta).into_string();
        assert!(head.contains("&quot;hi&quot;"));
        assert!(!head.contains("<b>"));
    }

    #[test]
    fn render_head_omits_twitter_site_when_handle_is_empty() {
        let overlay: toml::Value = toml::from_str("[site]\ntwitter = \"\"\n").unwrap();
        let config = crate::config::resolve_config(
            crate::config::stock_defaults_value().unwrap(),
            Some(overlay),
            None,
        )
        .unwrap();
        let meta = site_page_metadata("Home", "d", "/", &[], true, &config);
        let head = render_head(&meta).into_string();
        assert!(head.contains(r#"name="twitter:card""#));
        assert!(!head.contains("twitter:site"));
    }
}
