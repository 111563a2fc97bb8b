//! The per-slug routing pipeline.
//!
//! ```text
//! slug ─▶ redirect table ─(match)─▶ Route::Redirect            (terminal)
//!              │ continue
//!              ▼
//!          resolve ─▶ content ─▶ metadata ─▶ Route::Page(PageView)
//! ```
//!
//! The redirect check always runs first and a match ends the pipeline, so
//! no body is produced for a redirected slug. Metadata is built from the
//! final resolution, after the content block has fixed the canonical slug.

use crate::config::SiteConfig;
use crate::content::{self, ContentBlock, ContentKey, RenderedBody};
use crate::redirect::{RedirectDecision, RedirectRule, RedirectTable};
use crate::resolve::{self, Resolution};
use crate::seo::{self, Breadcrumb, PageMetadata};

/// Inputs shared by every routed slug.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    pub config: &'a SiteConfig,
    pub redirects: &'a RedirectTable,
    /// When false the redirect table is skipped and every slug renders.
    /// Lets tests observe the page a redirected slug would have shown.
    pub follow_redirects: bool,
}

impl<'a> RouteContext<'a> {
    /// Context using the site's legacy redirect table.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            redirects: RedirectTable::legacy(),
            follow_redirects: true,
        }
    }

    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}

/// A fully resolved article page, ready for the shell.
#[derive(Debug, Clone)]
pub struct PageView {
    pub resolution: Resolution,
    /// Slug search engines should index for this body.
    pub canonical_slug: String,
    pub content_key: Option<ContentKey>,
    pub metadata: PageMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub body: RenderedBody,
}

impl PageView {
    /// True when this slug is the URL that should be indexed.
    pub fn is_canonical(&self) -> bool {
        self.resolution.slug == self.canonical_slug
    }
}

#[derive(Debug, Clone)]
pub enum Route<'a> {
    Redirect(&'a RedirectRule),
    Page(Box<PageView>),
}

impl Route<'_> {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Route::Redirect(rule) => Some(&rule.to),
            Route::Page(_) => None,
        }
    }

    pub fn page(&self) -> Option<&PageView> {
        match self {
            Route::Redirect(_) => None,
            Route::Page(view) => Some(&**view),
        }
    }
}

/// Route one slug through the pipeline.
pub fn route<'a>(slug: &str, ctx: &RouteContext<'a>) -> Route<'a> {
    if ctx.follow_redirects {
        if let RedirectDecision::Redirect(rule) = ctx.redirects.evaluate(slug) {
            return Route::Redirect(rule);
        }
    }
    Route::Page(Box::new(build_page(slug, ctx.config)))
}

/// Resolve, select content and build metadata for a slug that did not
/// redirect.
pub fn build_page(slug: &str, config: &SiteConfig) -> PageView {
    let resolution = resolve::resolve(slug);
    let block = content::select(slug, resolution.article);
    let canonical_slug = match &block {
        ContentBlock::Dedicated(entry) => entry.canonical_slug.to_string(),
        ContentBlock::Generic(_) => slug.to_string(),
    };
    let body = content::render(&block);
    let breadcrumbs = seo::article_breadcrumbs(&resolution.title, &canonical_slug);
    let metadata = seo::article_metadata(&resolution, &canonical_slug, &breadcrumbs, config);

    PageView {
        canonical_slug,
        content_key: block.key(),
        metadata,
        breadcrumbs,
        body,
        resolution,
    }
}
