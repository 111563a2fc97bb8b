//! Consistency checks over the static tables.
//!
//! The catalog, override, hero-image, content and redirect tables are edited
//! by hand and can drift apart. `check` walks them together and reports
//! anything that would make routing ambiguous or send readers nowhere.

use crate::catalog::{self, ARTICLES, HERO_IMAGES, TITLE_OVERRIDES, TRAVEL_TIPS_ROUTE};
use crate::content;
use crate::redirect::{NOT_FOUND_PATH, RedirectTable};
use crate::slug::slugify;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// One inconsistency between the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    /// Two primary titles slugify to the same slug; the later one is unreachable.
    DuplicateArticleSlug { slug: String, title: String },
    /// A primary title produces an empty slug.
    EmptySlug { title: String },
    /// An override would rename a primary article.
    OverrideRenamesArticle { slug: String },
    /// A redirect rule hidden behind an earlier rule for the same slug.
    ShadowedRedirect { from: String, to: String },
    /// A redirect whose destination redirects again.
    RedirectChain { from: String, to: String },
    /// A redirect into the travel-tips section that resolves to no real page.
    DanglingRedirect { from: String, to: String },
    /// A content alias registered by more than one body.
    DispatchConflict { alias: String },
    /// A hero-image entry with an empty path.
    EmptyHeroImage { slug: String },
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckIssue::DuplicateArticleSlug { slug, title } => {
                write!(f, "article {title:?} duplicates slug {slug}")
            }
            CheckIssue::EmptySlug { title } => write!(f, "article {title:?} has an empty slug"),
            CheckIssue::OverrideRenamesArticle { slug } => {
                write!(f, "title override renames primary article {slug}")
            }
            CheckIssue::ShadowedRedirect { from, to } => {
                write!(f, "redirect {from} → {to} is shadowed by an earlier rule")
            }
            CheckIssue::RedirectChain { from, to } => {
                write!(f, "redirect {from} → {to} lands on another redirect")
            }
            CheckIssue::DanglingRedirect { from, to } => {
                write!(f, "redirect {from} → {to} points at no article")
            }
            CheckIssue::DispatchConflict { alias } => {
                write!(f, "content alias {alias} is registered twice")
            }
            CheckIssue::EmptyHeroImage { slug } => write!(f, "hero image for {slug} is empty"),
        }
    }
}

/// Run every check against the site's tables.
pub fn run() -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    check_articles(&mut issues);
    check_overrides(&mut issues);
    check_redirects(RedirectTable::legacy(), &mut issues);
    check_content(&mut issues);
    check_hero_images(&mut issues);
    for issue in &issues {
        warn!(%issue, "table check failed");
    }
    issues
}

fn check_articles(issues: &mut Vec<CheckIssue>) {
    let mut seen = HashSet::new();
    for article in ARTICLES {
        let slug = slugify(article.title);
        if slug.is_empty() {
            issues.push(CheckIssue::EmptySlug {
                title: article.title.to_string(),
            });
        } else if !seen.insert(slug.clone()) {
            issues.push(CheckIssue::DuplicateArticleSlug {
                slug,
                title: article.title.to_string(),
            });
        }
    }
}

fn check_overrides(issues: &mut Vec<CheckIssue>) {
    for entry in TITLE_OVERRIDES {
        let renames = catalog::find_article(entry.slug)
            .is_some_and(|article| article.title != entry.title);
        if renames {
            issues.push(CheckIssue::OverrideRenamesArticle {
                slug: entry.slug.to_string(),
            });
        }
    }
}

/// Redirect-table checks, separate so tests can feed their own table.
pub fn check_redirects(table: &RedirectTable, issues: &mut Vec<CheckIssue>) {
    for rule in table.shadowed() {
        issues.push(CheckIssue::ShadowedRedirect {
            from: rule.from.clone(),
            to: rule.to.clone(),
        });
    }

    let prefix = format!("{TRAVEL_TIPS_ROUTE}/");
    for rule in table.effective() {
        if rule.to == NOT_FOUND_PATH {
            continue;
        }
        let Some(target) = rule.to.strip_prefix(&prefix) else {
            continue;
        };
        if table.contains(target) {
            issues.push(CheckIssue::RedirectChain {
                from: rule.from.clone(),
                to: rule.to.clone(),
            });
        } else if catalog::find_article(target).is_none() && content::entry_for(target).is_none()
        {
            issues.push(CheckIssue::DanglingRedirect {
                from: rule.from.clone(),
                to: rule.to.clone(),
            });
        }
    }
}

fn check_content(issues: &mut Vec<CheckIssue>) {
    for alias in content::dispatch_conflicts() {
        issues.push(CheckIssue::DispatchConflict {
            alias: alias.to_string(),
        });
    }
}

fn check_hero_images(issues: &mut Vec<CheckIssue>) {
    for &(slug, image) in HERO_IMAGES {
        if image.trim().is_empty() {
            issues.push(CheckIssue::EmptyHeroImage {
                slug: slug.to_string(),
            });
        }
    }
}
