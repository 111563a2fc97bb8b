//! Slug resolution.
//!
//! Maps a canonical slug to the title, description and hero image a page
//! displays. Resolution never fails: an unknown slug still gets a title
//! (rebuilt from the slug itself), the generic description and the default
//! hero image.
//!
//! Precedence for the title:
//!
//! 1. [`catalog::TITLE_OVERRIDES`] entry for the slug
//! 2. the first primary article whose derived slug matches
//! 3. [`slug::title_from_slug`]
//!
//! Redirects are not consulted here; see [`crate::route`] for the ordering.

use crate::catalog::{self, Article, GENERIC_DESCRIPTION};
use crate::slug;
use serde::Serialize;
use tracing::debug;

/// Meta descriptions longer than this are cut at a word boundary.
pub const MAX_DESCRIPTION_LEN: usize = 160;

/// Where a resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    Override,
    Article,
    Synthesized,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub slug: String,
    pub title: String,
    pub title_source: TitleSource,
    pub description: String,
    pub hero_image: &'static str,
    #[serde(skip)]
    pub article: Option<&'static Article>,
}

impl Resolution {
    /// True when neither an article nor an override matched.
    pub fn is_fallback(&self) -> bool {
        self.title_source == TitleSource::Synthesized
    }
}

/// Resolve a slug against the static catalog.
pub fn resolve(slug: &str) -> Resolution {
    let article = catalog::find_article(slug);
    let title_override = catalog::find_override(slug);

    let (title, title_source) = match (title_override, article) {
        (Some(entry), _) => (entry.title.to_string(), TitleSource::Override),
        (None, Some(article)) => (article.title.to_string(), TitleSource::Article),
        (None, None) => (slug::title_from_slug(slug), TitleSource::Synthesized),
    };

    let description = article
        .map(|a| a.intro)
        .filter(|intro| !intro.trim().is_empty())
        .or_else(|| title_override.and_then(|o| o.description))
        .map(summarize)
        .unwrap_or_else(|| GENERIC_DESCRIPTION.to_string());

    if title_source == TitleSource::Synthesized {
        debug!(slug, "no article matched, using synthesized title");
    }

    Resolution {
        slug: slug.to_string(),
        title,
        title_source,
        description,
        hero_image: catalog::hero_image(slug),
        article,
    }
}

/// Collapse whitespace and cut to [`MAX_DESCRIPTION_LEN`] at a word boundary.
pub fn summarize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_DESCRIPTION_LEN {
        return collapsed;
    }
    let mut cut = String::new();
    for word in collapsed.split(' ') {
        // Room for the separator and the ellipsis.
        if cut.chars().count() + word.chars().count() + 4 > MAX_DESCRIPTION_LEN {
            break;
        }
        if !cut.is_empty() {
            cut.push(' ');
        }
        cut.push_str(word);
    }
    if cut.is_empty() {
        // First word alone overflows the limit.
        cut = collapsed.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
    }
    let trimmed = cut.trim_end_matches([',', ';', ':', '.']);
    format!("{trimmed}...")
}
