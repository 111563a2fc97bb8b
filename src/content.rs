//! Article body selection and rendering.
//!
//! A handful of articles have long, hand-written bodies bundled from
//! `articles/*.md`. Each is identified by a [`ContentKey`] and reachable
//! from one or more alias slugs (the canonical slug plus historical ones).
//! Every other slug falls through to [`ContentBlock::Generic`], which renders
//! the resolved article's intro and sections, or placeholder copy when no
//! article resolved.
//!
//! The alias map is built once. Exactly one block is selected per slug.
//!
//! ## Markdown
//!
//! Bodies are trusted, bundled strings rendered with pulldown-cmark.
//! Level-2 headings get stable `id` anchors (slugified heading text) and are
//! collected into a table of contents for the page shell.

use crate::catalog::Article;
use crate::slug::slugify;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html as md_html};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Articles with a dedicated, hand-written body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKey {
    HostCityGuide,
    BudgetGuide,
    ItineraryPlanning,
    HeatSafetyGear,
}

/// A dedicated body and the slugs that select it.
#[derive(Debug)]
pub struct ContentEntry {
    pub key: ContentKey,
    /// The slug search engines should index for this body.
    pub canonical_slug: &'static str,
    /// Every slug that selects this body, canonical included.
    pub aliases: &'static [&'static str],
    pub markdown: &'static str,
}

pub static ENTRIES: &[ContentEntry] = &[
    ContentEntry {
        key: ContentKey::HostCityGuide,
        canonical_slug: "world-cup-2026-host-city-guide-which-cities-should-you-visit",
        aliases: &[
            "world-cup-2026-host-city-guide-which-cities-should-you-visit",
            "world-cup-2026-host-cities-guide",
        ],
        markdown: include_str!("../articles/host-city-guide.md"),
    },
    ContentEntry {
        key: ContentKey::BudgetGuide,
        canonical_slug: "world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies",
        aliases: &["world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies"],
        markdown: include_str!("../articles/budget-guide.md"),
    },
    ContentEntry {
        key: ContentKey::ItineraryPlanning,
        canonical_slug: "world-cup-2026-itinerary-planning-1-2-or-3-week-sample-itineraries",
        aliases: &["world-cup-2026-itinerary-planning-1-2-or-3-week-sample-itineraries"],
        markdown: include_str!("../articles/itinerary-planning.md"),
    },
    // Still selectable when redirects are disabled.
    ContentEntry {
        key: ContentKey::HeatSafetyGear,
        canonical_slug: "heat-safety-gear-checklist",
        aliases: &["heat-safety-gear-checklist"],
        markdown: include_str!("../articles/heat-safety-gear.md"),
    },
];

static BY_ALIAS: LazyLock<HashMap<&'static str, &'static ContentEntry>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for entry in ENTRIES {
        for &alias in entry.aliases {
            map.entry(alias).or_insert(entry);
        }
    }
    map
});

/// Body shown when the slug matched neither a dedicated body nor an article.
const PLACEHOLDER: &str = "We're still writing this guide. In the meantime, browse the \
rest of our [World Cup 2026 travel tips](/world-cup-2026-travel-tips) for planning advice \
on host cities, budgets and getting around.";

/// The body selected for a slug.
#[derive(Debug, Clone, Copy)]
pub enum ContentBlock {
    Dedicated(&'static ContentEntry),
    Generic(Option<&'static Article>),
}

impl ContentBlock {
    pub fn key(&self) -> Option<ContentKey> {
        match self {
            ContentBlock::Dedicated(entry) => Some(entry.key),
            ContentBlock::Generic(_) => None,
        }
    }
}

/// One entry of a page's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

/// Rendered article body.
#[derive(Debug, Clone)]
pub struct RenderedBody {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

pub fn entry_for(slug: &str) -> Option<&'static ContentEntry> {
    BY_ALIAS.get(slug).copied()
}

/// Pick the body for a slug. Dedicated bodies win over the generic renderer.
pub fn select(slug: &str, article: Option<&'static Article>) -> ContentBlock {
    match entry_for(slug) {
        Some(entry) => ContentBlock::Dedicated(entry),
        None => ContentBlock::Generic(article),
    }
}

/// Render the selected block.
pub fn render(block: &ContentBlock) -> RenderedBody {
    match block {
        ContentBlock::Dedicated(entry) => render_markdown(entry.markdown),
        ContentBlock::Generic(Some(article)) => render_markdown(&article_markdown(article)),
        ContentBlock::Generic(None) => render_markdown(PLACEHOLDER),
    }
}

/// Aliases registered by more than one entry. Must stay empty.
pub fn dispatch_conflicts() -> Vec<&'static str> {
    let mut owners: HashMap<&'static str, usize> = HashMap::new();
    for entry in ENTRIES {
        for &alias in entry.aliases {
            *owners.entry(alias).or_default() += 1;
        }
    }
    let mut conflicts: Vec<_> = owners
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(alias, _)| alias)
        .collect();
    conflicts.sort_unstable();
    conflicts
}

/// Markdown for the generic renderer: intro paragraph, then each section.
fn article_markdown(article: &Article) -> String {
    let mut md = String::from(article.intro);
    for section in article.sections {
        md.push_str("\n\n## ");
        md.push_str(section.heading);
        md.push_str("\n\n");
        md.push_str(section.body);
    }
    md
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML, anchoring level-2 headings.
pub fn render_markdown(markdown: &str) -> RenderedBody {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, markdown_options()).collect();
    let mut toc = Vec::new();
    let mut used_ids: HashMap<String, usize> = HashMap::new();

    for i in 0..events.len() {
        let is_h2 = matches!(
            &events[i],
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                id: None,
                ..
            })
        );
        if !is_h2 {
            continue;
        }
        let title = heading_text(&events[i + 1..]);
        let id = unique_id(&slugify(&title), &mut used_ids);
        if let Event::Start(Tag::Heading { id: anchor, .. }) = &mut events[i] {
            *anchor = Some(CowStr::from(id.clone()));
        }
        toc.push(TocEntry { id, title });
    }

    let mut html = String::with_capacity(markdown.len() * 2);
    md_html::push_html(&mut html, events.into_iter());
    RenderedBody { html, toc }
}

/// Plain text of a heading, from the events following its start tag.
fn heading_text(events: &[Event<'_>]) -> String {
    events
        .iter()
        .take_while(|e| !matches!(e, Event::End(TagEnd::Heading(_))))
        .filter_map(|e| match e {
            Event::Text(t) | Event::Code(t) => Some(t.to_string()),
            _ => None,
        })
        .collect()
}

/// `base`, then `base-2`, `base-3`, ... for repeated headings.
fn unique_id(base: &str, used: &mut HashMap<String, usize>) -> String {
    let base = if base.is_empty() { "section" } else { base };
    let count = used.entry(base.to_string()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base.to_string()
    } else {
        format!("{base}-{count}")
    }
}
