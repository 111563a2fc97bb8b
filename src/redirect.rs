//! Legacy redirect rules.
//!
//! Old article slugs keep working by redirecting to their replacement, or to
//! `/404` when the content was retired on purpose. Rules are an ordered list
//! evaluated once per navigation, before any article lookup. The first rule
//! whose `from` matches wins; a redirect is terminal for that slug.
//!
//! ```text
//! stadium-proximity-strategy  →  /world-cup-2026-travel-tips/world-cup-2026-budget-guide-…
//! world-cup-2026-budget-guide-…-and-savings-strategies  →  /404
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Destination for retired content.
pub const NOT_FOUND_PATH: &str = "/404";

/// Declaration order matters: the first matching rule wins.
static LEGACY_RULES: &[(&str, &str)] = &[
    (
        "stadium-proximity-strategy",
        "/world-cup-2026-travel-tips/world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies",
    ),
    (
        "world-cup-2026-budget-guide-complete-cost-breakdown-and-savings-strategies",
        NOT_FOUND_PATH,
    ),
    (
        "heat-safety-gear-checklist",
        "/world-cup-2026-travel-tips/world-cup-2026-itinerary-planning-1-2-or-3-week-sample-itineraries",
    ),
    (
        "best-time-to-book-flights",
        "/world-cup-2026-travel-tips/best-time-to-book-flights-for-world-cup-2026",
    ),
    (
        "world-cup-2026-budget-guide",
        "/world-cup-2026-travel-tips/world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies",
    ),
    (
        "world-cup-2026-visa-guide",
        "/world-cup-2026-travel-tips/world-cup-2026-visa-and-entry-requirements-usa-canada-and-mexico",
    ),
    ("fan-zone-etiquette", NOT_FOUND_PATH),
];

static LEGACY: LazyLock<RedirectTable> = LazyLock::new(|| {
    RedirectTable::new(
        LEGACY_RULES
            .iter()
            .map(|&(from, to)| RedirectRule::new(from, to)),
    )
});

/// One `old slug → new path` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
}

impl RedirectRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when the rule retires content instead of moving it.
    pub fn is_retirement(&self) -> bool {
        self.to == NOT_FOUND_PATH
    }
}

/// Outcome of evaluating a slug against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectDecision<'a> {
    /// Navigate away; nothing is rendered for the old slug.
    Redirect(&'a RedirectRule),
    /// No rule matched, resolve the slug normally.
    Continue,
}

impl RedirectDecision<'_> {
    pub fn target(&self) -> Option<&str> {
        match self {
            RedirectDecision::Redirect(rule) => Some(&rule.to),
            RedirectDecision::Continue => None,
        }
    }
}

/// An ordered list of redirect rules.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    rules: Vec<RedirectRule>,
}

impl RedirectTable {
    pub fn new(rules: impl IntoIterator<Item = RedirectRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The site's legacy redirect table.
    pub fn legacy() -> &'static RedirectTable {
        &LEGACY
    }

    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// Evaluate `slug` against the rules in declaration order.
    pub fn evaluate(&self, slug: &str) -> RedirectDecision<'_> {
        match self.rules.iter().find(|rule| rule.from == slug) {
            Some(rule) => {
                debug!(slug, to = %rule.to, "legacy redirect");
                RedirectDecision::Redirect(rule)
            }
            None => RedirectDecision::Continue,
        }
    }

    /// Rules that can fire: the first rule for each `from`, in order.
    pub fn effective(&self) -> Vec<&RedirectRule> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .filter(|rule| seen.insert(rule.from.as_str()))
            .collect()
    }

    /// Rules hidden behind an earlier rule with the same `from`.
    pub fn shadowed(&self) -> Vec<&RedirectRule> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .filter(|rule| !seen.insert(rule.from.as_str()))
            .collect()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.rules.iter().any(|rule| rule.from == slug)
    }
}
