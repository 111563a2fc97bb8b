//! Slug conventions shared by every table in the catalog.
//!
//! Article URLs are derived from titles, never stored separately. The same
//! two functions are used when building the catalog, when resolving an
//! incoming slug, and when synthesizing a title for a slug nothing matches:
//!
//! - `"World Cup 2026 Host City Guide: Which Cities Should You Visit?"`
//!   → `"world-cup-2026-host-city-guide-which-cities-should-you-visit"`
//! - `"Visa & Entry"` → `"visa-and-entry"` (ampersands are spelled out)
//! - `"match-day-tips"` → `"Match Day Tips"` (the reverse, for unknown slugs)

/// Convert a title into its URL slug.
///
/// Lowercases, spells out `&` as `and`, drops every character that is not
/// ASCII alphanumeric, and joins the remaining words with single hyphens.
/// Whitespace and existing hyphens both act as word separators.
pub fn slugify(title: &str) -> String {
    let spelled = title.to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(spelled.len());
    let mut pending_separator = false;

    for c in spelled.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
        // Punctuation vanishes without splitting words: "city's" → "citys"
    }
    slug
}

/// Reconstruct a display title from a slug: split on hyphens, capitalize
/// each token, join with spaces. Empty tokens (from doubled hyphens) are
/// skipped.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(
            slugify("World Cup 2026 Host City Guide: Which Cities Should You Visit?"),
            "world-cup-2026-host-city-guide-which-cities-should-you-visit"
        );
    }

    #[test]
    fn slugify_spells_out_ampersand() {
        assert_eq!(
            slugify("Complete Cost Breakdown & Savings Strategies"),
            "complete-cost-breakdown-and-savings-strategies"
        );
    }

    #[test]
    fn slugify_ampersand_without_spaces_stays_one_word() {
        assert_eq!(slugify("Q&A"), "qanda");
        assert_eq!(slugify("Rock&Roll"), "rockandroll");
    }

    #[test]
    fn slugify_commas_and_numbers() {
        assert_eq!(
            slugify("Itinerary Planning: 1, 2, or 3 Week Sample Itineraries"),
            "itinerary-planning-1-2-or-3-week-sample-itineraries"
        );
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Heat -- Safety   Gear  "), "heat-safety-gear");
    }

    #[test]
    fn slugify_apostrophe_joins_word() {
        assert_eq!(slugify("A Fan's Guide"), "a-fans-guide");
    }

    #[test]
    fn slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        let once = slugify("Best Time to Book Flights for World Cup 2026");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn title_from_slug_capitalizes_tokens() {
        assert_eq!(title_from_slug("match-day-tips"), "Match Day Tips");
    }

    #[test]
    fn title_from_slug_keeps_digits() {
        assert_eq!(title_from_slug("world-cup-2026"), "World Cup 2026");
    }

    #[test]
    fn title_from_slug_skips_empty_tokens() {
        assert_eq!(title_from_slug("-fan--zone-"), "Fan Zone");
    }

    #[test]
    fn title_from_slug_single_token() {
        assert_eq!(title_from_slug("tickets"), "Tickets");
    }
}
