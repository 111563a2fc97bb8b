//! The static article catalog.
//!
//! Everything a slug can resolve to is declared here: the primary article
//! list, display-title overrides for historical slugs, and the hero-image
//! table. All tables are immutable for the lifetime of the process; lookups
//! go through [`crate::resolve`].
//!
//! ## Slugs
//!
//! A primary article has no stored slug. Its URL is `slugify(title)`, so
//! renaming an article moves it. Slugs that do not follow this rule (typos
//! that shipped, retired URLs, merged articles) are never added here as
//! articles; they live in [`TITLE_OVERRIDES`], [`HERO_IMAGES`] and the
//! redirect table in [`crate::redirect`].

use crate::slug::slugify;
use std::collections::HashMap;
use std::sync::LazyLock;

/// URL prefix under which every travel-tips article is served.
pub const TRAVEL_TIPS_ROUTE: &str = "/world-cup-2026-travel-tips";

/// Hero image for slugs with no entry in [`HERO_IMAGES`].
pub const DEFAULT_HERO_IMAGE: &str =
    "/images/travel-tips/World Cup 2026 Travel Tips Illustration.webp";

/// Description for slugs with no article intro to derive one from.
pub const GENERIC_DESCRIPTION: &str = "Expert travel tips and planning advice for the FIFA World Cup 2026 \
     across the USA, Canada, and Mexico.";

/// A heading plus its markdown body, rendered in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A primary article record.
#[derive(Debug)]
pub struct Article {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
    pub faqs: &'static [Faq],
}

impl Article {
    /// Canonical slug, always derived from the title.
    pub fn slug(&self) -> String {
        slugify(self.title)
    }

    /// Site-relative URL of the article page.
    pub fn path(&self) -> String {
        article_path(&self.slug())
    }
}

/// Site-relative URL for a travel-tips slug.
pub fn article_path(slug: &str) -> String {
    format!("{TRAVEL_TIPS_ROUTE}/{slug}")
}

/// Presentation overrides for historical or hand-maintained slugs.
///
/// The title wins over whatever the primary lookup finds. The description
/// is only used when no article intro exists.
#[derive(Debug, Clone, Copy)]
pub struct TitleOverride {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

pub static TITLE_OVERRIDES: &[TitleOverride] = &[
    TitleOverride {
        slug: "world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies",
        title: "World Cup 2026 Budget Guide: Complete Cost Breakdown & Savings Strategies",
        description: Some(
            "What a World Cup 2026 trip really costs, from tickets and flights to beds and \
             beer, and the strategies that cut the total by a third.",
        ),
    },
    // Shown under the itinerary title; the slug also redirects there.
    TitleOverride {
        slug: "heat-safety-gear-checklist",
        title: "World Cup 2026 Itinerary Planning: 1, 2, or 3 Week Sample Itineraries",
        description: None,
    },
    TitleOverride {
        slug: "world-cup-2026-host-cities-guide",
        title: "World Cup 2026 Host City Guide: Which Cities Should You Visit?",
        description: None,
    },
    TitleOverride {
        slug: "best-time-to-book-flights",
        title: "Best Time to Book Flights for World Cup 2026",
        description: None,
    },
];

/// Slug → hero image. Several slugs may share one image.
pub static HERO_IMAGES: &[(&str, &str)] = &[
    (
        "world-cup-2026-host-city-guide-which-cities-should-you-visit",
        "/images/travel-tips/World Cup 2026 Host City Guide Illustration.webp",
    ),
    (
        "world-cup-2026-host-cities-guide",
        "/images/travel-tips/World Cup 2026 Host City Guide Illustration.webp",
    ),
    (
        "world-cup-2026-itinerary-planning-1-2-or-3-week-sample-itineraries",
        "/images/travel-tips/World Cup 2026 Itinerary Planning Illustration.webp",
    ),
    (
        "heat-safety-gear-checklist",
        "/images/travel-tips/World Cup 2026 Itinerary Planning Illustration.webp",
    ),
    (
        "world-cup-2026-budget-guide-complete-cost-breakdown-&-savings-startegies",
        "/images/travel-tips/World Cup 2026 Budget Guide Illustration.webp",
    ),
    (
        "stadium-proximity-strategy",
        "/images/travel-tips/World Cup 2026 Budget Guide Illustration.webp",
    ),
    (
        "world-cup-2026-transportation-guide-getting-between-host-cities",
        "/images/travel-tips/World Cup 2026 Transportation Guide Illustration.webp",
    ),
    (
        "world-cup-2026-accommodation-guide-where-to-stay-near-every-stadium",
        "/images/travel-tips/World Cup 2026 Accommodation Guide Illustration.webp",
    ),
    (
        "world-cup-2026-visa-and-entry-requirements-usa-canada-and-mexico",
        "/images/travel-tips/World Cup 2026 Visa and Entry Illustration.webp",
    ),
    (
        "best-time-to-book-flights-for-world-cup-2026",
        "/images/travel-tips/Best Time to Book Flights Illustration.webp",
    ),
    (
        "best-time-to-book-flights",
        "/images/travel-tips/Best Time to Book Flights Illustration.webp",
    ),
    (
        "world-cup-2026-packing-list-what-to-bring-to-the-stadium",
        "/images/travel-tips/World Cup 2026 Packing List Illustration.webp",
    ),
    (
        "world-cup-2026-safety-guide-staying-safe-in-host-cities",
        "/images/travel-tips/World Cup 2026 Safety Guide Illustration.webp",
    ),
];

pub static ARTICLES: &[Article] = &[
    Article {
        title: "World Cup 2026 Host City Guide: Which Cities Should You Visit?",
        intro: "Sixteen host cities across three countries means no fan can see it all. \
                This guide compares every city on match quality, travel links, cost and \
                atmosphere so you can build a trip around the two or three that suit you.",
        sections: &[
            Section {
                heading: "How to Choose",
                body: "Start with the matches you care about, then cluster by region. \
                       The Western, Central and Eastern clusters keep travel days short.",
            },
            Section {
                heading: "Best for First-Timers",
                body: "New York New Jersey, Toronto and Mexico City combine big-match \
                       allocations with transit that works without a car.",
            },
        ],
        faqs: &[
            Faq {
                question: "How many host cities are there for World Cup 2026?",
                answer: "Sixteen: eleven in the United States, three in Mexico (Mexico City, \
                         Guadalajara and Monterrey) and two in Canada (Toronto and Vancouver).",
            },
            Faq {
                question: "Which host city is best for a short trip?",
                answer: "Pick a city with several group matches and a walkable core, such as \
                         Toronto, Seattle or Mexico City, so a four-night stay can include two games.",
            },
            Faq {
                question: "Can I visit cities in different countries?",
                answer: "Yes. Vancouver and Seattle are a three-hour train apart, and Monterrey \
                         sits a short flight from Houston and Dallas. Check entry rules for each \
                         border before booking.",
            },
        ],
    },
    Article {
        title: "World Cup 2026 Itinerary Planning: 1, 2, or 3 Week Sample Itineraries",
        intro: "Sample one, two and three week routes built around the group stage and the \
                knockout rounds, with realistic travel days and rest built in.",
        sections: &[
            Section {
                heading: "One Week: A Single Cluster",
                body: "Stay inside one regional cluster and catch two or three group matches \
                       without a single flight.",
            },
            Section {
                heading: "Two Weeks: Two Clusters",
                body: "Pair a western and a central cluster, with one flight in the middle of \
                       the trip and a buffer day either side.",
            },
            Section {
                heading: "Three Weeks: Group Stage to Round of 32",
                body: "Follow one team through the group stage, then pivot to the knockout \
                       venues once the bracket is set.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "World Cup 2026 Transportation Guide: Getting Between Host Cities",
        intro: "Distances between host cities are continental. Here is when to fly, when to \
                take the train, and when a rental car actually saves money.",
        sections: &[
            Section {
                heading: "Flying Between Clusters",
                body: "Book domestic legs early and favor morning departures, which suffer \
                       fewer delays during summer storm season.",
            },
            Section {
                heading: "Rail Corridors",
                body: "The Northeast corridor links Boston, New York New Jersey and \
                       Philadelphia. Amtrak Cascades connects Vancouver and Seattle.",
            },
            Section {
                heading: "Getting to the Stadium",
                body: "Most venues run match-day shuttles or transit extensions. Rideshare \
                       pickup zones are often a long walk from the gates.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "World Cup 2026 Accommodation Guide: Where to Stay Near Every Stadium",
        intro: "Hotel prices near stadiums will spike on match days. Staying one transit stop \
                out is usually the best trade between cost and convenience.",
        sections: &[
            Section {
                heading: "Book Refundable, Book Early",
                body: "Reserve refundable rooms as soon as the schedule is known, then rebook \
                       if prices fall.",
            },
            Section {
                heading: "Neighborhoods Over Stadium Districts",
                body: "Many stadiums sit in suburban zones with little nightlife. Stay downtown \
                       and use match-day transit.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "World Cup 2026 Visa & Entry Requirements: USA, Canada & Mexico",
        intro: "Three countries means three sets of entry rules. Check each border you plan to \
                cross well before you book non-refundable travel.",
        sections: &[
            Section {
                heading: "United States",
                body: "Visa Waiver travelers need an approved ESTA. Everyone else needs a visa, \
                       and interview wait times can run to months.",
            },
            Section {
                heading: "Canada",
                body: "Visa-exempt visitors flying in need an eTA. Land arrivals from the \
                       United States do not.",
            },
            Section {
                heading: "Mexico",
                body: "Many nationalities enter visa-free. Holders of a valid US visa can often \
                       enter Mexico without a separate one.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "Best Time to Book Flights for World Cup 2026",
        intro: "Fares for tournament dates will move with the draw. Booking windows, fare alerts \
                and flexible tickets help you avoid paying peak prices.",
        sections: &[
            Section {
                heading: "Before the Draw",
                body: "Book refundable fares into a central hub before team allocations are \
                       known, then adjust.",
            },
            Section {
                heading: "After the Draw",
                body: "Expect a demand spike on routes from qualifying nations within hours of \
                       the draw.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "World Cup 2026 Packing List: What to Bring to the Stadium",
        intro: "Clear bags, sun protection and a charged phone are the essentials. Everything \
                else depends on the venue's rules and the weather.",
        sections: &[
            Section {
                heading: "Stadium Bag Policy",
                body: "Expect a clear-bag rule at every venue. Small clutches are usually the \
                       only exception.",
            },
            Section {
                heading: "Match-Day Essentials",
                body: "Mobile tickets, a power bank, sunscreen, an empty refillable bottle where \
                       allowed, and a light rain layer.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "World Cup 2026 Safety Guide: Staying Safe in Host Cities",
        intro: "Big events draw pickpockets and ticket scams. A few habits keep your trip about \
                the football.",
        sections: &[
            Section {
                heading: "Ticket Scams",
                body: "Buy only through official resale platforms. Screenshots of tickets are \
                       worthless at the gate.",
            },
            Section {
                heading: "Getting Home After Night Matches",
                body: "Plan the return leg before kickoff and keep a backup ride option.",
            },
        ],
        faqs: &[],
    },
    Article {
        title: "Match Day Survival Guide: Heat, Hydration & Stadium Rules",
        intro: "Summer kickoffs in open-air stadiums can be brutal. Plan for heat, hydration \
                and long security lines.",
        sections: &[
            Section {
                heading: "Beat the Heat",
                body: "Several venues are open-air in cities that regularly pass 35°C. Arrive \
                       hydrated and seek shade in the concourse.",
            },
            Section {
                heading: "Security Lines",
                body: "Gates open hours before kickoff. Arriving early is the difference \
                       between the anthem and the second half.",
            },
        ],
        faqs: &[],
    },
];

/// First-occurrence index from derived slug to article.
static ARTICLES_BY_SLUG: LazyLock<HashMap<String, &'static Article>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(ARTICLES.len());
    for article in ARTICLES {
        index.entry(article.slug()).or_insert(article);
    }
    index
});

static HERO_IMAGES_BY_SLUG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(HERO_IMAGES.len());
    for &(slug, image) in HERO_IMAGES {
        index.entry(slug).or_insert(image);
    }
    index
});

static OVERRIDES_BY_SLUG: LazyLock<HashMap<&'static str, &'static TitleOverride>> =
    LazyLock::new(|| {
        let mut index = HashMap::with_capacity(TITLE_OVERRIDES.len());
        for entry in TITLE_OVERRIDES {
            index.entry(entry.slug).or_insert(entry);
        }
        index
    });

/// The first primary article whose derived slug equals `slug`.
pub fn find_article(slug: &str) -> Option<&'static Article> {
    ARTICLES_BY_SLUG.get(slug).copied()
}

pub fn find_override(slug: &str) -> Option<&'static TitleOverride> {
    OVERRIDES_BY_SLUG.get(slug).copied()
}

/// Hero image for a slug. Total: unmatched slugs get [`DEFAULT_HERO_IMAGE`].
pub fn hero_image(slug: &str) -> &'static str {
    HERO_IMAGES_BY_SLUG
        .get(slug)
        .copied()
        .unwrap_or(DEFAULT_HERO_IMAGE)
}
