//! JSON-LD structured data builders.
//!
//! Each builder is a pure function from plain data to a schema.org object.
//! They know nothing about slugs or the catalog; [`crate::seo`] decides
//! which payloads a page carries and feeds them absolute URLs.

use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

/// One step of a breadcrumb trail. `url` must be absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `BreadcrumbList` with 1-based positions in trail order.
pub fn breadcrumbs(trail: &[Crumb]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": crumb.url,
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Inputs for an `Article` payload.
#[derive(Debug, Clone)]
pub struct ArticleData<'a> {
    pub headline: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub image: &'a str,
    pub publisher: &'a str,
    pub publisher_logo: &'a str,
    pub locale: &'a str,
}

pub fn article(data: &ArticleData<'_>) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Article",
        "headline": data.headline,
        "description": data.description,
        "image": [data.image],
        "inLanguage": bcp47(data.locale),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": data.url,
        },
        "author": {
            "@type": "Organization",
            "name": data.publisher,
        },
        "publisher": {
            "@type": "Organization",
            "name": data.publisher,
            "logo": {
                "@type": "ImageObject",
                "url": data.publisher_logo,
            },
        },
    })
}

/// A place an event happens in.
#[derive(Debug, Clone, Copy)]
pub struct Venue<'a> {
    pub name: &'a str,
    pub country: &'a str,
}

/// Inputs for an `Event` payload (dates are ISO 8601).
#[derive(Debug, Clone)]
pub struct EventData<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub url: &'a str,
    pub image: &'a str,
    pub organizer: &'a str,
    pub venues: &'a [Venue<'a>],
}

pub fn event(data: &EventData<'_>) -> Value {
    let locations: Vec<Value> = data
        .venues
        .iter()
        .map(|venue| {
            json!({
                "@type": "Place",
                "name": venue.name,
                "address": {
                    "@type": "PostalAddress",
                    "addressCountry": venue.country,
                },
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "SportsEvent",
        "name": data.name,
        "description": data.description,
        "startDate": data.start_date,
        "endDate": data.end_date,
        "eventStatus": "https://schema.org/EventScheduled",
        "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
        "url": data.url,
        "image": [data.image],
        "location": locations,
        "organizer": {
            "@type": "Organization",
            "name": data.organizer,
        },
    })
}

/// `FAQPage` from `(question, answer)` pairs. `None` when there are none,
/// since an empty FAQPage is invalid structured data.
pub fn faq<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<Value> {
    let questions: Vec<Value> = entries
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    if questions.is_empty() {
        return None;
    }
    Some(json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    }))
}

/// `en_US` → `en-US`.
pub(crate) fn bcp47(locale: &str) -> String {
    locale.replace('_', "-")
}
