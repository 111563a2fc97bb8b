//! # StadiumPort
//!
//! Static site builder for the StadiumPort travel guides to the FIFA World
//! Cup 2026. Every guide lives under `/world-cup-2026-travel-tips/{slug}`,
//! and the same slug pipeline serves the whole site build, the `resolve`
//! and `render` commands, and the tests.
//!
//! # Architecture: One Slug, One Pass
//!
//! ```text
//! slug ─▶ redirect table ─(match)─▶ redirect stub                    (terminal)
//!              │
//!              ▼
//!          resolve (title, description, hero) ─▶ content ─▶ metadata ─▶ page
//! ```
//!
//! All lookup tables are static and read-only. Resolution never fails: an
//! unknown slug still gets a title built from its words, the generic
//! description and the default hero image.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Title → slug normalization and the reverse title fallback |
//! | [`catalog`] | Static tables: primary articles, title overrides, hero images |
//! | [`redirect`] | Ordered legacy redirect table, first match wins |
//! | [`resolve`] | Slug → title, description and hero image with fixed precedence |
//! | [`content`] | Dedicated markdown bodies by alias, generic article rendering |
//! | [`schema`] | JSON-LD builders: breadcrumbs, article, sports event, FAQ |
//! | [`seo`] | Page metadata values and the single head renderer |
//! | [`route`] | The per-slug pipeline tying the above together |
//! | [`generate`] | Maud page shell and the whole-site build |
//! | [`check`] | Consistency checks across the static tables |
//! | [`config`] | `config.toml` loading, merging, validation and CSS generation |
//! | [`output`] | CLI output formatting for each command |
//!
//! # Design Decisions
//!
//! ## Static Tables Over a Content Directory
//!
//! Articles, overrides and redirects are Rust statics indexed once through
//! `LazyLock` maps. Misspelled slugs are kept verbatim where published URLs
//! depend on them (`...-savings-startegies`), and [`check`] catches tables
//! that drift apart.
//!
//! ## Redirects Before Everything
//!
//! A redirected slug never renders a body. Some slugs are both redirected and
//! given a title override; the override is only observable with redirects
//! switched off ([`route::RouteContext::without_redirects`]).
//!
//! ## One Head Writer
//!
//! Pages build a [`seo::PageMetadata`] value and [`seo::render_head`] is the
//! only code that turns it into tags, so no page can emit two canonical links.

pub mod catalog;
pub mod check;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod redirect;
pub mod resolve;
pub mod route;
pub mod schema;
pub mod seo;
pub mod slug;

#[cfg(test)]
pub(crate) mod test_helpers;
