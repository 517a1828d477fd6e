//! country_facts
//!
//! A lightweight Rust library for fetching, caching, and aggregating country
//! data from a public REST source. Pairs with the `country-facts` CLI.
//!
//! ### Features
//! - One bounded-timeout fetch of the full country dataset, validated as a
//!   whole before anything is cached
//! - Single-slot snapshot cache with a TTL; concurrent cold callers collapse
//!   to one upstream call
//! - Derived views computed on demand from the cached snapshot: paginated
//!   search, by-name lookup, region aggregation, language aggregation, and
//!   global statistics
//!
//! ### Example
//! ```no_run
//! use country_facts::{Client, Engine, SearchQuery, SnapshotCache};
//!
//! let cache = SnapshotCache::new(Client::default());
//! let engine = Engine::new(cache);
//! let page = engine.search(&SearchQuery {
//!     region: Some("Europe".into()),
//!     ..SearchQuery::default()
//! })?;
//! println!("{} matches", page.total);
//! let stats = engine.statistics()?;
//! println!("{:#?}", stats);
//! # Ok::<(), country_facts::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::Client;
pub use cache::{FetchCountries, SnapshotCache};
pub use config::Config;
pub use engine::{Engine, SearchQuery};
pub use error::{Error, Result};
pub use models::{Country, CountryView, LanguageSummary, RegionSummary, SearchPage, Statistics};
