//! Aggregation engine: the derived views over a country snapshot.
//!
//! Every view is a pure function of a `&[Country]` slice; [`Engine`] merely
//! binds those functions to a [`SnapshotCache`], resolving the snapshot first
//! and propagating its error unchanged. Nothing here performs I/O.

use crate::cache::{FetchCountries, SnapshotCache};
use crate::error::{Error, Result};
use crate::models::{Country, CountryView, LanguageSummary, RegionSummary, SearchPage, Statistics};
use std::collections::BTreeMap;

/// Filters and pagination for [`search`]. `page` is 1-based; validating that
/// `page` and `limit` are positive is the request layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub region: Option<String>,
    pub min_population: Option<u64>,
    pub page: usize,
    pub limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            region: None,
            min_population: None,
            page: 1,
            limit: 25,
        }
    }
}

/// Fold a name to its sort/lookup key: ASCII-transliterated and lowercased,
/// so "Åland Islands" keys as "aland islands".
fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Filter, sort and paginate the snapshot.
///
/// Region matching is case-insensitive and exact; the population filter keeps
/// countries with `population >= min_population`. Results are sorted by
/// folded common name ascending (ties keep snapshot order), `total` is the
/// filtered count before pagination, and an out-of-range page yields an empty
/// `data` slice.
pub fn search(countries: &[Country], query: &SearchQuery) -> SearchPage {
    let mut matched: Vec<&Country> = countries
        .iter()
        .filter(|c| {
            query
                .region
                .as_deref()
                .is_none_or(|r| c.region.eq_ignore_ascii_case(r))
        })
        .filter(|c| query.min_population.is_none_or(|min| c.population >= min))
        .collect();
    matched.sort_by_cached_key(|c| fold_key(&c.name));

    let total = matched.len();
    let start = query.page.max(1).saturating_sub(1).saturating_mul(query.limit);
    let data = matched
        .into_iter()
        .skip(start)
        .take(query.limit)
        .map(CountryView::from)
        .collect();
    SearchPage {
        total,
        page: query.page,
        limit: query.limit,
        data,
    }
}

/// Case-insensitive exact lookup by common name; first match wins.
pub fn find_by_name<'a>(countries: &'a [Country], name: &str) -> Option<&'a Country> {
    let key = fold_key(name);
    countries.iter().find(|c| fold_key(&c.name) == key)
}

/// Group the snapshot by region in a single pass. Member lists keep snapshot
/// order; populations are summed per region.
pub fn regions(countries: &[Country]) -> BTreeMap<String, RegionSummary> {
    let mut out: BTreeMap<String, RegionSummary> = BTreeMap::new();
    for c in countries {
        let summary = out.entry(c.region.clone()).or_default();
        summary.countries.push(c.name.clone());
        summary.total_population += c.population;
    }
    out
}

/// Group the snapshot by language display name in a single pass.
///
/// A country is added once per non-empty language it lists and contributes
/// its full population each time; speaker totals are not divided across
/// languages.
pub fn languages(countries: &[Country]) -> BTreeMap<String, LanguageSummary> {
    let mut out: BTreeMap<String, LanguageSummary> = BTreeMap::new();
    for c in countries {
        for lang in c.languages.values() {
            if lang.is_empty() {
                continue;
            }
            let summary = out.entry(lang.clone()).or_default();
            summary.countries.push(c.name.clone());
            summary.total_speakers += c.population;
        }
    }
    out
}

/// Global statistics over the snapshot. All maxima/minima use strict
/// comparisons, so the first occurrence (snapshot order, or map iteration
/// order for languages) wins ties.
pub fn statistics(countries: &[Country]) -> Statistics {
    let mut largest: Option<&Country> = None;
    let mut smallest: Option<&Country> = None;
    for c in countries {
        if largest.is_none_or(|l| c.area > l.area) {
            largest = Some(c);
        }
        if smallest.is_none_or(|s| c.population < s.population) {
            smallest = Some(c);
        }
    }

    let mut most_spoken: Option<(&str, u64)> = None;
    let by_language = languages(countries);
    for (name, summary) in &by_language {
        if most_spoken.is_none_or(|(_, speakers)| summary.total_speakers > speakers) {
            most_spoken = Some((name.as_str(), summary.total_speakers));
        }
    }

    Statistics {
        total_countries: countries.len(),
        largest_country_by_area: largest.map(|c| c.name.clone()),
        smallest_country_by_population: smallest.map(|c| c.name.clone()),
        most_spoken_language: most_spoken.map(|(name, _)| name.to_string()),
    }
}

/// The aggregation engine: derived views bound to a snapshot cache.
pub struct Engine<F = crate::api::Client> {
    cache: SnapshotCache<F>,
}

impl<F: FetchCountries> Engine<F> {
    pub fn new(cache: SnapshotCache<F>) -> Self {
        Self { cache }
    }

    /// Paginated, filtered country listing.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        Ok(search(&self.cache.snapshot()?, query))
    }

    /// Single-country lookup by common name.
    pub fn by_name(&self, name: &str) -> Result<CountryView> {
        let snapshot = self.cache.snapshot()?;
        find_by_name(&snapshot, name)
            .map(CountryView::from)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Region aggregation.
    pub fn regions(&self) -> Result<BTreeMap<String, RegionSummary>> {
        Ok(regions(&self.cache.snapshot()?))
    }

    /// Language aggregation.
    pub fn languages(&self) -> Result<BTreeMap<String, LanguageSummary>> {
        Ok(languages(&self.cache.snapshot()?))
    }

    /// Global statistics.
    pub fn statistics(&self) -> Result<Statistics> {
        Ok(statistics(&self.cache.snapshot()?))
    }
}
