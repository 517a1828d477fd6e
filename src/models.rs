use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw country record as returned by the upstream API.
///
/// Field presence mirrors the validation contract: `name.common`, `region`
/// and `population` are required and fail the whole batch when missing or of
/// the wrong type; everything else defaults when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: RawName,
    pub region: String,
    pub population: u64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub latlng: Vec<f64>,
}

/// Nested `name` object from the upstream payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub common: String,
}

/// Tidy country record used throughout this crate. Identity is the common
/// name, compared case-insensitively for lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    pub population: u64,
    pub area: f64,
    pub languages: BTreeMap<String, String>,
    pub borders: Vec<String>,
    pub latlng: [f64; 2],
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let latlng = match raw.latlng.as_slice() {
            [lat, lng, ..] => [*lat, *lng],
            _ => [0.0, 0.0],
        };
        Self {
            name: raw.name.common,
            region: raw.region,
            population: raw.population,
            area: raw.area.unwrap_or(0.0),
            languages: raw.languages,
            borders: raw.borders,
            latlng,
        }
    }
}

/// Public projection of a [`Country`]: region and area are internal grouping
/// keys and are dropped from the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    pub common_name: String,
    pub population: u64,
    pub languages: BTreeMap<String, String>,
    pub borders: Vec<String>,
    pub latlng: [f64; 2],
}

impl From<&Country> for CountryView {
    fn from(c: &Country) -> Self {
        Self {
            common_name: c.name.clone(),
            population: c.population,
            languages: c.languages.clone(),
            borders: c.borders.clone(),
            latlng: c.latlng,
        }
    }
}

/// One page of search results. `total` counts all matches before pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<CountryView>,
}

/// Per-region aggregate: member names in snapshot order plus summed population.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub countries: Vec<String>,
    pub total_population: u64,
}

/// Per-language aggregate. A country contributes its full population to every
/// language it lists; nothing is divided across languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub countries: Vec<String>,
    pub total_speakers: u64,
}

/// Global statistics over the snapshot. The name fields are `None` only when
/// the snapshot is empty (or, for the language, lists no languages at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_countries: usize,
    pub largest_country_by_area: Option<String>,
    pub smallest_country_by_population: Option<String>,
    pub most_spoken_language: Option<String>,
}
