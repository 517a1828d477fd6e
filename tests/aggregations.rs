use country_facts::engine::{find_by_name, languages, regions, statistics};
use country_facts::Country;

fn country(
    name: &str,
    region: &str,
    population: u64,
    area: f64,
    langs: &[(&str, &str)],
) -> Country {
    Country {
        name: name.into(),
        region: region.into(),
        population,
        area,
        languages: langs
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
        borders: Vec::new(),
        latlng: [0.0, 0.0],
    }
}

fn snapshot() -> Vec<Country> {
    vec![
        country(
            "France",
            "Europe",
            67_000_000,
            551_695.0,
            &[("fra", "French")],
        ),
        country(
            "Germany",
            "Europe",
            83_000_000,
            357_022.0,
            &[("deu", "German")],
        ),
        country(
            "Switzerland",
            "Europe",
            8_700_000,
            41_284.0,
            &[("fra", "French"), ("gsw", "Swiss German"), ("ita", "Italian")],
        ),
        country("Japan", "Asia", 125_000_000, 377_975.0, &[("jpn", "Japanese")]),
    ]
}

#[test]
fn regions_partition_the_snapshot() {
    let data = snapshot();
    let by_region = regions(&data);
    assert_eq!(by_region.len(), 2);

    let europe = &by_region["Europe"];
    assert_eq!(europe.countries, vec!["France", "Germany", "Switzerland"]);
    assert_eq!(europe.total_population, 67_000_000 + 83_000_000 + 8_700_000);

    let asia = &by_region["Asia"];
    assert_eq!(asia.countries, vec!["Japan"]);
    assert_eq!(asia.total_population, 125_000_000);

    // Every country lands under exactly one region.
    let listed: usize = by_region.values().map(|r| r.countries.len()).sum();
    assert_eq!(listed, data.len());
    let summed: u64 = by_region.values().map(|r| r.total_population).sum();
    assert_eq!(summed, data.iter().map(|c| c.population).sum::<u64>());
}

#[test]
fn languages_sum_full_population_per_listing_country() {
    let by_language = languages(&snapshot());

    let french = &by_language["French"];
    assert_eq!(french.countries, vec!["France", "Switzerland"]);
    assert_eq!(french.total_speakers, 67_000_000 + 8_700_000);

    // Switzerland contributes its full population to each language it lists.
    assert_eq!(by_language["Swiss German"].total_speakers, 8_700_000);
    assert_eq!(by_language["Italian"].total_speakers, 8_700_000);
    assert_eq!(by_language["German"].total_speakers, 83_000_000);
}

#[test]
fn empty_language_names_are_skipped() {
    let data = vec![country("Nowhere", "Europe", 5, 1.0, &[("xxx", "")])];
    assert!(languages(&data).is_empty());
}

#[test]
fn statistics_on_two_country_snapshot() {
    let data = vec![
        country(
            "France",
            "Europe",
            67_000_000,
            551_695.0,
            &[("fra", "French")],
        ),
        country(
            "Germany",
            "Europe",
            83_000_000,
            357_022.0,
            &[("deu", "German")],
        ),
    ];
    let stats = statistics(&data);
    assert_eq!(stats.total_countries, 2);
    assert_eq!(stats.largest_country_by_area.as_deref(), Some("France"));
    assert_eq!(
        stats.smallest_country_by_population.as_deref(),
        Some("France")
    );
    // German has 83M aggregate speakers vs 67M for French.
    assert_eq!(stats.most_spoken_language.as_deref(), Some("German"));
}

#[test]
fn statistics_ties_keep_first_occurrence() {
    let data = vec![
        country("Aland", "Europe", 10, 100.0, &[]),
        country("Bland", "Europe", 10, 100.0, &[]),
    ];
    let stats = statistics(&data);
    assert_eq!(stats.largest_country_by_area.as_deref(), Some("Aland"));
    assert_eq!(stats.smallest_country_by_population.as_deref(), Some("Aland"));
    assert_eq!(stats.most_spoken_language, None);
}

#[test]
fn statistics_on_empty_snapshot() {
    let stats = statistics(&[]);
    assert_eq!(stats.total_countries, 0);
    assert_eq!(stats.largest_country_by_area, None);
    assert_eq!(stats.smallest_country_by_population, None);
    assert_eq!(stats.most_spoken_language, None);
}

#[test]
fn language_tie_breaks_on_map_iteration_order() {
    // Both languages total 10; BTreeMap iterates "Aaa" before "Bbb".
    let data = vec![country(
        "Only",
        "Europe",
        10,
        1.0,
        &[("aaa", "Bbb"), ("bbb", "Aaa")],
    )];
    let stats = statistics(&data);
    assert_eq!(stats.most_spoken_language.as_deref(), Some("Aaa"));
}

#[test]
fn by_name_is_case_insensitive() {
    let data = snapshot();
    let lower = find_by_name(&data, "france").unwrap();
    let upper = find_by_name(&data, "FRANCE").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.name, "France");
    assert!(find_by_name(&data, "Atlantis").is_none());
}

#[test]
fn by_name_matches_folded_unicode() {
    let mut data = snapshot();
    data.push(country("Åland Islands", "Europe", 29_000, 1_580.0, &[]));
    assert!(find_by_name(&data, "åland islands").is_some());
    assert!(find_by_name(&data, "ALAND ISLANDS").is_some());
}

#[test]
fn empty_country_contributes_no_languages() {
    let data = vec![
        country("Silent", "Europe", 1_000, 1.0, &[]),
        country("Loud", "Europe", 2_000, 1.0, &[("lou", "Loudish")]),
    ];
    let by_language = languages(&data);
    assert_eq!(by_language.len(), 1);
    assert_eq!(by_language["Loudish"].countries, vec!["Loud"]);
}
