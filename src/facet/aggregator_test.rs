use super::*;
use crate::catalog::{Environment, Prerogative};
use crate::fixtures::{sample_snapshot, EntryBuilder};

fn facets(state: &FilterState) -> FacetOptions {
    let snapshot = sample_snapshot();
    let index = TextIndex::build(&snapshot);
    aggregate(&snapshot, state, &index)
}

fn labels<T: Clone>(options: &[FacetOption<T>]) -> Vec<(T, usize)> {
    options
        .iter()
        .map(|o| (o.value.clone(), o.software_count))
        .collect()
}

// ========================================
// unfiltered
// ========================================

#[test]
fn unfiltered_counts_every_candidate() {
    let options = facets(&FilterState::new());

    assert_eq!(
        labels(&options.organizations),
        vec![("CNRS".to_string(), 2), ("DINUM".to_string(), 2)]
    );
    assert_eq!(
        labels(&options.categories),
        vec![
            ("email".to_string(), 1),
            ("storage".to_string(), 1),
            ("office".to_string(), 3),
        ]
    );
}

#[test]
fn environment_candidates_skip_unused_values() {
    let options = facets(&FilterState::new());
    assert_eq!(
        labels(&options.environments),
        vec![
            (Environment::Browser, 1),
            (Environment::Mac, 1),
            (Environment::Linux, 2),
            (Environment::Windows, 2),
        ]
    );
    assert_eq!(options.environment_count(Environment::Smartphone), None);
}

#[test]
fn prerogative_facet_includes_derived_prerogative() {
    let options = facets(&FilterState::new());
    assert_eq!(
        labels(&options.prerogatives),
        vec![
            (Prerogative::DoRespectRgaa, 1),
            (Prerogative::IsPresentInSupportContract, 1),
            (Prerogative::IsTestable, 2),
            (Prerogative::IsInstallableOnUserTerminal, 3),
        ]
    );
    assert_eq!(
        options.prerogative_count(Prerogative::IsFromFrenchPublicServices),
        None
    );
}

// ========================================
// self exclusion
// ========================================

#[test]
fn own_filter_is_ignored_for_its_dimension() {
    let mut state = FilterState::new();
    state.organization = Some("CNRS".to_string());
    let options = facets(&state);

    // 組織ファセットは組織フィルタの影響を受けない
    assert_eq!(options.organization_count("CNRS"), Some(2));
    assert_eq!(options.organization_count("DINUM"), Some(2));
}

#[test]
fn other_filters_still_apply() {
    let mut state = FilterState::new();
    state.organization = Some("CNRS".to_string());
    let options = facets(&state);

    assert_eq!(
        labels(&options.categories),
        vec![
            ("storage".to_string(), 0),
            ("email".to_string(), 1),
            ("office".to_string(), 2),
        ]
    );
}

#[test]
fn category_filter_keeps_sibling_counts() {
    let snapshot = crate::catalog::Snapshot::new(vec![
        EntryBuilder::new(1, "NextCloud")
            .categories(&["storage"])
            .organizations(&["DINUM"])
            .environments(&[Environment::Linux])
            .build(),
        EntryBuilder::new(2, "OnlyOffice")
            .categories(&["office"])
            .organizations(&["DINUM"])
            .build(),
    ]);
    let index = TextIndex::build(&snapshot);
    let mut state = FilterState::new();
    state.category = Some("storage".to_string());

    let filtered = filter::apply(snapshot.entries(), &state, &index, None);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].software_id, 1);

    let options = aggregate(&snapshot, &state, &index);
    assert_eq!(options.category_count("office"), Some(1));
    assert_eq!(options.category_count("storage"), Some(1));
    // 他の次元にはカテゴリフィルタが効く
    assert_eq!(options.organization_count("DINUM"), Some(1));
}

#[test]
fn prerogative_facet_ignores_whole_prerogative_filter() {
    let mut state = FilterState::new();
    state.prerogatives.insert(Prerogative::DoRespectRgaa);
    let options = facets(&state);

    assert_eq!(options.prerogative_count(Prerogative::IsTestable), Some(2));
    assert_eq!(options.organization_count("CNRS"), Some(1));
    assert_eq!(options.organization_count("DINUM"), Some(0));
}

#[test]
fn search_applies_to_every_dimension() {
    let mut state = FilterState::new();
    state.search = "office".to_string();
    let options = facets(&state);

    assert_eq!(options.organization_count("DINUM"), Some(1));
    assert_eq!(options.category_count("storage"), Some(0));
    assert_eq!(options.environment_count(Environment::Browser), Some(0));
}

// ========================================
// edge cases
// ========================================

#[test]
fn empty_snapshot_has_no_options() {
    let snapshot = crate::catalog::Snapshot::empty();
    let index = TextIndex::build(&snapshot);
    let options = aggregate(&snapshot, &FilterState::new(), &index);
    assert_eq!(options, FacetOptions::default());
}

#[test]
fn unknown_selected_value_zeroes_other_dimensions() {
    let mut state = FilterState::new();
    state.organization = Some("NOWHERE".to_string());
    let options = facets(&state);

    assert!(options.categories.iter().all(|o| o.software_count == 0));
    assert_eq!(options.organizations.len(), 2);
}

#[test]
fn serializes_in_camel_case() {
    let options = facets(&FilterState::new());
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json["organizations"][0]["softwareCount"], 2);
    assert_eq!(json["prerogatives"][3]["value"], "isInstallableOnUserTerminal");
}
