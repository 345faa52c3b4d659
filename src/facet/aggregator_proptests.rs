use super::*;
use crate::catalog::Snapshot;
use crate::filter::FilterUpdate;
use crate::fixtures::{arb_entries, arb_filter_state};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    /// 組織の件数は「その組織を選んだ場合」の絞り込み件数と一致する
    #[test]
    fn prop_organization_count_matches_selection(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let options = aggregate(&snapshot, &state, &index);

        prop_assert_eq!(options.organizations.len(), snapshot.organizations().len());
        for option in &options.organizations {
            let selected = state
                .clone()
                .with(FilterUpdate::Organization(Some(option.value.clone())));
            let expected = filter::apply(snapshot.entries(), &selected, &index, None).len();
            prop_assert_eq!(option.software_count, expected);
        }
    }

    /// カテゴリの件数は「そのカテゴリを選んだ場合」の絞り込み件数と一致する
    #[test]
    fn prop_category_count_matches_selection(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let options = aggregate(&snapshot, &state, &index);

        prop_assert_eq!(options.categories.len(), snapshot.categories().len());
        for option in &options.categories {
            let selected = state
                .clone()
                .with(FilterUpdate::Category(Some(option.value.clone())));
            let expected = filter::apply(snapshot.entries(), &selected, &index, None).len();
            prop_assert_eq!(option.software_count, expected);
        }
    }

    /// 動作環境の件数は「その環境を選んだ場合」の絞り込み件数と一致する
    #[test]
    fn prop_environment_count_matches_selection(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let options = aggregate(&snapshot, &state, &index);

        prop_assert_eq!(options.environments.len(), snapshot.environments().len());
        for option in &options.environments {
            let selected = state
                .clone()
                .with(FilterUpdate::Environment(Some(option.value)));
            let expected = filter::apply(snapshot.entries(), &selected, &index, None).len();
            prop_assert_eq!(option.software_count, expected);
        }
    }

    /// 特権の件数は「その特権だけを選んだ場合」の絞り込み件数と一致する
    #[test]
    fn prop_prerogative_count_matches_selection(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let options = aggregate(&snapshot, &state, &index);

        prop_assert_eq!(options.prerogatives.len(), snapshot.prerogatives().len());
        for option in &options.prerogatives {
            let selected = state
                .clone()
                .with(FilterUpdate::Prerogatives(BTreeSet::from([option.value])));
            let expected = filter::apply(snapshot.entries(), &selected, &index, None).len();
            prop_assert_eq!(option.software_count, expected);
        }
    }

    /// 各次元の選択肢は件数の昇順に並ぶ
    #[test]
    fn prop_options_are_sorted_by_count(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let options = aggregate(&snapshot, &state, &index);

        let counts = |v: Vec<usize>| v.windows(2).all(|w| w[0] <= w[1]);
        prop_assert!(counts(options.organizations.iter().map(|o| o.software_count).collect()));
        prop_assert!(counts(options.categories.iter().map(|o| o.software_count).collect()));
        prop_assert!(counts(options.environments.iter().map(|o| o.software_count).collect()));
        prop_assert!(counts(options.prerogatives.iter().map(|o| o.software_count).collect()));
    }
}
