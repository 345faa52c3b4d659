use super::*;
use crate::catalog::Snapshot;
use crate::fixtures::{arb_entries, arb_filter_state, ids};
use proptest::prelude::*;

proptest! {
    /// 同じ状態を 2 回適用しても同じ結果になる
    #[test]
    fn prop_filtering_is_idempotent(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let first = ids(&apply(snapshot.entries(), &state, &index, None));
        let second = ids(&apply(snapshot.entries(), &state, &index, None));
        prop_assert_eq!(first, second);
    }

    /// 特権を追加しても結果は増えない
    #[test]
    fn prop_adding_prerogative_never_grows_result(
        entries in arb_entries(),
        state in arb_filter_state(),
        extra in proptest::sample::select(Prerogative::all())
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let before = ids(&apply(snapshot.entries(), &state, &index, None));

        let mut narrowed = state.clone();
        narrowed.prerogatives.insert(extra);
        let after = ids(&apply(snapshot.entries(), &narrowed, &index, None));

        prop_assert!(after.len() <= before.len());
        prop_assert!(after.iter().all(|id| before.contains(id)));
    }

    /// 特権フィルタはすべての特権を満たすエントリにのみマッチする
    #[test]
    fn prop_prerogative_filter_is_conjunctive(
        entries in arb_entries(),
        prerogatives in crate::fixtures::arb_prerogatives()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let state = FilterState { prerogatives: prerogatives.clone(), ..FilterState::new() };
        let result = ids(&apply(snapshot.entries(), &state, &index, None));

        for entry in snapshot.entries() {
            let expected = prerogatives.iter().all(|p| entry.has_prerogative(*p));
            prop_assert_eq!(result.contains(&entry.software_id), expected);
        }
    }

    /// 結果はスナップショットの部分列（順序維持）
    #[test]
    fn prop_result_preserves_snapshot_order(
        entries in arb_entries(),
        state in arb_filter_state()
    ) {
        let snapshot = Snapshot::new(entries);
        let index = TextIndex::build(&snapshot);
        let result = ids(&apply(snapshot.entries(), &state, &index, None));
        let mut sorted = result.clone();
        sorted.sort();
        prop_assert_eq!(result, sorted);
    }
}
