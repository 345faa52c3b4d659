use super::*;
use crate::fixtures::{arb_entries, arb_sort_key};
use proptest::prelude::*;

proptest! {
    /// 同じキー値のエントリは入力順を保つ
    #[test]
    fn prop_sort_is_stable(
        entries in arb_entries(),
        key in arb_sort_key()
    ) {
        let mut refs: Vec<&CatalogEntry> = entries.iter().collect();
        sort_entries(&mut refs, Some(key), None);

        for pair in refs.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert_ne!(key.compare(a, b), Ordering::Greater);
            if key.compare(a, b) == Ordering::Equal {
                // ID は入力順に振られている
                prop_assert!(a.software_id < b.software_id);
            }
        }
    }

    /// 並べ替えはエントリの集合を変えない
    #[test]
    fn prop_sort_is_a_permutation(
        entries in arb_entries(),
        key in proptest::option::of(arb_sort_key())
    ) {
        let mut refs: Vec<&CatalogEntry> = entries.iter().collect();
        sort_entries(&mut refs, key, None);

        let mut ids: Vec<_> = refs.iter().map(|e| e.software_id).collect();
        ids.sort();
        let expected: Vec<_> = entries.iter().map(|e| e.software_id).collect();
        prop_assert_eq!(ids, expected);
    }
}
