//! フィルタパイプライン
//!
//! 各述語は純粋で、適用順は結果に影響しない（積集合）。
//! 入力スナップショットは変更せず、既存エントリへの参照を返す。

use super::state::{Dimension, FilterState};
use crate::catalog::{CatalogEntry, Environment, Prerogative};
use crate::search::{SearchHits, TextIndex};

/// フィルタ状態に従ってエントリを絞り込む
///
/// - 有効な次元の述語のみを固定順（search → organization → category → environment → prerogatives）で適用
/// - `exclude` で指定した次元は無視する（ファセット集計用）
pub fn apply<'a>(
    entries: &'a [CatalogEntry],
    state: &FilterState,
    index: &TextIndex,
    exclude: Option<Dimension>,
) -> Vec<&'a CatalogEntry> {
    let mut filtered: Vec<&CatalogEntry> = entries.iter().collect();

    for dimension in Dimension::all() {
        if Some(*dimension) == exclude || !state.is_active(*dimension) {
            continue;
        }

        match dimension {
            Dimension::Search => {
                if let Some(hits) = index.search(&state.search) {
                    filtered.retain(|e| matches_search(e, &hits));
                }
            }
            Dimension::Organization => {
                if let Some(organization) = &state.organization {
                    filtered.retain(|e| matches_organization(e, organization));
                }
            }
            Dimension::Category => {
                if let Some(category) = &state.category {
                    filtered.retain(|e| matches_category(e, category));
                }
            }
            Dimension::Environment => {
                if let Some(environment) = state.environment {
                    filtered.retain(|e| matches_environment(e, environment));
                }
            }
            Dimension::Prerogatives => {
                filtered.retain(|e| {
                    state
                        .prerogatives
                        .iter()
                        .all(|p| matches_prerogative(e, *p))
                });
            }
        }
    }

    filtered
}

fn matches_search(entry: &CatalogEntry, hits: &SearchHits) -> bool {
    hits.contains(entry.software_id)
}

fn matches_organization(entry: &CatalogEntry, organization: &str) -> bool {
    entry.organizations.iter().any(|o| o == organization)
}

fn matches_category(entry: &CatalogEntry, category: &str) -> bool {
    entry.categories.iter().any(|c| c == category)
}

fn matches_environment(entry: &CatalogEntry, environment: Environment) -> bool {
    entry.environments.get(environment)
}

/// 導出特権（isInstallableOnUserTerminal）も含めて判定する
fn matches_prerogative(entry: &CatalogEntry, prerogative: Prerogative) -> bool {
    entry.has_prerogative(prerogative)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

#[cfg(test)]
#[path = "pipeline_proptests.rs"]
mod proptests;
