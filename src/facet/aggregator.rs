//! ファセット集計
//!
//! 候補値はスナップショット全体から集めるため、現在の絞り込みで
//! 0 件になった値も件数 0 で残る。
//! 各次元についてパイプラインは 1 回だけ実行し、候補値ごとには再実行しない。

use crate::catalog::{CatalogEntry, Environment, Prerogative, Snapshot};
use crate::filter::{self, Dimension, FilterState};
use crate::search::TextIndex;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// ファセットの選択肢と、それを選んだ場合の件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOption<T> {
    pub value: T,
    pub software_count: usize,
}

/// 全次元のファセット（各次元は件数の昇順、同数はラベル順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub organizations: Vec<FacetOption<String>>,
    pub categories: Vec<FacetOption<String>>,
    pub environments: Vec<FacetOption<Environment>>,
    pub prerogatives: Vec<FacetOption<Prerogative>>,
}

impl FacetOptions {
    pub fn organization_count(&self, organization: &str) -> Option<usize> {
        find_count(&self.organizations, |v| v == organization)
    }

    pub fn category_count(&self, category: &str) -> Option<usize> {
        find_count(&self.categories, |v| v == category)
    }

    pub fn environment_count(&self, environment: Environment) -> Option<usize> {
        find_count(&self.environments, |v| *v == environment)
    }

    pub fn prerogative_count(&self, prerogative: Prerogative) -> Option<usize> {
        find_count(&self.prerogatives, |v| *v == prerogative)
    }
}

fn find_count<T>(options: &[FacetOption<T>], matches: impl Fn(&T) -> bool) -> Option<usize> {
    options
        .iter()
        .find(|o| matches(&o.value))
        .map(|o| o.software_count)
}

/// 全次元のファセットを集計
pub fn aggregate(snapshot: &Snapshot, state: &FilterState, index: &TextIndex) -> FacetOptions {
    FacetOptions {
        organizations: organization_options(snapshot, state, index),
        categories: category_options(snapshot, state, index),
        environments: environment_options(snapshot, state, index),
        prerogatives: prerogative_options(snapshot, state, index),
    }
}

fn organization_options(
    snapshot: &Snapshot,
    state: &FilterState,
    index: &TextIndex,
) -> Vec<FacetOption<String>> {
    let filtered = without(snapshot, state, index, Dimension::Organization);
    let counts = tally(
        &snapshot.organizations(),
        filtered
            .iter()
            .copied()
            .flat_map(|e| e.organizations.iter().map(String::as_str)),
    );
    finish(counts, |v| v, |v: &str| v.to_string())
}

fn category_options(
    snapshot: &Snapshot,
    state: &FilterState,
    index: &TextIndex,
) -> Vec<FacetOption<String>> {
    let filtered = without(snapshot, state, index, Dimension::Category);
    let counts = tally(
        &snapshot.categories(),
        filtered
            .iter()
            .copied()
            .flat_map(|e| e.categories.iter().map(String::as_str)),
    );
    finish(counts, |v| v, |v: &str| v.to_string())
}

fn environment_options(
    snapshot: &Snapshot,
    state: &FilterState,
    index: &TextIndex,
) -> Vec<FacetOption<Environment>> {
    let filtered = without(snapshot, state, index, Dimension::Environment);
    let counts = tally(
        &snapshot.environments(),
        filtered.iter().flat_map(|e| e.environments.enabled()),
    );
    finish(counts, |v: Environment| v.as_str(), |v| v)
}

/// 導出特権を含めて数える（特権フィルタ全体を除外）
fn prerogative_options(
    snapshot: &Snapshot,
    state: &FilterState,
    index: &TextIndex,
) -> Vec<FacetOption<Prerogative>> {
    let filtered = without(snapshot, state, index, Dimension::Prerogatives);
    let counts = tally(
        &snapshot.prerogatives(),
        filtered.iter().flat_map(|e| e.enabled_prerogatives()),
    );
    finish(counts, |v: Prerogative| v.as_str(), |v| v)
}

fn without<'a>(
    snapshot: &'a Snapshot,
    state: &FilterState,
    index: &TextIndex,
    dimension: Dimension,
) -> Vec<&'a CatalogEntry> {
    filter::apply(snapshot.entries(), state, index, Some(dimension))
}

/// 候補値ごとの件数（候補にない値は無視）
fn tally<K>(candidates: &[K], values: impl Iterator<Item = K>) -> Vec<(K, usize)>
where
    K: Copy + Eq + Hash,
{
    let mut counts: HashMap<K, usize> = candidates.iter().map(|c| (*c, 0)).collect();
    for value in values {
        if let Some(count) = counts.get_mut(&value) {
            *count += 1;
        }
    }
    candidates
        .iter()
        .map(|c| (*c, counts.get(c).copied().unwrap_or(0)))
        .collect()
}

/// 件数の昇順、同数ならラベルの辞書順に並べる
fn finish<K, L, T>(
    mut counts: Vec<(K, usize)>,
    label: impl Fn(K) -> L,
    to_value: impl Fn(K) -> T,
) -> Vec<FacetOption<T>>
where
    K: Copy,
    L: Ord,
{
    counts.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| label(a.0).cmp(&label(b.0))));
    counts
        .into_iter()
        .map(|(k, software_count)| FacetOption {
            value: to_value(k),
            software_count,
        })
        .collect()
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;

#[cfg(test)]
#[path = "aggregator_proptests.rs"]
mod proptests;
