//! カタログエンジン
//!
//! スナップショットとテキストインデックスの組を保持し、
//! フィルタ状態を受け取って一覧とファセットを計算する。
//! エンジン自身はフィルタ状態を持たない。

use crate::catalog::{CatalogEntry, Snapshot};
use crate::facet::{self, FacetJob, FacetOptions};
use crate::filter::{self, Dimension, FilterState};
use crate::search::TextIndex;
use crate::view::{self, ExternalSoftware};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// 一覧とファセットをまとめた表示用の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub softwares: Vec<ExternalSoftware>,
    pub options: FacetOptions,
}

/// スナップショットに対する検索・絞り込み・集計
#[derive(Debug)]
pub struct CatalogEngine {
    snapshot: Arc<Snapshot>,
    index: Arc<TextIndex>,
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new(Snapshot::empty())
    }
}

impl CatalogEngine {
    pub fn new(snapshot: impl Into<Arc<Snapshot>>) -> Self {
        let snapshot = snapshot.into();
        let index = Arc::new(TextIndex::build(&snapshot));
        Self { snapshot, index }
    }

    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    pub fn index(&self) -> &Arc<TextIndex> {
        &self.index
    }

    /// スナップショットを置き換える
    ///
    /// 同じスナップショットならインデックス（と検索キャッシュ）を再利用する。
    pub fn replace_snapshot(&mut self, snapshot: impl Into<Arc<Snapshot>>) {
        let snapshot = snapshot.into();
        if self.index.is_built_for(&snapshot) {
            debug!(snapshot = %snapshot.id(), "snapshot unchanged, index reused");
            self.snapshot = snapshot;
            return;
        }

        info!(
            previous = %self.snapshot.id(),
            snapshot = %snapshot.id(),
            entries = snapshot.len(),
            "catalog snapshot replaced"
        );
        self.index = Arc::new(TextIndex::build(&snapshot));
        self.snapshot = snapshot;
    }

    /// 空のカタログに戻す（キャッシュも破棄される）
    pub fn clear(&mut self) {
        self.replace_snapshot(Snapshot::empty());
    }

    /// 絞り込み結果（スナップショット順）
    pub fn filter(&self, state: &FilterState, exclude: Option<Dimension>) -> Vec<&CatalogEntry> {
        filter::apply(self.snapshot.entries(), state, &self.index, exclude)
    }

    /// 絞り込み・並べ替え済みの外部向け一覧
    pub fn softwares(&self, state: &FilterState) -> Vec<ExternalSoftware> {
        let filtered = self.filter(state, None);
        let hits = self.index.search(&state.search);
        view::sort_and_project(filtered, state.sort, hits.as_deref())
    }

    pub fn facet_options(&self, state: &FilterState) -> FacetOptions {
        facet::aggregate(&self.snapshot, state, &self.index)
    }

    pub fn view(&self, state: &FilterState) -> CatalogView {
        CatalogView {
            softwares: self.softwares(state),
            options: self.facet_options(state),
        }
    }

    /// バックグラウンド集計用の入力を作る
    pub fn facet_job(&self, state: &FilterState) -> FacetJob {
        FacetJob {
            snapshot: Arc::clone(&self.snapshot),
            index: Arc::clone(&self.index),
            state: state.clone(),
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
