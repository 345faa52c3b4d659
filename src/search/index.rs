//! テキストインデックス

use crate::catalog::{Snapshot, SnapshotId, SoftwareId};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// 検索結果（スコアの高い順）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits {
    ranked: Vec<SoftwareId>,
    rank: HashMap<SoftwareId, usize>,
}

impl SearchHits {
    fn new(ranked: Vec<SoftwareId>) -> Self {
        let rank = ranked.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        Self { ranked, rank }
    }

    /// ヒットしたか
    pub fn contains(&self, id: SoftwareId) -> bool {
        self.rank.contains_key(&id)
    }

    /// 順位（0 が最良）
    pub fn rank(&self, id: SoftwareId) -> Option<usize> {
        self.rank.get(&id).copied()
    }

    /// ヒットしたIDをスコア順に返す
    pub fn ids(&self) -> &[SoftwareId] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// 直近のクエリ結果
struct CachedQuery {
    query: String,
    hits: Arc<SearchHits>,
}

/// スナップショット単位のあいまい検索インデックス
pub struct TextIndex {
    snapshot_id: SnapshotId,
    haystacks: Vec<(SoftwareId, String)>,
    last: Mutex<Option<CachedQuery>>,
}

impl std::fmt::Debug for TextIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextIndex")
            .field("snapshot_id", &self.snapshot_id)
            .field("entries", &self.haystacks.len())
            .finish()
    }
}

impl TextIndex {
    /// スナップショットからインデックスを構築（O(entries)）
    pub fn build(snapshot: &Snapshot) -> Self {
        let haystacks: Vec<(SoftwareId, String)> = snapshot
            .entries()
            .iter()
            .map(|e| (e.software_id, e.search.clone()))
            .collect();

        debug!(
            snapshot = %snapshot.id(),
            entries = haystacks.len(),
            "text index built"
        );

        Self {
            snapshot_id: snapshot.id(),
            haystacks,
            last: Mutex::new(None),
        }
    }

    pub fn snapshot_id(&self) -> SnapshotId {
        self.snapshot_id
    }

    /// 指定スナップショット用に構築されたインデックスか
    pub fn is_built_for(&self, snapshot: &Snapshot) -> bool {
        self.snapshot_id == snapshot.id()
    }

    /// クエリにマッチするエントリを返す
    ///
    /// - 空白のみのクエリはインデックスを使わず `None`（絞り込みなし）
    /// - `!` `^` `'` `$` などは演算子ではなく文字として扱う
    /// - 直前と同じクエリならキャッシュ済みの結果を返す
    pub fn search(&self, query: &str) -> Option<Arc<SearchHits>> {
        if query.trim().is_empty() {
            return None;
        }

        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(cached) = last.as_ref().filter(|c| c.query == query) {
            debug!(query, "search cache hit");
            return Some(Arc::clone(&cached.hits));
        }

        let hits = Arc::new(self.run(query));
        debug!(query, hits = hits.len(), "search cache miss");

        *last = Some(CachedQuery {
            query: query.to_string(),
            hits: Arc::clone(&hits),
        });

        Some(hits)
    }

    fn run(&self, query: &str) -> SearchHits {
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<(SoftwareId, u32)> = self
            .haystacks
            .iter()
            .filter_map(|(id, haystack)| {
                buf.clear();
                let utf32 = Utf32Str::new(haystack, &mut buf);
                pattern.score(utf32, &mut matcher).map(|score| (*id, score))
            })
            .collect();

        // 安定ソート: 同点はスナップショット順
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        SearchHits::new(scored.into_iter().map(|(id, _)| id).collect())
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
