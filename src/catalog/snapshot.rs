//! カタログスナップショット
//!
//! カタログの更新はスナップショットの丸ごと置き換えで表現する。
//! 派生キャッシュは `SnapshotId` をキーにして再利用する。

use super::entry::{CatalogEntry, Environment, Prerogative, SoftwareId};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SNAPSHOT_ID: AtomicU64 = AtomicU64::new(1);

/// スナップショット識別子（生成ごとに一意）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotId(u64);

impl SnapshotId {
    fn next() -> Self {
        Self(NEXT_SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 不変のカタログスナップショット
#[derive(Debug)]
pub struct Snapshot {
    id: SnapshotId,
    entries: Vec<CatalogEntry>,
}

impl Snapshot {
    /// エントリを正規化してスナップショットを作成
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            id: SnapshotId::next(),
            entries: entries.into_iter().map(CatalogEntry::normalized).collect(),
        }
    }

    /// 空のスナップショット（クリア状態）
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// ソフトウェアIDでエントリを検索
    pub fn get(&self, id: SoftwareId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.software_id == id)
    }

    /// 全エントリの組織（出現順、重複なし）
    pub fn organizations(&self) -> Vec<&str> {
        distinct(self.entries.iter().flat_map(|e| e.organizations.iter()))
    }

    /// 全エントリのカテゴリ（出現順、重複なし）
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.entries.iter().flat_map(|e| e.categories.iter()))
    }

    /// いずれかのエントリが対応している動作環境（列挙順）
    pub fn environments(&self) -> Vec<Environment> {
        Environment::all()
            .iter()
            .copied()
            .filter(|env| self.entries.iter().any(|e| e.environments.get(*env)))
            .collect()
    }

    /// いずれかのエントリが持つ特権（導出特権を含む、列挙順）
    pub fn prerogatives(&self) -> Vec<Prerogative> {
        Prerogative::all()
            .iter()
            .copied()
            .filter(|p| self.entries.iter().any(|e| e.has_prerogative(*p)))
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}
