//! 並べ替え
//!
//! すべての並べ替えは安定ソートで、同値のエントリはスナップショット順を保つ。

use super::project::{project, ExternalSoftware};
use crate::catalog::CatalogEntry;
use crate::error::SillError;
use crate::search::SearchHits;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// 並べ替えキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// 追加時刻の降順
    #[serde(rename = "added time")]
    AddedTime,
    /// 更新時刻の降順
    #[serde(rename = "update time")]
    UpdateTime,
    /// 最新バージョン公開時刻の降順（バージョンなしは 0 扱いで末尾）
    #[serde(rename = "last version publication date")]
    LastVersionPublicationDate,
    /// 利用者数の降順
    #[serde(rename = "user count")]
    UserCount,
    /// リファレント数の降順
    #[serde(rename = "referent count")]
    ReferentCount,
    /// 利用者数の昇順
    #[serde(rename = "user count ASC")]
    UserCountAsc,
    /// リファレント数の昇順
    #[serde(rename = "referent count ASC")]
    ReferentCountAsc,
}

impl SortKey {
    /// ラベル文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::AddedTime => "added time",
            SortKey::UpdateTime => "update time",
            SortKey::LastVersionPublicationDate => "last version publication date",
            SortKey::UserCount => "user count",
            SortKey::ReferentCount => "referent count",
            SortKey::UserCountAsc => "user count ASC",
            SortKey::ReferentCountAsc => "referent count ASC",
        }
    }

    /// CLI 向けの別名（ケバブケース）
    pub fn alias(&self) -> &'static str {
        match self {
            SortKey::AddedTime => "added-time",
            SortKey::UpdateTime => "update-time",
            SortKey::LastVersionPublicationDate => "last-version-publication-date",
            SortKey::UserCount => "user-count",
            SortKey::ReferentCount => "referent-count",
            SortKey::UserCountAsc => "user-count-asc",
            SortKey::ReferentCountAsc => "referent-count-asc",
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::AddedTime,
            SortKey::UpdateTime,
            SortKey::LastVersionPublicationDate,
            SortKey::UserCount,
            SortKey::ReferentCount,
            SortKey::UserCountAsc,
            SortKey::ReferentCountAsc,
        ]
    }

    /// 2 エントリを比較（先に来るべき方が Less）
    pub fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::AddedTime => b.added_time.cmp(&a.added_time),
            SortKey::UpdateTime => b.update_time.cmp(&a.update_time),
            SortKey::LastVersionPublicationDate => b
                .last_version_publication_time()
                .cmp(&a.last_version_publication_time()),
            SortKey::UserCount => b.user_count.cmp(&a.user_count),
            SortKey::ReferentCount => b.referent_count.cmp(&a.referent_count),
            SortKey::UserCountAsc => a.user_count.cmp(&b.user_count),
            SortKey::ReferentCountAsc => a.referent_count.cmp(&b.referent_count),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s || k.alias() == s)
            .ok_or_else(|| SillError::InvalidFilterValue {
                key: "sort",
                value: s.to_string(),
                expected: SortKey::all()
                    .iter()
                    .map(|k| k.alias())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// エントリを並べ替える
///
/// - `sort` 指定時: そのキーで安定ソート
/// - 未指定かつ検索ヒットあり: あいまい検索のスコア順
/// - それ以外: 入力順のまま
pub fn sort_entries(
    entries: &mut [&CatalogEntry],
    sort: Option<SortKey>,
    hits: Option<&SearchHits>,
) {
    match (sort, hits) {
        (Some(key), _) => entries.sort_by(|a, b| key.compare(a, b)),
        (None, Some(hits)) => entries.sort_by_key(|e| hits.rank(e.software_id).unwrap_or(usize::MAX)),
        (None, None) => {}
    }
}

/// 並べ替えてから外部表現に射影する
pub fn sort_and_project(
    mut entries: Vec<&CatalogEntry>,
    sort: Option<SortKey>,
    hits: Option<&SearchHits>,
) -> Vec<ExternalSoftware> {
    sort_entries(&mut entries, sort, hits);
    entries.into_iter().map(project).collect()
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;

#[cfg(test)]
#[path = "sort_proptests.rs"]
mod proptests;
