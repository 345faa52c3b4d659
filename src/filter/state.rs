//! フィルタ状態
//!
//! 状態は呼び出し側が保持し、再計算のたびに値として渡す。
//! 外部からの更新は `FilterUpdate::parse` で検証してから適用するため、
//! パイプライン内部では常に有効な値だけを扱える。

use crate::catalog::{Environment, Prerogative};
use crate::error::{Result, SillError};
use crate::view::SortKey;
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// 現在の絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// 空文字列は絞り込みなし
    pub search: String,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub environment: Option<Environment>,
    /// すべてを満たすエントリのみ残す（空は制約なし）
    pub prerogatives: BTreeSet<Prerogative>,
    pub sort: Option<SortKey>,
}

impl FilterState {
    /// 初期状態（すべて未指定）
    pub fn new() -> Self {
        Self::default()
    }

    /// 検証済みの更新を適用
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Search(search) => self.search = search,
            FilterUpdate::Organization(organization) => self.organization = organization,
            FilterUpdate::Category(category) => self.category = category,
            FilterUpdate::Environment(environment) => self.environment = environment,
            FilterUpdate::Prerogatives(prerogatives) => self.prerogatives = prerogatives,
            FilterUpdate::Sort(sort) => self.sort = sort,
        }
    }

    /// キーと文字列値で更新（不正なキー・値は拒否し、状態は変更しない）
    pub fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        let update = FilterUpdate::parse(key, value)?;
        self.apply(update);
        Ok(())
    }

    /// 更新を適用した新しい状態を返す
    pub fn with(mut self, update: FilterUpdate) -> Self {
        self.apply(update);
        self
    }

    /// 指定した次元のフィルタが有効か
    pub fn is_active(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Search => !self.search.trim().is_empty(),
            Dimension::Organization => self.organization.is_some(),
            Dimension::Category => self.category.is_some(),
            Dimension::Environment => self.environment.is_some(),
            Dimension::Prerogatives => !self.prerogatives.is_empty(),
        }
    }
}

/// 更新可能なフィルタフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Search,
    Organization,
    Category,
    Environment,
    Prerogatives,
    Sort,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Organization => "organization",
            FilterKey::Category => "category",
            FilterKey::Environment => "environment",
            FilterKey::Prerogatives => "prerogatives",
            FilterKey::Sort => "sort",
        }
    }

    pub fn all() -> &'static [FilterKey] {
        &[
            FilterKey::Search,
            FilterKey::Organization,
            FilterKey::Category,
            FilterKey::Environment,
            FilterKey::Prerogatives,
            FilterKey::Sort,
        ]
    }
}

impl FromStr for FilterKey {
    type Err = SillError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FilterKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SillError::UnknownFilterKey(s.to_string()))
    }
}

/// 検証済みのフィルタ更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Search(String),
    Organization(Option<String>),
    Category(Option<String>),
    Environment(Option<Environment>),
    Prerogatives(BTreeSet<Prerogative>),
    Sort(Option<SortKey>),
}

impl FilterUpdate {
    /// 外部入力（キー・文字列値）を検証して更新に変換
    ///
    /// - `None` または空文字列は該当フィールドのクリア
    /// - `prerogatives` はカンマ区切りの複数指定
    /// - 列挙外の値はここで拒否する
    pub fn parse(key: &str, value: Option<&str>) -> Result<Self> {
        let key: FilterKey = key.parse()?;
        let value = value.filter(|v| !v.is_empty());

        let update = match key {
            FilterKey::Search => FilterUpdate::Search(value.unwrap_or_default().to_string()),
            FilterKey::Organization => FilterUpdate::Organization(value.map(str::to_string)),
            FilterKey::Category => FilterUpdate::Category(value.map(str::to_string)),
            FilterKey::Environment => {
                FilterUpdate::Environment(value.map(str::parse::<Environment>).transpose()?)
            }
            FilterKey::Prerogatives => {
                let prerogatives = value
                    .map(|v| {
                        v.split(',')
                            .map(str::trim)
                            .filter(|p| !p.is_empty())
                            .map(str::parse::<Prerogative>)
                            .collect::<Result<BTreeSet<_>>>()
                    })
                    .transpose()?
                    .unwrap_or_default();
                FilterUpdate::Prerogatives(prerogatives)
            }
            FilterKey::Sort => FilterUpdate::Sort(value.map(str::parse::<SortKey>).transpose()?),
        };

        Ok(update)
    }
}

/// 絞り込み次元（パイプラインの述語単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Search,
    Organization,
    Category,
    Environment,
    Prerogatives,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Search => "search",
            Dimension::Organization => "organization",
            Dimension::Category => "category",
            Dimension::Environment => "environment",
            Dimension::Prerogatives => "prerogatives",
        }
    }

    /// パイプラインの適用順
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Search,
            Dimension::Organization,
            Dimension::Category,
            Dimension::Environment,
            Dimension::Prerogatives,
        ]
    }

    /// ファセット集計の対象次元（検索は離散値を持たないため除く）
    pub fn faceted() -> &'static [Dimension] {
        &[
            Dimension::Organization,
            Dimension::Category,
            Dimension::Environment,
            Dimension::Prerogatives,
        ]
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = SillError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Dimension::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| SillError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
