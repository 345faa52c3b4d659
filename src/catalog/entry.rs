//! カタログエントリと固定列挙型の定義

use crate::error::SillError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ソフトウェアID
pub type SoftwareId = u64;

/// 動作環境
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Linux,
    Windows,
    Mac,
    Browser,
    Smartphone,
}

impl Environment {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Linux => "linux",
            Environment::Windows => "windows",
            Environment::Mac => "mac",
            Environment::Browser => "browser",
            Environment::Smartphone => "smartphone",
        }
    }

    /// 全動作環境を取得
    pub fn all() -> &'static [Environment] {
        &[
            Environment::Linux,
            Environment::Windows,
            Environment::Mac,
            Environment::Browser,
            Environment::Smartphone,
        ]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::all()
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| SillError::InvalidFilterValue {
                key: "environment",
                value: s.to_string(),
                expected: join_names(Environment::all().iter().map(|e| e.as_str())),
            })
    }
}

/// 特権（プレロガティブ）
///
/// `IsInstallableOnUserTerminal` だけは保存されず、環境から都度導出される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Prerogative {
    IsInstallableOnUserTerminal,
    IsPresentInSupportContract,
    IsFromFrenchPublicServices,
    DoRespectRgaa,
    IsTestable,
}

impl Prerogative {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Prerogative::IsInstallableOnUserTerminal => "isInstallableOnUserTerminal",
            Prerogative::IsPresentInSupportContract => "isPresentInSupportContract",
            Prerogative::IsFromFrenchPublicServices => "isFromFrenchPublicServices",
            Prerogative::DoRespectRgaa => "doRespectRgaa",
            Prerogative::IsTestable => "isTestable",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            Prerogative::IsInstallableOnUserTerminal => "Installable on user terminal",
            Prerogative::IsPresentInSupportContract => "Present in support contract",
            Prerogative::IsFromFrenchPublicServices => "From French public services",
            Prerogative::DoRespectRgaa => "Respects RGAA",
            Prerogative::IsTestable => "Testable",
        }
    }

    /// 環境から導出される特権か
    pub fn is_derived(&self) -> bool {
        matches!(self, Prerogative::IsInstallableOnUserTerminal)
    }

    /// 全特権を取得
    pub fn all() -> &'static [Prerogative] {
        &[
            Prerogative::IsInstallableOnUserTerminal,
            Prerogative::IsPresentInSupportContract,
            Prerogative::IsFromFrenchPublicServices,
            Prerogative::DoRespectRgaa,
            Prerogative::IsTestable,
        ]
    }
}

impl std::fmt::Display for Prerogative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Prerogative {
    type Err = SillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prerogative::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| SillError::InvalidFilterValue {
                key: "prerogatives",
                value: s.to_string(),
                expected: join_names(Prerogative::all().iter().map(|p| p.as_str())),
            })
    }
}

pub(crate) fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// 動作環境ごとの対応状況
///
/// 未知のキーはデシリアライズ時に無視される。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environments {
    pub linux: bool,
    pub windows: bool,
    pub mac: bool,
    pub browser: bool,
    pub smartphone: bool,
}

impl Environments {
    pub fn get(&self, environment: Environment) -> bool {
        match environment {
            Environment::Linux => self.linux,
            Environment::Windows => self.windows,
            Environment::Mac => self.mac,
            Environment::Browser => self.browser,
            Environment::Smartphone => self.smartphone,
        }
    }

    /// 対応している環境を列挙順で返す
    pub fn enabled(&self) -> impl Iterator<Item = Environment> + '_ {
        Environment::all().iter().copied().filter(|e| self.get(*e))
    }

    /// 利用者端末にインストール可能か（ブラウザは含まない）
    pub fn is_installable_on_user_terminal(&self) -> bool {
        self.linux || self.mac || self.windows || self.smartphone
    }
}

/// 保存される特権フラグ（導出される特権は含まない）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prerogatives {
    pub is_present_in_support_contract: bool,
    pub is_from_french_public_services: bool,
    pub do_respect_rgaa: bool,
    pub is_testable: bool,
}

/// 最新バージョン情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastVersion {
    pub sem_ver: String,
    /// 公開時刻（epoch ミリ秒）
    pub publication_time: i64,
}

/// 親ソフトウェアへの参照（所有しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentSoftware {
    pub software_id: String,
    pub software_name: String,
}

/// カタログエントリ
///
/// スナップショットに入った後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub software_id: SoftwareId,
    pub software_name: String,
    #[serde(default)]
    pub software_description: String,
    /// 検索用テキスト（小文字化済み）。空ならスナップショット構築時に導出する
    #[serde(default)]
    pub search: String,
    /// 追加時刻（epoch ミリ秒）
    #[serde(default)]
    pub added_time: i64,
    /// 更新時刻（epoch ミリ秒）
    #[serde(default)]
    pub update_time: i64,
    #[serde(default)]
    pub last_version: Option<LastVersion>,
    #[serde(default)]
    pub referent_count: u32,
    #[serde(default)]
    pub user_count: u32,
    #[serde(default)]
    pub parent_software: Option<ParentSoftware>,
    #[serde(default)]
    pub test_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub environments: Environments,
    #[serde(default)]
    pub prerogatives: Prerogatives,
}

impl CatalogEntry {
    /// 最小構成のエントリを作成
    pub fn new(software_id: SoftwareId, software_name: impl Into<String>) -> Self {
        Self {
            software_id,
            software_name: software_name.into(),
            software_description: String::new(),
            search: String::new(),
            added_time: 0,
            update_time: 0,
            last_version: None,
            referent_count: 0,
            user_count: 0,
            parent_software: None,
            test_url: None,
            logo_url: None,
            categories: Vec::new(),
            organizations: Vec::new(),
            environments: Environments::default(),
            prerogatives: Prerogatives::default(),
        }
    }

    /// 特権を持つか（導出特権を含む）
    pub fn has_prerogative(&self, prerogative: Prerogative) -> bool {
        match prerogative {
            Prerogative::IsInstallableOnUserTerminal => {
                self.environments.is_installable_on_user_terminal()
            }
            Prerogative::IsPresentInSupportContract => {
                self.prerogatives.is_present_in_support_contract
            }
            Prerogative::IsFromFrenchPublicServices => {
                self.prerogatives.is_from_french_public_services
            }
            Prerogative::DoRespectRgaa => self.prerogatives.do_respect_rgaa,
            Prerogative::IsTestable => self.prerogatives.is_testable,
        }
    }

    /// 保持している特権を列挙順で返す（導出特権を含む）
    pub fn enabled_prerogatives(&self) -> impl Iterator<Item = Prerogative> + '_ {
        Prerogative::all()
            .iter()
            .copied()
            .filter(|p| self.has_prerogative(*p))
    }

    /// 最新バージョンの公開時刻（バージョンがなければ 0）
    pub fn last_version_publication_time(&self) -> i64 {
        self.last_version
            .as_ref()
            .map(|v| v.publication_time)
            .unwrap_or(0)
    }

    /// スナップショット投入前の正規化
    ///
    /// - 重複したカテゴリ・組織を除去（最初の出現順を維持）
    /// - 検索用テキストが空なら名前・説明・組織・カテゴリから導出
    pub(crate) fn normalized(mut self) -> Self {
        dedup_in_place(&mut self.categories);
        dedup_in_place(&mut self.organizations);

        if self.search.trim().is_empty() {
            self.search = self.derive_search_text();
        } else {
            self.search = self.search.to_lowercase();
        }

        self
    }

    fn derive_search_text(&self) -> String {
        let mut parts = vec![
            self.software_name.as_str(),
            self.software_description.as_str(),
        ];
        parts.extend(self.organizations.iter().map(String::as_str));
        parts.extend(self.categories.iter().map(String::as_str));
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

fn dedup_in_place(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;
