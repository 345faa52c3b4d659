//! 外部向けエントリへの射影

use crate::catalog::{CatalogEntry, LastVersion, ParentSoftware, Prerogative, SoftwareId};
use serde::Serialize;

/// 外部向けの特権（導出特権を含む）
///
/// 保存はせず、射影のたびに環境から計算する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPrerogatives {
    pub is_installable_on_user_terminal: bool,
    pub is_present_in_support_contract: bool,
    pub is_from_french_public_services: bool,
    pub do_respect_rgaa: bool,
    pub is_testable: bool,
}

impl ExternalPrerogatives {
    pub fn of(entry: &CatalogEntry) -> Self {
        Self {
            is_installable_on_user_terminal: entry
                .has_prerogative(Prerogative::IsInstallableOnUserTerminal),
            is_present_in_support_contract: entry
                .has_prerogative(Prerogative::IsPresentInSupportContract),
            is_from_french_public_services: entry
                .has_prerogative(Prerogative::IsFromFrenchPublicServices),
            do_respect_rgaa: entry.has_prerogative(Prerogative::DoRespectRgaa),
            is_testable: entry.has_prerogative(Prerogative::IsTestable),
        }
    }

    pub fn get(&self, prerogative: Prerogative) -> bool {
        match prerogative {
            Prerogative::IsInstallableOnUserTerminal => self.is_installable_on_user_terminal,
            Prerogative::IsPresentInSupportContract => self.is_present_in_support_contract,
            Prerogative::IsFromFrenchPublicServices => self.is_from_french_public_services,
            Prerogative::DoRespectRgaa => self.do_respect_rgaa,
            Prerogative::IsTestable => self.is_testable,
        }
    }
}

/// 外部向けエントリ（画面等が消費する形）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSoftware {
    pub software_id: SoftwareId,
    pub logo_url: Option<String>,
    pub software_name: String,
    pub software_description: String,
    pub last_version: Option<LastVersion>,
    pub referent_count: u32,
    pub user_count: u32,
    pub parent_software: Option<ParentSoftware>,
    pub test_url: Option<String>,
    pub prerogatives: ExternalPrerogatives,
}

/// 内部エントリを外部表現に変換
pub fn project(entry: &CatalogEntry) -> ExternalSoftware {
    ExternalSoftware {
        software_id: entry.software_id,
        logo_url: entry.logo_url.clone(),
        software_name: entry.software_name.clone(),
        software_description: entry.software_description.clone(),
        last_version: entry.last_version.clone(),
        referent_count: entry.referent_count,
        user_count: entry.user_count,
        parent_software: entry.parent_software.clone(),
        test_url: entry.test_url.clone(),
        prerogatives: ExternalPrerogatives::of(entry),
    }
}
