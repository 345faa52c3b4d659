//! テスト用フィクスチャ
//!
//! ユニットテストと proptest で共有するカタログ構築ヘルパー。

use crate::catalog::{CatalogEntry, Environment, LastVersion, Prerogative, Snapshot, SoftwareId};
use crate::filter::FilterState;
use crate::view::SortKey;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// テスト用エントリビルダー
pub(crate) struct EntryBuilder(CatalogEntry);

impl EntryBuilder {
    pub fn new(id: SoftwareId, name: &str) -> Self {
        Self(CatalogEntry::new(id, name))
    }

    pub fn description(mut self, description: &str) -> Self {
        self.0.software_description = description.to_string();
        self
    }

    pub fn organizations(mut self, organizations: &[&str]) -> Self {
        self.0.organizations = organizations.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.0.categories = categories.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn environments(mut self, environments: &[Environment]) -> Self {
        for env in environments {
            match env {
                Environment::Linux => self.0.environments.linux = true,
                Environment::Windows => self.0.environments.windows = true,
                Environment::Mac => self.0.environments.mac = true,
                Environment::Browser => self.0.environments.browser = true,
                Environment::Smartphone => self.0.environments.smartphone = true,
            }
        }
        self
    }

    /// 保存される特権のみ設定できる（導出特権は環境で決まる）
    pub fn prerogatives(mut self, prerogatives: &[Prerogative]) -> Self {
        for p in prerogatives {
            match p {
                Prerogative::IsInstallableOnUserTerminal => {}
                Prerogative::IsPresentInSupportContract => {
                    self.0.prerogatives.is_present_in_support_contract = true
                }
                Prerogative::IsFromFrenchPublicServices => {
                    self.0.prerogatives.is_from_french_public_services = true
                }
                Prerogative::DoRespectRgaa => self.0.prerogatives.do_respect_rgaa = true,
                Prerogative::IsTestable => self.0.prerogatives.is_testable = true,
            }
        }
        self
    }

    pub fn added(mut self, time: i64) -> Self {
        self.0.added_time = time;
        self
    }

    pub fn updated(mut self, time: i64) -> Self {
        self.0.update_time = time;
        self
    }

    pub fn version(mut self, sem_ver: &str, publication_time: i64) -> Self {
        self.0.last_version = Some(LastVersion {
            sem_ver: sem_ver.to_string(),
            publication_time,
        });
        self
    }

    pub fn users(mut self, count: u32) -> Self {
        self.0.user_count = count;
        self
    }

    pub fn referents(mut self, count: u32) -> Self {
        self.0.referent_count = count;
        self
    }

    pub fn build(self) -> CatalogEntry {
        self.0
    }
}

/// 4 件の固定カタログ
///
/// | id | name | categories | organizations | environments | stored prerogatives |
/// |----|------|------------|---------------|--------------|---------------------|
/// | 1 | NextCloud | storage | DINUM | linux, browser | support contract |
/// | 2 | OnlyOffice | office | DINUM | - | - |
/// | 3 | LibreOffice | office | CNRS | linux, windows, mac | testable, rgaa |
/// | 4 | Thunderbird | email, office | CNRS | windows | testable |
pub(crate) fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        EntryBuilder::new(1, "NextCloud")
            .description("File hosting and sharing")
            .categories(&["storage"])
            .organizations(&["DINUM"])
            .environments(&[Environment::Linux, Environment::Browser])
            .prerogatives(&[Prerogative::IsPresentInSupportContract])
            .added(300)
            .updated(30)
            .version("27.0.0", 1_000)
            .users(10)
            .referents(3)
            .build(),
        EntryBuilder::new(2, "OnlyOffice")
            .description("Collaborative office suite")
            .categories(&["office"])
            .organizations(&["DINUM"])
            .added(100)
            .updated(10)
            .users(5)
            .referents(1)
            .build(),
        EntryBuilder::new(3, "LibreOffice")
            .description("Desktop office suite")
            .categories(&["office"])
            .organizations(&["CNRS"])
            .environments(&[Environment::Linux, Environment::Windows, Environment::Mac])
            .prerogatives(&[Prerogative::IsTestable, Prerogative::DoRespectRgaa])
            .added(200)
            .updated(40)
            .version("7.5.0", 2_000)
            .users(30)
            .referents(2)
            .build(),
        EntryBuilder::new(4, "Thunderbird")
            .description("Mail client")
            .categories(&["email", "office"])
            .organizations(&["CNRS"])
            .environments(&[Environment::Windows])
            .prerogatives(&[Prerogative::IsTestable])
            .added(200)
            .updated(20)
            .version("115.0", 1_000)
            .users(10)
            .referents(3)
            .build(),
    ]
}

pub(crate) fn sample_snapshot() -> Snapshot {
    Snapshot::new(sample_entries())
}

pub(crate) fn ids(entries: &[&CatalogEntry]) -> Vec<SoftwareId> {
    entries.iter().map(|e| e.software_id).collect()
}

// ============================================================================
// proptest strategies
// ============================================================================

const NAMES: &[&str] = &["NextCloud", "OnlyOffice", "LibreOffice", "Gimp", "Vim", "Firefox"];
const ORGANIZATIONS: &[&str] = &["DINUM", "CNRS", "INSEE"];
const CATEGORIES: &[&str] = &["office", "storage", "email"];
const SEARCHES: &[&str] = &["", "office", "cloud", "vim", "zz"];
const SELECTED_ORGANIZATIONS: &[&str] = &["DINUM", "CNRS", "UNKNOWN"];

fn arb_subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(pool, 0..=pool.len())
        .prop_map(|values| values.into_iter().map(str::to_string).collect())
}

fn arb_entry() -> impl Strategy<Value = CatalogEntry> {
    (
        proptest::sample::select(NAMES),
        arb_subset(ORGANIZATIONS),
        arb_subset(CATEGORIES),
        proptest::array::uniform5(any::<bool>()),
        proptest::array::uniform4(any::<bool>()),
        (0i64..4, 0i64..4, proptest::option::of(0i64..4)),
        (0u32..4, 0u32..4),
    )
        .prop_map(
            |(name, organizations, categories, envs, prerogs, times, counts)| {
                let (added, updated, published) = times;
                let (users, referents) = counts;
                let mut entry = CatalogEntry::new(0, name);
                entry.organizations = organizations;
                entry.categories = categories;
                entry.environments.linux = envs[0];
                entry.environments.windows = envs[1];
                entry.environments.mac = envs[2];
                entry.environments.browser = envs[3];
                entry.environments.smartphone = envs[4];
                entry.prerogatives.is_present_in_support_contract = prerogs[0];
                entry.prerogatives.is_from_french_public_services = prerogs[1];
                entry.prerogatives.do_respect_rgaa = prerogs[2];
                entry.prerogatives.is_testable = prerogs[3];
                entry.added_time = added;
                entry.update_time = updated;
                entry.last_version = published.map(|t| LastVersion {
                    sem_ver: format!("1.{t}.0"),
                    publication_time: t,
                });
                entry.user_count = users;
                entry.referent_count = referents;
                entry
            },
        )
}

/// IDが一意なエントリ列
pub(crate) fn arb_entries() -> impl Strategy<Value = Vec<CatalogEntry>> {
    proptest::collection::vec(arb_entry(), 0..12).prop_map(|mut entries| {
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.software_id = i as SoftwareId + 1;
        }
        entries
    })
}

pub(crate) fn arb_prerogatives() -> impl Strategy<Value = BTreeSet<Prerogative>> {
    proptest::sample::subsequence(Prerogative::all(), 0..=2)
        .prop_map(|values| values.into_iter().collect())
}

pub(crate) fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    proptest::sample::select(SortKey::all())
}

pub(crate) fn arb_filter_state() -> impl Strategy<Value = FilterState> {
    (
        proptest::sample::select(SEARCHES),
        proptest::option::of(proptest::sample::select(SELECTED_ORGANIZATIONS)),
        proptest::option::of(proptest::sample::select(CATEGORIES)),
        proptest::option::of(proptest::sample::select(Environment::all())),
        arb_prerogatives(),
        proptest::option::of(arb_sort_key()),
    )
        .prop_map(
            |(search, organization, category, environment, prerogatives, sort)| FilterState {
                search: search.to_string(),
                organization: organization.map(str::to_string),
                category: category.map(str::to_string),
                environment,
                prerogatives,
                sort,
            },
        )
}
