use crate::catalog::{CatalogSource, JsonFileSource};
use crate::cli::{Cli, Command};
use crate::config::SillConfig;
use crate::engine::CatalogEngine;
use crate::env::EnvVar;
use crate::error::Result;
use crate::filter::{FilterKey, FilterState};
use std::io::IsTerminal;
use std::path::PathBuf;

pub mod facets;
pub mod info;
pub mod search;
pub mod view;

/// コマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct Context {
    pub config: SillConfig,
    /// `--catalog` で明示されたパス
    pub catalog: Option<PathBuf>,
}

impl Context {
    pub fn new(config: SillConfig, catalog: Option<PathBuf>) -> Self {
        Self { config, catalog }
    }

    /// カタログを読み込んでエンジンを構築
    pub fn engine(&self) -> Result<CatalogEngine> {
        let path = self.config.resolve_catalog(self.catalog.as_deref())?;
        let snapshot = JsonFileSource::new(path).load()?;
        Ok(CatalogEngine::new(snapshot))
    }

    /// 標準出力に色を付けるか
    pub fn use_color(&self) -> bool {
        self.config.color && std::io::stdout().is_terminal() && !EnvVar::no_color()
    }
}

/// 絞り込み用の共通フラグ
///
/// 値はすべて `FilterUpdate::parse` を通して検証する。
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// Free-text fuzzy search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only software used by this organization
    #[arg(long)]
    pub organization: Option<String>,

    /// Keep only software in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Keep only software running on this environment (linux, windows, mac, browser, smartphone)
    #[arg(long)]
    pub environment: Option<String>,

    /// Require a prerogative (repeatable, all must hold)
    #[arg(long = "prerogative", value_name = "PREROGATIVE")]
    pub prerogatives: Vec<String>,

    /// Sort key, e.g. "user count" or user-count
    #[arg(long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// フラグからフィルタ状態を組み立てる（`--sort` 未指定時は設定の既定値）
    pub fn to_state(&self, config: &SillConfig) -> Result<FilterState> {
        let mut state = FilterState::new();
        state.set(FilterKey::Search.as_str(), self.search.as_deref())?;
        state.set(FilterKey::Organization.as_str(), self.organization.as_deref())?;
        state.set(FilterKey::Category.as_str(), self.category.as_deref())?;
        state.set(FilterKey::Environment.as_str(), self.environment.as_deref())?;

        let prerogatives = self.prerogatives.join(",");
        state.set(FilterKey::Prerogatives.as_str(), Some(prerogatives.as_str()))?;

        state.set(FilterKey::Sort.as_str(), self.sort.as_deref())?;
        state.sort = config.resolve_sort(state.sort);
        Ok(state)
    }
}

pub async fn dispatch(cli: Cli, config: SillConfig) -> Result<()> {
    let ctx = Context::new(config, cli.catalog);
    match cli.command {
        Command::Search(args) => search::run(args, &ctx).await,
        Command::Facets(args) => facets::run(args, &ctx).await,
        Command::View(args) => view::run(args, &ctx).await,
        Command::Info(args) => info::run(args, &ctx).await,
    }
}
