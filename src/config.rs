//! 設定ファイル（~/.sill/config.toml）
//!
//! ```toml
//! catalog = "catalog.json"
//! default_sort = "user count"
//!
//! [output]
//! color = false
//! ```

use crate::env::{EnvVar, SILL_CATALOG, SILL_CONFIG};
use crate::error::{Result, SillError};
use crate::view::SortKey;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// config.toml のルート構造
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalog: Option<PathBuf>,
    default_sort: Option<String>,
    output: OutputSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputSection {
    color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { color: true }
    }
}

/// 読み込み済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SillConfig {
    /// 既定のカタログ（相対パスは設定ファイルの場所から解決済み）
    pub catalog: Option<PathBuf>,
    /// `--sort` 未指定時の並べ替え
    pub default_sort: Option<SortKey>,
    /// false なら端末でも色を付けない
    pub color: bool,
}

impl Default for SillConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_sort: None,
            color: true,
        }
    }
}

impl SillConfig {
    /// 設定ファイルの場所（$SILL_CONFIG > ~/.sill/config.toml）
    pub fn default_path() -> Option<PathBuf> {
        EnvVar::get(SILL_CONFIG).map(PathBuf::from).or_else(|| {
            EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".sill").join("config.toml"))
        })
    }

    /// Load from default path
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| SillError::Config(format!("{}: {}", path.display(), e)))?;

        let default_sort = file
            .default_sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;

        let catalog = file.catalog.map(|catalog| match path.parent() {
            Some(dir) if catalog.is_relative() => dir.join(catalog),
            _ => catalog,
        });

        debug!(path = %path.display(), "config loaded");
        Ok(Self {
            catalog,
            default_sort,
            color: file.output.color,
        })
    }

    /// 使用するカタログを決める
    ///
    /// 優先順位: 明示指定 > 設定ファイル > $SILL_CATALOG
    pub fn resolve_catalog(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
            .or_else(|| EnvVar::get(SILL_CATALOG).map(PathBuf::from))
            .ok_or_else(|| {
                SillError::Config(format!(
                    "no catalog given. Pass --catalog, set `catalog` in the config file or set {}",
                    SILL_CATALOG
                ))
            })
    }

    /// `--sort` 未指定時の並べ替え
    pub fn resolve_sort(&self, explicit: Option<SortKey>) -> Option<SortKey> {
        explicit.or(self.default_sort)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
