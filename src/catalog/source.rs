//! カタログデータソース
//!
//! 取得処理そのもの（API クライアント等）はこのクレートの外側にある。
//! ここではインターフェースと、JSON ファイルからの読み込み実装のみを提供する。

use super::entry::CatalogEntry;
use super::snapshot::Snapshot;
use crate::error::{Result, SillError};
use std::path::{Path, PathBuf};
use tracing::info;

/// スナップショットを供給するデータソース
pub trait CatalogSource {
    /// カタログ全体を読み込み、新しいスナップショットを返す
    fn load(&self) -> Result<Snapshot>;
}

/// JSON 配列を文字列からパース
pub fn parse_entries(content: &str) -> Result<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(content)?)
}

/// JSON ファイル（エントリの配列）から読み込むソース
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Err(SillError::CatalogNotFound(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let entries = parse_entries(&content)?;
        let snapshot = Snapshot::new(entries);

        info!(
            path = %self.path.display(),
            entries = snapshot.len(),
            snapshot = %snapshot.id(),
            "catalog loaded"
        );

        Ok(snapshot)
    }
}
