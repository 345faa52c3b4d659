mod code;
mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

use thiserror::Error;

/// SILL 統一エラー型
#[derive(Debug, Error)]
pub enum SillError {
    #[error("Unknown filter key: {0}. Expected one of: search, organization, category, environment, prerogatives, sort")]
    UnknownFilterKey(String),

    #[error("Unknown dimension: {0}. Expected one of: search, organization, category, environment, prerogatives")]
    UnknownDimension(String),

    #[error("Invalid value '{value}' for {key}. Expected one of: {expected}")]
    InvalidFilterValue {
        key: &'static str,
        value: String,
        expected: String,
    },

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Software not found: {0}")]
    SoftwareNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SillError>;

impl SillError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            SillError::UnknownFilterKey(_) => ErrorCode::Val001,
            SillError::UnknownDimension(_) => ErrorCode::Val002,
            SillError::InvalidFilterValue { .. } => ErrorCode::Val003,
            SillError::CatalogNotFound(_) => ErrorCode::Cat001,
            SillError::Json(_) => ErrorCode::Cat002,
            SillError::SoftwareNotFound(_) => ErrorCode::Cat003,
            SillError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorCode::Io002
            }
            SillError::Io(_) => ErrorCode::Io001,
            SillError::Config(_) => ErrorCode::Cfg001,
        }
    }

    /// フィルタ更新境界で拒否されたエラーか
    ///
    /// 呼び出し側はこれを表示・ログ・無視のいずれかで扱える。
    pub fn is_rejected_update(&self) -> bool {
        matches!(
            self,
            SillError::UnknownFilterKey(_)
                | SillError::UnknownDimension(_)
                | SillError::InvalidFilterValue { .. }
        )
    }
}
