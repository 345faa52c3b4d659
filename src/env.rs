//! 環境変数

/// 設定ファイルのパス
pub const SILL_CONFIG: &str = "SILL_CONFIG";

/// 既定のカタログ JSON のパス
pub const SILL_CATALOG: &str = "SILL_CATALOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 出力の色付けを抑止するか（NO_COLOR は値を問わず存在で有効）
    pub fn no_color() -> bool {
        std::env::var_os("NO_COLOR").is_some()
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
