use owo_colors::OwoColorize;

/// 一覧の末尾に出す件数サマリ
pub struct MatchSummary {
    pub prefix: String,
    pub message: String,
}

impl MatchSummary {
    pub fn format(matched: usize, total: usize) -> Self {
        match (matched, total) {
            (_, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "Catalog is empty".to_string(),
            },
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: "No matching software found".to_string(),
            },
            (m, t) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} software(s) matched", m.green(), t),
            },
        }
    }

    /// 色なしの 1 行表現
    pub fn plain(matched: usize, total: usize) -> String {
        match (matched, total) {
            (_, 0) => "Catalog is empty".to_string(),
            (0, _) => "No matching software found".to_string(),
            (m, t) => format!("{} of {} software(s) matched", m, t),
        }
    }

    pub fn line(&self) -> String {
        format!("{} {}", self.prefix, self.message)
    }
}
