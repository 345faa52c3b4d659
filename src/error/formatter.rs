use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::SillError;
use crate::env::EnvVar;

/// 出力行の種類（色付けの単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Headline,
    Gutter,
    Cause,
    Remediation,
    Detail,
    Note,
}

/// SillError を CLI 向けに整形する
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// stderr が端末で NO_COLOR 未設定なら色を付ける
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::stderr_supports_color)
    }

    /// 端末判定を差し替え可能にしたコンストラクタ（テスト用）
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        Self::with_color(verbose, detect_color())
    }

    pub fn with_color(verbose: bool, use_color: bool) -> Self {
        Self { verbose, use_color }
    }

    fn stderr_supports_color() -> bool {
        std::io::stderr().is_terminal() && !EnvVar::no_color()
    }

    pub fn format(&self, error: &SillError) -> String {
        self.lines(error)
            .into_iter()
            .map(|(kind, text)| self.paint(kind, text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn lines(&self, error: &SillError) -> Vec<(Line, String)> {
        let code = error.code();
        let mut lines = vec![(Line::Headline, format!("error[{}]: {}", code.as_str(), error))];
        if !self.verbose {
            return lines;
        }

        lines.push((Line::Gutter, "  |".to_string()));
        lines.push((Line::Cause, format!("  | Cause: {}", code.cause())));
        lines.push((Line::Gutter, "  |".to_string()));
        lines.push((Line::Remediation, "  | Remediation:".to_string()));
        lines.extend(
            code.remediation()
                .lines()
                .map(|step| (Line::Detail, format!("  |   {}", step))),
        );

        let mut source = error.source();
        if source.is_some() {
            lines.push((Line::Gutter, "  |".to_string()));
            lines.push((Line::Detail, "  | Caused by:".to_string()));
        }
        while let Some(err) = source {
            lines.push((Line::Note, format!("  |   - {}", err)));
            source = err.source();
        }

        lines.push((Line::Gutter, "  |".to_string()));
        if error.is_rejected_update() {
            lines.push((
                Line::Note,
                "  = note: the filter was not applied".to_string(),
            ));
        }
        lines.push((
            Line::Note,
            "  = note: run `sill --help` for usage".to_string(),
        ));
        lines
    }

    fn paint(&self, kind: Line, text: String) -> String {
        if !self.use_color {
            return text;
        }
        match kind {
            Line::Headline => match text.find(']') {
                Some(end) => {
                    let (code, message) = text.split_at(end + 1);
                    format!("{}{}", code.red().bold(), message.bold())
                }
                None => text.red().bold().to_string(),
            },
            Line::Cause => text.yellow().to_string(),
            Line::Remediation => text.green().to_string(),
            Line::Note => text.dimmed().to_string(),
            Line::Gutter | Line::Detail => text,
        }
    }
}
