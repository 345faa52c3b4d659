//! 並べ替えと外部表現への射影
//!
//! - `sort`: SortKey と安定ソート
//! - `project`: 内部エントリ → 外部向けエントリ（導出特権を含む）

mod project;
mod sort;

pub use project::{project, ExternalPrerogatives, ExternalSoftware};
pub use sort::{sort_and_project, sort_entries, SortKey};
