//! 全文あいまい検索
//!
//! スナップショットごとに一度だけインデックスを構築し、
//! 直近のクエリ結果を 1 スロットだけキャッシュする。

mod index;

pub use index::{SearchHits, TextIndex};
