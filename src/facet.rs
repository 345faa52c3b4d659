//! ファセット集計
//!
//! - `aggregator`: 次元ごとに「自分以外のフィルタ」を適用した件数を数える
//! - `worker`: 集計をブロッキングプールで実行し、古い結果を破棄する

mod aggregator;
mod worker;

pub use aggregator::{aggregate, FacetOption, FacetOptions};
pub use worker::{FacetJob, FacetTicket, FacetWorker};
