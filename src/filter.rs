//! フィルタロジック
//!
//! - `state`: FilterState と更新境界（キー・値の検証）
//! - `pipeline`: 述語を固定順に適用してエントリを絞り込む

mod pipeline;
mod state;

pub use pipeline::apply;
pub use state::{Dimension, FilterKey, FilterState, FilterUpdate};
