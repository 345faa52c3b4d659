//! カタログストア
//!
//! ソフトウェアエントリのスナップショットと、その読み込み口を提供する。
//!
//! - `entry`: CatalogEntry と固定列挙型（Environment / Prerogative）
//! - `snapshot`: 不変スナップショット（全派生計算の唯一の情報源）
//! - `source`: 外部データソースのインターフェース

mod entry;
mod snapshot;
mod source;

pub use entry::{
    CatalogEntry, Environment, Environments, LastVersion, ParentSoftware, Prerogative,
    Prerogatives, SoftwareId,
};
pub use snapshot::{Snapshot, SnapshotId};
pub use source::{parse_entries, CatalogSource, JsonFileSource};
