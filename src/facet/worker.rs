//! バックグラウンドでのファセット集計
//!
//! 集計はブロッキングプールで実行し、呼び出し側の応答性を保つ。
//! 新しい集計が投入された時点で、それ以前の結果は古いものとして破棄する。

use super::aggregator::{aggregate, FacetOptions};
use crate::catalog::Snapshot;
use crate::filter::FilterState;
use crate::search::TextIndex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// 1 回分の集計に必要な入力
///
/// スナップショットとインデックスの組は `CatalogEngine::facet_job` で作る。
#[derive(Debug, Clone)]
pub struct FacetJob {
    pub(crate) snapshot: Arc<Snapshot>,
    pub(crate) index: Arc<TextIndex>,
    pub(crate) state: FilterState,
}

impl FacetJob {
    pub fn state(&self) -> &FilterState {
        &self.state
    }
}

/// 集計の投入口（最新の投入だけが結果を返す）
#[derive(Debug, Clone, Default)]
pub struct FacetWorker {
    generation: Arc<AtomicU64>,
}

impl FacetWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の世代番号
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// 集計をブロッキングプールに投入
    ///
    /// tokio ランタイムのコンテキスト内で呼び出すこと。
    pub fn submit(&self, job: FacetJob) -> FacetTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, snapshot = %job.snapshot.id(), "facet computation submitted");

        let handle = tokio::task::spawn_blocking(move || {
            aggregate(&job.snapshot, &job.state, &job.index)
        });

        FacetTicket {
            generation,
            latest: Arc::clone(&self.generation),
            handle,
        }
    }

    /// 投入して結果を待つ
    pub async fn compute(&self, job: FacetJob) -> Option<FacetOptions> {
        self.submit(job).wait().await
    }
}

/// 投入済みの集計
#[derive(Debug)]
pub struct FacetTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
    handle: JoinHandle<FacetOptions>,
}

impl FacetTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// より新しい集計が投入済みか
    pub fn is_stale(&self) -> bool {
        self.latest.load(Ordering::SeqCst) != self.generation
    }

    /// 結果を待つ。古くなっていた場合は `None`
    pub async fn wait(self) -> Option<FacetOptions> {
        let generation = self.generation;
        let options = match self.handle.await {
            Ok(options) => options,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                warn!(generation, error = %e, "facet computation cancelled");
                return None;
            }
        };

        if self.latest.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale facet result");
            return None;
        }
        Some(options)
    }
}
