//! sill view コマンド
//!
//! 一覧とファセットを同じ条件で計算し、まとめて JSON で出力する。
//! ファセット集計はバックグラウンドで一覧の計算と並行して走らせる。

use super::{Context, FilterArgs};
use crate::engine::CatalogView;
use crate::error::Result;
use crate::facet::FacetWorker;
use clap::Parser;
use tracing::debug;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let state = args.filter.to_state(&ctx.config)?;

    let worker = FacetWorker::new();
    let ticket = worker.submit(engine.facet_job(&state));
    let softwares = engine.softwares(&state);

    let options = match ticket.wait().await {
        Some(options) => options,
        None => {
            debug!("background facets unavailable, computing inline");
            engine.facet_options(&state)
        }
    };

    let view = CatalogView { softwares, options };
    let json = if args.compact {
        serde_json::to_string(&view)?
    } else {
        serde_json::to_string_pretty(&view)?
    };
    println!("{json}");

    Ok(())
}
