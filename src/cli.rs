use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{facets, info, search, view};

#[derive(Debug, Parser)]
#[command(name = "sill")]
#[command(about = "SILL software catalog CLI", long_about = None)]
pub struct Cli {
    /// Catalog JSON file (overrides config and SILL_CATALOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Show cause and remediation on errors
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ソフトウェアの検索・絞り込み
    Search(search::Args),

    /// ファセットごとの件数を表示
    Facets(facets::Args),

    /// 一覧とファセットを JSON で出力
    View(view::Args),

    /// ソフトウェアの詳細表示
    Info(info::Args),
}
